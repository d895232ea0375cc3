//! Event facade binding the measurement engine and route selector to a
//! single-threaded host event loop.

use geo::Point;

use crate::Generation;
use crate::error::Error;
use crate::measure::{MeasurementEngine, VisualizationUpdate};
use crate::model::{MeasureMode, RouteCandidate, RouteInfo};
use crate::render::RouteRenderUpdate;
use crate::route::{AlternativeSelector, QueryOutcome};

/// Discrete input events the host forwards to the core.
#[derive(Debug)]
pub enum InputEvent {
    /// Map click while a measurement tool is active.
    PointerClick(Point<f64>),
    /// A vertex marker finished dragging.
    PointerDragEnd { index: usize, at: Point<f64> },
    /// The delete button on a vertex marker was pressed.
    DeleteRequest(usize),
    ModeToggle(MeasureMode),
    ClearRequest,
    /// An asynchronous route request resolved. `generation` is the
    /// value returned by [`MapSession::begin_route_query`] for that
    /// request.
    RouteSetReceived {
        generation: Generation,
        result: Result<Vec<RouteInfo>, Error>,
    },
    AlternativeSelectRequest(usize),
}

/// Notifications the host consumes after each event.
#[derive(Debug)]
pub enum Notification {
    /// Redraw measurement line/fill/labels from this snapshot.
    Visualization(VisualizationUpdate),
    /// Redraw route layers in two-pass order.
    RouteRender(RouteRenderUpdate),
    /// The active route changed; the host may recentre or fit the
    /// view.
    SelectionChanged(RouteCandidate),
    /// A route request failed; recoverable, user-visible message. The
    /// previous alternative set is still intact.
    RouteFailed(String),
}

/// One interactive map session.
///
/// Mutations are strictly serialized: each event is fully processed,
/// recomputation included, before [`MapSession::handle`] returns, so
/// two rapid clicks can never interleave their passes.
#[derive(Debug, Default)]
pub struct MapSession {
    measurement: MeasurementEngine,
    routes: AlternativeSelector,
}

impl MapSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn measurement(&self) -> &MeasurementEngine {
        &self.measurement
    }

    pub fn routes(&self) -> &AlternativeSelector {
        &self.routes
    }

    /// Starts a new route request; any earlier in-flight request is
    /// superseded and its eventual result will be dropped.
    pub fn begin_route_query(&mut self) -> Generation {
        self.routes.begin_query()
    }

    /// Processes one input event and returns the notifications the
    /// host must act on, in order.
    pub fn handle(&mut self, event: InputEvent) -> Vec<Notification> {
        match event {
            InputEvent::PointerClick(at) => {
                vec![Notification::Visualization(self.measurement.add_point(at))]
            }
            InputEvent::PointerDragEnd { index, at } => {
                vec![Notification::Visualization(
                    self.measurement.move_point(index, at),
                )]
            }
            InputEvent::DeleteRequest(index) => {
                vec![Notification::Visualization(
                    self.measurement.remove_point(index),
                )]
            }
            InputEvent::ModeToggle(mode) => {
                vec![Notification::Visualization(
                    self.measurement.toggle_mode(mode),
                )]
            }
            InputEvent::ClearRequest => {
                vec![Notification::Visualization(self.measurement.clear())]
            }
            InputEvent::RouteSetReceived { generation, result } => {
                match self.routes.apply_query_result(generation, result) {
                    Ok(QueryOutcome::Applied) => {
                        let mut notifications =
                            vec![Notification::RouteRender(self.route_render_update())];
                        if let Some(candidate) = self.routes.selected() {
                            notifications.push(Notification::SelectionChanged(candidate.clone()));
                        }
                        notifications
                    }
                    Ok(QueryOutcome::Stale) => Vec::new(),
                    Err(err) => vec![Notification::RouteFailed(err.to_string())],
                }
            }
            InputEvent::AlternativeSelectRequest(index) => {
                match self.routes.select(index).cloned() {
                    Some(candidate) => vec![
                        Notification::RouteRender(self.route_render_update()),
                        Notification::SelectionChanged(candidate),
                    ],
                    None => Vec::new(),
                }
            }
        }
    }

    fn route_render_update(&self) -> RouteRenderUpdate {
        RouteRenderUpdate {
            candidates: self.routes.candidates().to_vec(),
            selected: self.routes.selected_index(),
        }
    }
}
