use geo::Point;

use super::RouteRenderUpdate;
use super::format::format_distance;
use super::to_geojson::measurement_geojson;
use crate::geometry;
use crate::measure::VisualizationUpdate;
use crate::model::RouteCandidate;

/// Visual weight of one route pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteStyle {
    Muted,
    Prominent,
}

/// Host-side primitive factory.
///
/// Implementations own the actual map objects (markers, labels,
/// layers); the overlays below only track opaque handles and decide
/// when primitives are created and destroyed.
pub trait RenderBackend {
    type Handle;

    /// Draggable, deletable vertex marker. The marker displays
    /// `index + 1` as its user-facing number.
    fn add_vertex_marker(&mut self, index: usize, at: Point<f64>) -> Self::Handle;

    /// Label anchored at a segment midpoint with preformatted text.
    fn add_segment_label(&mut self, at: Point<f64>, text: &str) -> Self::Handle;

    fn remove(&mut self, handle: Self::Handle);

    /// Replaces the measurement line/fill geometry source wholesale.
    fn set_geometry(&mut self, collection: geojson::FeatureCollection);

    fn clear_geometry(&mut self);

    /// Draws one route candidate as a map layer.
    fn add_route_line(
        &mut self,
        index: usize,
        candidate: &RouteCandidate,
        style: RouteStyle,
    ) -> Self::Handle;
}

/// Owns the index-to-handle mapping for measurement artifacts.
///
/// Every update removes all markers and labels before rebuilding them
/// from the snapshot, so indices shown on markers always match the
/// engine's sequence and no orphaned label outlives a deletion.
#[derive(Debug)]
pub struct MeasurementOverlay<B: RenderBackend> {
    backend: B,
    markers: Vec<B::Handle>,
    labels: Vec<B::Handle>,
}

impl<B: RenderBackend> MeasurementOverlay<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            markers: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Rebuilds all measurement artifacts from the snapshot.
    pub fn apply(&mut self, update: &VisualizationUpdate) {
        for handle in self.markers.drain(..) {
            self.backend.remove(handle);
        }
        for handle in self.labels.drain(..) {
            self.backend.remove(handle);
        }

        for (index, point) in update.points.iter().enumerate() {
            self.markers
                .push(self.backend.add_vertex_marker(index, *point));
        }

        match &update.result {
            Some(result) => {
                for segment in result.segments() {
                    let anchor = geometry::midpoint(
                        update.points[segment.from],
                        update.points[segment.to],
                    );
                    let text = format_distance(segment.distance);
                    self.labels.push(self.backend.add_segment_label(anchor, &text));
                }
                self.backend.set_geometry(measurement_geojson(update));
            }
            None => self.backend.clear_geometry(),
        }
    }
}

/// Route layers, redrawn in two passes so the selected candidate is
/// never occluded by an alternative.
#[derive(Debug)]
pub struct RouteOverlay<B: RenderBackend> {
    backend: B,
    lines: Vec<B::Handle>,
}

impl<B: RenderBackend> RouteOverlay<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            lines: Vec::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Clears every previously drawn route artifact, then draws
    /// non-selected candidates muted and the selected one prominent,
    /// last. A shrinking candidate set therefore never leaves stale
    /// layers behind.
    pub fn apply(&mut self, update: &RouteRenderUpdate) {
        for handle in self.lines.drain(..) {
            self.backend.remove(handle);
        }

        for index in update.draw_order() {
            let style = if index == update.selected {
                RouteStyle::Prominent
            } else {
                RouteStyle::Muted
            };
            let handle = self
                .backend
                .add_route_line(index, &update.candidates[index], style);
            self.lines.push(handle);
        }
    }
}
