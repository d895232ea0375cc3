//! Live distance/area measurement over a user-placed point sequence.

use geo::Point;
use itertools::Itertools;
use log::{debug, info};

use crate::geometry;
use crate::model::{MeasureMode, MeasurementResult, Segment};

/// Canonical measurement state for one map session.
///
/// The engine owns the point sequence and the cached result; the
/// renderer only ever sees [`VisualizationUpdate`] snapshots. Drag-end
/// events come back through [`MeasurementEngine::move_point`] rather
/// than editing state from the marker side.
#[derive(Debug, Default)]
pub struct MeasurementEngine {
    mode: MeasureMode,
    points: Vec<Point<f64>>,
    result: Option<MeasurementResult>,
}

/// Snapshot emitted to the render adapter after every mutation.
///
/// When `result` is `None` the host shows an "awaiting more points"
/// state and all line/fill/label artifacts are removed; vertex markers
/// still follow `points`.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualizationUpdate {
    pub mode: MeasureMode,
    pub points: Vec<Point<f64>>,
    pub result: Option<MeasurementResult>,
}

impl MeasurementEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> MeasureMode {
        self.mode
    }

    pub fn points(&self) -> &[Point<f64>] {
        &self.points
    }

    pub fn result(&self) -> Option<&MeasurementResult> {
        self.result.as_ref()
    }

    /// Switches the active measurement tool on or off.
    ///
    /// Selecting the mode that is already active toggles back to
    /// `None`. Every transition discards the point sequence and the
    /// result; points never carry over between modes.
    pub fn toggle_mode(&mut self, mode: MeasureMode) -> VisualizationUpdate {
        self.mode = if self.mode == mode {
            MeasureMode::None
        } else {
            mode
        };
        info!("measure mode set to {:?}", self.mode);
        self.points.clear();
        self.result = None;
        self.snapshot()
    }

    /// Appends a point at the end of the sequence and recomputes.
    ///
    /// Silently ignored while no measurement tool is active.
    pub fn add_point(&mut self, coord: Point<f64>) -> VisualizationUpdate {
        if self.mode == MeasureMode::None {
            return self.snapshot();
        }
        self.points.push(coord);
        debug!(
            "measure point {} added at {:?}",
            self.points.len() - 1,
            coord
        );
        self.recompute();
        self.snapshot()
    }

    /// Replaces the point at `index` in place (drag-end). Order and
    /// length are unchanged.
    ///
    /// An out-of-range index is a benign race with a concurrent
    /// removal and is silently ignored.
    pub fn move_point(&mut self, index: usize, coord: Point<f64>) -> VisualizationUpdate {
        if let Some(point) = self.points.get_mut(index) {
            *point = coord;
            self.recompute();
        }
        self.snapshot()
    }

    /// Removes the point at `index`; all following indices shift down
    /// by one. Out-of-range indices are silently ignored.
    pub fn remove_point(&mut self, index: usize) -> VisualizationUpdate {
        if index < self.points.len() {
            self.points.remove(index);
            debug!(
                "measure point {index} removed, {} remaining",
                self.points.len()
            );
            self.recompute();
        }
        self.snapshot()
    }

    /// Drops all points and the current result. Valid in any mode.
    pub fn clear(&mut self) -> VisualizationUpdate {
        self.points.clear();
        self.result = None;
        self.snapshot()
    }

    /// Full recomputation pass over the current sequence.
    ///
    /// Below the active mode's minimum point count the result is
    /// cleared entirely rather than partially retained.
    fn recompute(&mut self) {
        self.result = match self.mode {
            MeasureMode::Distance if self.points.len() >= 2 => {
                let segments: Vec<Segment> = self
                    .points
                    .iter()
                    .tuple_windows()
                    .enumerate()
                    .map(|(i, (a, b))| Segment {
                        from: i,
                        to: i + 1,
                        distance: geometry::haversine_distance(*a, *b),
                    })
                    .collect();
                let total = segments.iter().map(|s| s.distance).sum();
                Some(MeasurementResult::Distance { total, segments })
            }
            MeasureMode::Area if self.points.len() >= 3 => {
                let n = self.points.len();
                // Closed ring: exactly n segments, the last one wraps
                // back to index 0.
                let segments: Vec<Segment> = (0..n)
                    .map(|i| {
                        let j = (i + 1) % n;
                        Segment {
                            from: i,
                            to: j,
                            distance: geometry::haversine_distance(self.points[i], self.points[j]),
                        }
                    })
                    .collect();
                Some(MeasurementResult::Area {
                    total: geometry::ring_area(&self.points),
                    segments,
                })
            }
            _ => None,
        };
    }

    fn snapshot(&self) -> VisualizationUpdate {
        VisualizationUpdate {
            mode: self.mode,
            points: self.points.clone(),
            result: self.result.clone(),
        }
    }
}
