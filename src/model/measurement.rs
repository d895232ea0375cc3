use serde::{Deserialize, Serialize};

/// Active measurement tool.
///
/// Switching modes never carries points over; the engine clears its
/// sequence on every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureMode {
    #[default]
    None,
    Distance,
    Area,
}

/// A single edge between consecutive points in the sequence.
///
/// Segments are derived state: the full list is regenerated on every
/// mutation and never patched incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: usize,
    pub to: usize,
    /// Geodesic length in meters.
    pub distance: f64,
}

/// Computed snapshot for the current point sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MeasurementResult {
    /// Open polyline: `total` is the summed segment length in meters.
    Distance { total: f64, segments: Vec<Segment> },
    /// Closed ring: `total` is the enclosed area in square meters.
    /// The segment list includes the wraparound edge back to index 0.
    Area { total: f64, segments: Vec<Segment> },
}

impl MeasurementResult {
    pub fn total(&self) -> f64 {
        match self {
            MeasurementResult::Distance { total, .. } | MeasurementResult::Area { total, .. } => {
                *total
            }
        }
    }

    pub fn segments(&self) -> &[Segment] {
        match self {
            MeasurementResult::Distance { segments, .. }
            | MeasurementResult::Area { segments, .. } => segments,
        }
    }
}
