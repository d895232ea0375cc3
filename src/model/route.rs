use geo::LineString;
use serde::{Deserialize, Serialize};

/// A route as returned by the upstream routing service, before
/// classification.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    pub geometry: LineString<f64>,
    /// Meters.
    pub distance: f64,
    /// Seconds.
    pub duration: f64,
}

/// Classification of a candidate relative to the reference route.
///
/// The routing engine is assumed to return the time-optimal route
/// first, so the reference (index 0) is always `Fastest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    Fastest,
    Shortest,
    Balanced,
}

impl RouteKind {
    pub fn label(self) -> &'static str {
        match self {
            RouteKind::Fastest => "Fastest",
            RouteKind::Shortest => "Shortest",
            RouteKind::Balanced => "Balanced",
        }
    }
}

/// Time and distance saved against the reference route. Negative
/// values mean the candidate is slower or longer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Savings {
    /// Seconds.
    pub time: f64,
    /// Meters.
    pub distance: f64,
}

/// A classified route alternative. The reference candidate carries no
/// savings.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteCandidate {
    pub route: RouteInfo,
    pub kind: RouteKind,
    pub savings: Option<Savings>,
}
