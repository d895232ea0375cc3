//! Data model for measurement and route-alternative state.

pub mod measurement;
pub mod route;

pub use measurement::{MeasureMode, MeasurementResult, Segment};
pub use route::{RouteCandidate, RouteInfo, RouteKind, Savings};
