// Re-export key components
pub use crate::error::Error;
pub use crate::measure::{MeasurementEngine, VisualizationUpdate};
pub use crate::model::{
    MeasureMode, MeasurementResult, RouteCandidate, RouteInfo, RouteKind, Savings, Segment,
};
pub use crate::render::{
    MeasurementOverlay, RenderBackend, RouteOverlay, RouteRenderUpdate, RouteStyle,
};
pub use crate::route::{AlternativeSelector, DEFAULT_DEBOUNCE, Debouncer, QueryOutcome};
pub use crate::session::{InputEvent, MapSession, Notification};

pub use crate::Generation;
