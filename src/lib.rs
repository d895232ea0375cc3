//! Interactive measurement and route-alternative core for a map host.
//!
//! The crate maintains the canonical state behind two map-UI tools:
//! live distance/area measurement over user-placed points, and the
//! classification and selection of externally computed route
//! alternatives. The host renderer is a pure consumer: it receives
//! snapshot updates after every mutation and never touches engine
//! state directly.

pub mod error;
pub mod geometry;
pub mod measure;
pub mod model;
pub mod prelude;
pub mod render;
pub mod route;
pub mod session;

pub use error::Error;
pub use measure::{MeasurementEngine, VisualizationUpdate};
pub use render::RouteRenderUpdate;
pub use route::AlternativeSelector;
pub use session::{InputEvent, MapSession, Notification};

/// Monotonic identity of a route request, used to drop stale async
/// results before they touch the alternative set.
pub type Generation = u64;
