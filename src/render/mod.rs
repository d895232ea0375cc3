//! Render adapter: turns engine snapshots into host-side primitives.
//!
//! The engines hold canonical state; this module is solely responsible
//! for creating and destroying visual primitives. Handle maps are
//! rebuilt from scratch on every update, never patched in place, so a
//! stale handle cannot survive a deletion or reorder.

mod format;
mod overlay;
mod to_geojson;

pub use format::{format_area, format_distance, format_duration, format_savings};
pub use overlay::{MeasurementOverlay, RenderBackend, RouteOverlay, RouteStyle};
pub use to_geojson::{measurement_geojson, route_geojson};

use crate::model::RouteCandidate;

/// Snapshot handed to the route overlay after the alternative set or
/// the selection changes.
#[derive(Debug, Clone)]
pub struct RouteRenderUpdate {
    pub candidates: Vec<RouteCandidate>,
    pub selected: usize,
}

impl RouteRenderUpdate {
    /// Draw order for a render pass: all non-selected candidates
    /// first, the selected one last. This keeps the active route on
    /// top under a painter's-algorithm renderer regardless of its
    /// position in the input order.
    pub fn draw_order(&self) -> impl Iterator<Item = usize> + '_ {
        let selected = self.selected;
        (0..self.candidates.len())
            .filter(move |&index| index != selected)
            .chain((self.selected < self.candidates.len()).then_some(selected))
    }
}
