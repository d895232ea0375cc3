//! Shared geodesic helpers.
//!
//! All functions operate on raw lon/lat degrees. Distances are
//! great-circle, never planar Euclidean on degree values.

use geo::{ChamberlainDuquetteArea, Distance, Haversine, LineString, Point, Polygon};
use itertools::Itertools;

/// Great-circle distance in meters between two lon/lat points.
pub fn haversine_distance(a: Point<f64>, b: Point<f64>) -> f64 {
    Haversine.distance(a, b)
}

/// Total length in meters of an open polyline.
pub fn polyline_length(points: &[Point<f64>]) -> f64 {
    points
        .iter()
        .tuple_windows()
        .map(|(a, b)| Haversine.distance(*a, *b))
        .sum()
}

/// Unsigned area in square meters of the ring spanned by `points`.
/// The ring is closed implicitly; callers guarantee at least three
/// points.
///
/// Uses the Chamberlain-Duquette spherical shoelace formula: exact on
/// a sphere, and within roughly 0.5% of the ellipsoidal value for
/// regions up to a few hundred kilometers across, which covers any
/// area a user can trace on screen.
pub fn ring_area(points: &[Point<f64>]) -> f64 {
    let exterior = LineString::from(points.to_vec());
    Polygon::new(exterior, vec![]).chamberlain_duquette_unsigned_area()
}

/// Midpoint of a segment, used as the anchor for its on-map label.
pub fn midpoint(a: Point<f64>, b: Point<f64>) -> Point<f64> {
    Point::new((a.x() + b.x()) / 2.0, (a.y() + b.y()) / 2.0)
}
