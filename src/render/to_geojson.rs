use geo::{LineString, Polygon};
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use crate::measure::VisualizationUpdate;
use crate::model::{MeasureMode, RouteCandidate};

/// Builds the feature collection backing the measurement line/fill
/// source.
///
/// Distance mode emits an open `LineString` once two points exist;
/// area mode emits a `Polygon` whose exterior ring closes back to the
/// first point once three exist. Below those thresholds the
/// collection is empty and the host removes the source.
pub fn measurement_geojson(update: &VisualizationUpdate) -> FeatureCollection {
    let mut features = Vec::new();

    match update.mode {
        MeasureMode::Distance if update.points.len() >= 2 => {
            let line = LineString::from(update.points.clone());
            features.push(feature(
                Geometry::new(GeoJsonValue::from(&line)),
                json!({ "type": "line" }),
            ));
        }
        MeasureMode::Area if update.points.len() >= 3 => {
            // Polygon::new closes the exterior ring implicitly.
            let polygon = Polygon::new(LineString::from(update.points.clone()), vec![]);
            features.push(feature(
                Geometry::new(GeoJsonValue::from(&polygon)),
                json!({ "type": "polygon" }),
            ));
        }
        _ => {}
    }

    FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    }
}

/// Converts one classified candidate to a `GeoJSON` Feature for the
/// route layer.
pub fn route_geojson(index: usize, candidate: &RouteCandidate) -> Feature {
    let properties = json!({
        "index": index,
        "kind": candidate.kind.label(),
        "distance": candidate.route.distance,
        "duration": candidate.route.duration,
        "savings": candidate.savings.map(|s| json!({
            "time": s.time,
            "distance": s.distance,
        })),
    });

    feature(
        Geometry::new(GeoJsonValue::from(&candidate.route.geometry)),
        properties,
    )
}

fn feature(geometry: Geometry, properties: serde_json::Value) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: properties.as_object().cloned(),
        foreign_members: None,
    }
}
