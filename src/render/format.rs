//! User-facing formatting for measurement and route values.

use crate::model::Savings;

/// Kilometers with two decimals above one kilometer, whole meters
/// below.
pub fn format_distance(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{:.2} km", meters / 1000.0)
    } else {
        format!("{meters:.0} m")
    }
}

/// Square kilometers with two decimals above one square kilometer,
/// whole square meters below.
pub fn format_area(square_meters: f64) -> String {
    if square_meters >= 1_000_000.0 {
        format!("{:.2} km²", square_meters / 1_000_000.0)
    } else {
        format!("{square_meters:.0} m²")
    }
}

/// Savings line for a route alternative panel, e.g.
/// "Save 3 min • 1.2 km shorter": whole minutes, one-decimal
/// kilometers. Components that are exactly zero are omitted; negative
/// values pass through so the host can restyle them.
pub fn format_savings(savings: Savings) -> String {
    let mut parts = Vec::new();
    if savings.time != 0.0 {
        let minutes = (savings.time / 60.0).round() as i64;
        parts.push(format!("Save {minutes} min"));
    }
    if savings.distance != 0.0 {
        parts.push(format!("{:.1} km shorter", savings.distance / 1000.0));
    }
    parts.join(" • ")
}

/// Whole minutes under an hour, "h min" above.
pub fn format_duration(seconds: f64) -> String {
    let minutes = (seconds / 60.0).round() as i64;
    if minutes < 60 {
        format!("{minutes} min")
    } else {
        format!("{} h {} min", minutes / 60, minutes % 60)
    }
}
