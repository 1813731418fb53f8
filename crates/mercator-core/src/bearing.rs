// File: crates/mercator-core/src/bearing.rs
// Summary: Initial bearing between two geographic points, measured on the projected chart.

use crate::projection::Mercator;
use crate::types::{ChartBounds, GeoPoint};

/// Bearing in degrees from `from` to `to`, clockwise from chart-up.
///
/// Both points go through [`crate::forward`]; the result is a rhumb-line heading
/// on the displayed chart. Exact ties on `dy == 0` give 0/90/270 without any
/// epsilon, and the quadrant offsets keep the value in `[0, 360)` with no
/// trailing modulo.
pub fn bearing(bounds: &ChartBounds, from: GeoPoint, to: GeoPoint) -> f64 {
    let m = Mercator::new(bounds);
    let a = m.to_chart(from);
    let b = m.to_chart(to);
    let dx = b.x - a.x;
    // chart y grows downward
    let dy = a.y - b.y;
    if dy == 0.0 {
        if dx == 0.0 {
            return 0.0;
        }
        if dx > 0.0 {
            return 90.0;
        }
        return 270.0;
    }
    let theta = (dx / dy).atan().to_degrees();
    theta
        + if dy < 0.0 { 180.0 } else { 0.0 }
        + if dx < 0.0 && dy > 0.0 { 360.0 } else { 0.0 }
}
