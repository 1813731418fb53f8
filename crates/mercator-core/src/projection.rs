// File: crates/mercator-core/src/projection.rs
// Summary: Web Mercator forward/inverse transforms between degrees and chart pixels.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::types::{ChartBounds, ChartPoint, GeoPoint};

/// Mercator y for latitude `theta` (radians) on a chart `w` pixels wide.
#[inline]
pub fn theta_to_y(w: f64, theta: f64) -> f64 {
    w / (2.0 * PI) * (FRAC_PI_4 + theta / 2.0).tan().ln()
}

/// Inverse of [`theta_to_y`].
#[inline]
pub fn y_to_theta(w: f64, y: f64) -> f64 {
    2.0 * (y * 2.0 * PI / w).exp().atan() - FRAC_PI_2
}

#[inline]
pub fn lambda_to_x(w: f64, lambda_0: f64, lambda: f64) -> f64 {
    w / (2.0 * PI) * (lambda - lambda_0)
}

#[inline]
pub fn x_to_lambda(w: f64, lambda_0: f64, x: f64) -> f64 {
    lambda_0 + x * 2.0 * PI / w
}

/// Projection constants derived from one chart's bounds.
///
/// Building this once and reusing it avoids recomputing `y_top` per point,
/// which matters when many markers share a chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mercator {
    /// Chart pixel width, also the horizontal scale denominator.
    pub w: f64,
    /// Reference meridian (radians), taken from `earth.left`.
    pub lambda_0: f64,
    /// Mercator y of the chart's top edge.
    pub y_top: f64,
}

impl Mercator {
    pub fn new(bounds: &ChartBounds) -> Self {
        let w = bounds.screen.width();
        let lambda_0 = bounds.earth.left.to_radians();
        let y_top = theta_to_y(w, bounds.earth.top.to_radians());
        Self { w, lambda_0, y_top }
    }

    /// Not clamped to the screen rectangle; poles yield non-finite y.
    #[inline]
    pub fn to_chart(&self, geo: GeoPoint) -> ChartPoint {
        let y = theta_to_y(self.w, geo.lat.to_radians());
        let x = lambda_to_x(self.w, self.lambda_0, geo.long.to_radians());
        ChartPoint { x, y: self.y_top - y }
    }

    #[inline]
    pub fn to_earth(&self, chart: ChartPoint) -> GeoPoint {
        let long = x_to_lambda(self.w, self.lambda_0, chart.x).to_degrees();
        let lat = y_to_theta(self.w, self.y_top - chart.y).to_degrees();
        GeoPoint { long, lat }
    }
}

/// Geographic to chart-local pixels.
pub fn forward(bounds: &ChartBounds, geo: GeoPoint) -> ChartPoint {
    Mercator::new(bounds).to_chart(geo)
}

/// Chart-local pixels to geographic; algebraic inverse of [`forward`].
pub fn inverse(bounds: &ChartBounds, chart: ChartPoint) -> GeoPoint {
    Mercator::new(bounds).to_earth(chart)
}
