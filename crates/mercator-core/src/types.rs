// File: crates/mercator-core/src/types.rs
// Summary: Value types shared by the engine (bounds, geographic and chart points).

use serde::{Deserialize, Serialize};

/// Geographic extent of a chart, in degrees.
/// Contract: `top > bottom`. `right` may exceed 180 when the chart wraps the anti-meridian,
/// so `left < right` is not assumed anywhere.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EarthBounds {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl EarthBounds {
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self { top, bottom, left, right }
    }
}

/// Rendered pixel extent of a chart.
/// Contract: `right > left`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl ScreenBounds {
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self { top, bottom, left, right }
    }
    /// Chart width in pixels; doubles as the Mercator scale denominator.
    pub fn width(&self) -> f64 { self.right - self.left }
}

/// Pairs a chart's geographic extent with its pixel extent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartBounds {
    pub earth: EarthBounds,
    pub screen: ScreenBounds,
}

impl ChartBounds {
    pub const fn new(earth: EarthBounds, screen: ScreenBounds) -> Self {
        Self { earth, screen }
    }
}

/// Longitude/latitude in degrees. No range is enforced.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub long: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub const fn new(long: f64, lat: f64) -> Self {
        Self { long, lat }
    }
}

/// Chart-local pixel position, y grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

impl ChartPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
