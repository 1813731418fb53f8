// File: crates/mercator-core/src/geometry.rs
// Summary: Lightweight client-space rectangle helpers for pointer math.

/// Axis-aligned rectangle in client (page) pixels, as reported by the host's layout.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
