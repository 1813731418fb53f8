// File: crates/mercator-core/src/layout.rs
// Summary: Maps client-space pointer positions onto chart pixels for marker dragging.
//
// The host owns event capture. It calls `ChartLayout::recompute` whenever the chart moves
// or resizes (resize/scroll) and feeds pointer positions through a `DragSession`.

use tracing::debug;

use crate::geometry::{clamp, Viewport};
use crate::types::ChartPoint;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    viewport: Viewport,
}

impl ChartLayout {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    /// Replace the cached client rect after the chart moved or resized.
    pub fn recompute(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            debug!(
                left = viewport.left,
                top = viewport.top,
                width = viewport.width,
                height = viewport.height,
                "chart layout recomputed"
            );
        }
        self.viewport = viewport;
    }

    /// Client position minus the grab offset, clamped to the chart's extent.
    pub fn to_chart(&self, client_x: f64, client_y: f64, offset: (f64, f64)) -> ChartPoint {
        let v = &self.viewport;
        ChartPoint {
            x: clamp(client_x - v.left - offset.0, 0.0, v.width),
            y: clamp(client_y - v.top - offset.1, 0.0, v.height),
        }
    }
}

/// One press-move-release interaction on a marker.
///
/// The grab offset keeps the marker's centre at the same distance from the pointer
/// as when the drag began, so the marker does not jump under the cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    offset: (f64, f64),
}

impl DragSession {
    pub fn begin(pointer: (f64, f64), marker_rect: Viewport) -> Self {
        let (cx, cy) = marker_rect.center();
        Self { offset: (pointer.0 - cx, pointer.1 - cy) }
    }

    pub fn offset(&self) -> (f64, f64) {
        self.offset
    }

    pub fn update(&self, layout: &ChartLayout, pointer: (f64, f64)) -> ChartPoint {
        layout.to_chart(pointer.0, pointer.1, self.offset)
    }

    pub fn end(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_inside_chart() {
        let layout = ChartLayout::new(Viewport::from_ltwh(100.0, 50.0, 400.0, 300.0));
        let p = layout.to_chart(150.0, 80.0, (0.0, 0.0));
        assert_eq!(p, ChartPoint::new(50.0, 30.0));
    }

    #[test]
    fn pointer_clamped_to_extent() {
        let layout = ChartLayout::new(Viewport::from_ltwh(100.0, 50.0, 400.0, 300.0));
        assert_eq!(layout.to_chart(0.0, 0.0, (0.0, 0.0)), ChartPoint::new(0.0, 0.0));
        assert_eq!(layout.to_chart(9999.0, 9999.0, (0.0, 0.0)), ChartPoint::new(400.0, 300.0));
    }

    #[test]
    fn recompute_follows_scroll() {
        let mut layout = ChartLayout::new(Viewport::from_ltwh(0.0, 0.0, 400.0, 300.0));
        layout.recompute(Viewport::from_ltwh(0.0, -100.0, 400.0, 300.0));
        assert_eq!(layout.to_chart(10.0, 0.0, (0.0, 0.0)), ChartPoint::new(10.0, 100.0));
    }

    #[test]
    fn drag_keeps_grab_offset() {
        let layout = ChartLayout::new(Viewport::from_ltwh(0.0, 0.0, 400.0, 300.0));
        // marker centred at (100, 100), grabbed 5px right and 3px below centre
        let drag = DragSession::begin((105.0, 103.0), Viewport::from_ltwh(75.0, 75.0, 50.0, 50.0));
        assert_eq!(drag.offset(), (5.0, 3.0));
        assert_eq!(drag.update(&layout, (205.0, 153.0)), ChartPoint::new(200.0, 150.0));
        drag.end();
    }
}
