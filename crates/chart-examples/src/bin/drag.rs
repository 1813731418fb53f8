// File: crates/chart-examples/src/bin/drag.rs
// Summary: Minimal example that simulates dragging a marker and prints the bearing readout.

use mercator_core::{Chart, ChartConfig, ChartLayout, DragSession, MarkerId, Viewport};

fn main() {
    let mut chart = Chart::new(ChartConfig::world()).expect("bundled chart is valid");
    // chart drawn at (40, 80) on the page at its native size
    let layout = ChartLayout::new(Viewport::from_ltwh(40.0, 80.0, 1010.0, 665.0));

    let start = chart.marker_position(MarkerId::B);
    let grab = (40.0 + start.x, 80.0 + start.y);
    let drag = DragSession::begin(grab, Viewport::from_ltwh(grab.0 - 25.0, grab.1 - 25.0, 50.0, 50.0));

    // pointer path in page pixels
    let path = [(grab.0 - 50.0, grab.1 + 20.0), (grab.0 - 120.0, grab.1 + 60.0), (grab.0 - 200.0, grab.1 + 90.0)];
    for p in path {
        let point = drag.update(&layout, p);
        let geo = chart.move_marker_to(MarkerId::B, point);
        let r = chart.readout();
        println!(
            "pointer ({:.0}, {:.0}) -> ({:.4}, {:.4})  {} {}  bearing {}",
            p.0, p.1, geo.long, geo.lat, r.to_lat, r.to_long, r.bearing
        );
    }
    drag.end();
}
