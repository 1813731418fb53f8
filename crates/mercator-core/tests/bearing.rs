// File: crates/mercator-core/tests/bearing.rs
// Purpose: Bearing degeneracy, reversal symmetry and output range over dense sweeps.

use mercator_core::{bearing, ChartBounds, EarthBounds, GeoPoint, ScreenBounds};

fn charts() -> Vec<ChartBounds> {
    vec![
        ChartBounds::new(EarthBounds::new(85.0, -85.0, -180.0, 180.0), ScreenBounds::new(0.0, 512.0, 0.0, 512.0)),
        ChartBounds::new(
            EarthBounds::new(83.600842, -58.508473, -169.110266, 190.486279),
            ScreenBounds::new(0.0, 665.0, 0.0, 1010.0),
        ),
        ChartBounds::new(EarthBounds::new(51.2, 49.8, -6.0, -1.5), ScreenBounds::new(40.0, 840.0, 20.0, 1220.0)),
        ChartBounds::new(EarthBounds::new(30.0, -30.0, 150.0, -150.0), ScreenBounds::new(0.0, 400.0, 0.0, 600.0)),
    ]
}

fn grid() -> Vec<GeoPoint> {
    let mut pts = Vec::new();
    for j in 0..25 {
        for i in 0..17 {
            pts.push(GeoPoint::new(-180.0 + j as f64 * 15.0, -80.0 + i as f64 * 10.0));
        }
    }
    pts
}

#[test]
fn coincident_points_are_zero() {
    for b in charts() {
        for p in grid() {
            assert_eq!(bearing(&b, p, p), 0.0, "{p:?}");
        }
    }
}

#[test]
fn same_latitude_is_due_east_or_west() {
    for b in charts() {
        for lat in [-60.0, -12.5, 0.0, 33.3, 75.0] {
            let p = GeoPoint::new(10.0, lat);
            assert_eq!(bearing(&b, p, GeoPoint::new(11.0, lat)), 90.0);
            assert_eq!(bearing(&b, p, GeoPoint::new(-170.0, lat)), 270.0);
        }
    }
}

#[test]
fn reversal_differs_by_180() {
    for b in charts() {
        let pts = grid();
        for a in pts.iter().step_by(3) {
            for c in pts.iter().step_by(2) {
                if a == c {
                    continue;
                }
                let fwd = bearing(&b, *a, *c);
                let back = bearing(&b, *c, *a);
                let d = (fwd - back).rem_euclid(360.0);
                assert!((d - 180.0).abs() < 1e-9, "{a:?} -> {c:?}: {fwd} vs {back}");
            }
        }
    }
}

#[test]
fn stays_in_range_without_modulo() {
    let mut s: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut next = || {
        s ^= s << 13;
        s ^= s >> 7;
        s ^= s << 17;
        (s >> 11) as f64 / (1u64 << 53) as f64
    };
    for b in charts() {
        for _ in 0..5_000 {
            let from = GeoPoint::new(next() * 720.0 - 360.0, next() * 170.0 - 85.0);
            let to = GeoPoint::new(next() * 720.0 - 360.0, next() * 170.0 - 85.0);
            let v = bearing(&b, from, to);
            assert!((0.0..360.0).contains(&v), "{from:?} -> {to:?} = {v}");
        }
        for from in grid() {
            for to in grid().into_iter().step_by(7) {
                let v = bearing(&b, from, to);
                assert!((0.0..360.0).contains(&v), "{from:?} -> {to:?} = {v}");
            }
        }
    }
}

#[test]
fn bundled_chart_default_markers() {
    // (0, 0) towards (60E, 30N) heads north-east on the chart
    let b = &charts()[1];
    let v = bearing(b, GeoPoint::new(0.0, 0.0), GeoPoint::new(60.0, 30.0));
    assert!(v > 45.0 && v < 90.0, "v = {v}");
}
