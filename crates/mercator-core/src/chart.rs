// File: crates/mercator-core/src/chart.rs
// Summary: Chart struct holding a validated config and the two draggable markers.

use crate::bearing::bearing;
use crate::config::ChartConfig;
use crate::dms::{format_bearing, format_lat, format_long};
use crate::error::Result;
use crate::projection::{forward, inverse};
use crate::types::{ChartPoint, GeoPoint};

/// Which of the two markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerId {
    A,
    B,
}

/// Display strings for the current marker pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Readout {
    pub from_long: String,
    pub from_lat: String,
    pub to_long: String,
    pub to_lat: String,
    pub bearing: String,
}

pub struct Chart {
    config: ChartConfig,
    markers: [GeoPoint; 2],
}

impl Chart {
    /// Fails if the config does not describe a Mercator chart with sane bounds.
    pub fn new(config: ChartConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            markers: [GeoPoint::new(0.0, 0.0), GeoPoint::new(60.0, 30.0)],
        })
    }

    /// The validated config this chart was built from.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    fn slot(id: MarkerId) -> usize {
        match id {
            MarkerId::A => 0,
            MarkerId::B => 1,
        }
    }

    pub fn marker(&self, id: MarkerId) -> GeoPoint {
        self.markers[Self::slot(id)]
    }

    pub fn set_marker(&mut self, id: MarkerId, geo: GeoPoint) {
        self.markers[Self::slot(id)] = geo;
    }

    /// Chart-local pixel position where the marker should be drawn.
    pub fn marker_position(&self, id: MarkerId) -> ChartPoint {
        forward(&self.config.bounds, self.marker(id))
    }

    /// Drop a dragged marker at a chart pixel; returns its new geographic position.
    pub fn move_marker_to(&mut self, id: MarkerId, point: ChartPoint) -> GeoPoint {
        let geo = inverse(&self.config.bounds, point);
        self.set_marker(id, geo);
        geo
    }

    /// Bearing from marker A to marker B.
    pub fn bearing(&self) -> f64 {
        bearing(&self.config.bounds, self.markers[0], self.markers[1])
    }

    pub fn readout(&self) -> Readout {
        let [a, b] = self.markers;
        // adapters only return None for None input
        let s = |v: Option<String>| v.unwrap_or_default();
        Readout {
            from_long: s(format_long(Some(a.long))),
            from_lat: s(format_lat(Some(a.lat))),
            to_long: s(format_long(Some(b.long))),
            to_lat: s(format_lat(Some(b.lat))),
            bearing: s(format_bearing(Some(self.bearing()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectionKind;

    #[test]
    fn default_markers() {
        let chart = Chart::new(ChartConfig::world()).expect("valid");
        assert_eq!(chart.marker(MarkerId::A), GeoPoint::new(0.0, 0.0));
        assert_eq!(chart.marker(MarkerId::B), GeoPoint::new(60.0, 30.0));
    }

    #[test]
    fn config_is_the_validated_one() {
        let chart = Chart::new(ChartConfig::world()).expect("valid");
        assert_eq!(chart.config(), &ChartConfig::world());
        chart.config().validate().expect("still valid");
    }

    #[test]
    fn rejects_non_mercator() {
        let mut cfg = ChartConfig::world();
        cfg.projection = ProjectionKind::Other("equirectangular".into());
        assert!(Chart::new(cfg).is_err());
    }

    #[test]
    fn move_then_position_is_stable() {
        let mut chart = Chart::new(ChartConfig::world()).expect("valid");
        let target = ChartPoint::new(420.0, 310.0);
        chart.move_marker_to(MarkerId::B, target);
        let p = chart.marker_position(MarkerId::B);
        assert!((p.x - target.x).abs() < 1e-9);
        assert!((p.y - target.y).abs() < 1e-9);
    }

    #[test]
    fn readout_formats_markers() {
        let chart = Chart::new(ChartConfig::world()).expect("valid");
        let r = chart.readout();
        assert_eq!(r.from_long, "000°00′00″E");
        assert_eq!(r.from_lat, "00°00′00″N");
        assert_eq!(r.to_long, "060°00′00″E");
        assert_eq!(r.to_lat, "30°00′00″N");
        assert!(r.bearing.ends_with('″'));
    }
}
