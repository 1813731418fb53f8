// File: crates/mercator-core/src/lib.rs
// Summary: Core library entry point; exports the projection, bearing and DMS API.

pub mod types;
pub mod projection;
pub mod bearing;
pub mod dms;
pub mod geometry;
pub mod layout;
pub mod config;
pub mod error;
pub mod chart;

pub use types::{ChartBounds, ChartPoint, EarthBounds, GeoPoint, ScreenBounds};
pub use projection::{forward, inverse, Mercator};
pub use bearing::bearing;
pub use dms::{format_bearing, format_dms, format_lat, format_long};
pub use geometry::Viewport;
pub use layout::{ChartLayout, DragSession};
pub use config::{ChartConfig, ProjectionKind};
pub use error::ChartError;
pub use chart::{Chart, MarkerId, Readout};
