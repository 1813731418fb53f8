// File: crates/mercator-core/src/config.rs
// Summary: Chart configuration (image source, projection kind, bounds) loaded from JSON.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, Result};
use crate::types::{ChartBounds, EarthBounds, ScreenBounds};

/// Projection a chart image was drawn with. Only Mercator charts can be driven by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectionKind {
    Mercator,
    Other(String),
}

impl From<String> for ProjectionKind {
    fn from(s: String) -> Self {
        if s == "mercator" { ProjectionKind::Mercator } else { ProjectionKind::Other(s) }
    }
}

impl From<ProjectionKind> for String {
    fn from(p: ProjectionKind) -> Self {
        match p {
            ProjectionKind::Mercator => "mercator".to_string(),
            ProjectionKind::Other(s) => s,
        }
    }
}

impl fmt::Display for ProjectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionKind::Mercator => f.write_str("mercator"),
            ProjectionKind::Other(s) => f.write_str(s),
        }
    }
}

/// Static description of one chart image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub src: String,
    pub projection: ProjectionKind,
    pub bounds: ChartBounds,
}

impl ChartConfig {
    /// The bundled world chart (1010x665 px, wraps past the anti-meridian).
    pub fn world() -> Self {
        Self {
            src: "world.svg".to_string(),
            projection: ProjectionKind::Mercator,
            bounds: ChartBounds::new(
                EarthBounds::new(83.600842, -58.508473, -169.110266, 190.486279),
                ScreenBounds::new(0.0, 665.0, 0.0, 1010.0),
            ),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        debug!(src = %cfg.src, projection = %cfg.projection, "parsed chart config");
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ChartError::Io { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), bytes = text.len(), "loaded chart config");
        Self::from_json_str(&text)
    }

    /// Reject charts the engine cannot drive. The engine itself never validates its inputs.
    pub fn validate(&self) -> Result<()> {
        if let ProjectionKind::Other(p) = &self.projection {
            return Err(ChartError::UnsupportedProjection(p.clone()));
        }
        let width = self.bounds.screen.width();
        if width.is_nan() || width <= 0.0 {
            return Err(ChartError::InvalidBounds("screen.right must exceed screen.left"));
        }
        let earth = &self.bounds.earth;
        if earth.top.is_nan() || earth.bottom.is_nan() || earth.top <= earth.bottom {
            return Err(ChartError::InvalidBounds("earth.top must exceed earth.bottom"));
        }
        debug!(src = %self.src, width, "chart config valid");
        Ok(())
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::world()
    }
}
