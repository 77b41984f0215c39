//! Launch configuration.
//!
//! Every field has a default matching the stock page, so `{}` (or no
//! config at all) reproduces the fixed 1000×1000 green-filled canvas.

use crate::color::Color;
use crate::error::{BridgeError, Result};
use crate::id::SurfaceId;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 1000;
pub const DEFAULT_DISPLAY: &str = "block";
pub const DEFAULT_ENTRY_POINT: &str = "retris_with_canvas";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeConfig {
    /// Element id of the canvas in the host document.
    pub surface_id: SurfaceId,
    /// Backing resolution in pixels, not CSS units.
    pub width: u32,
    pub height: u32,
    /// CSS `display` value forced onto the canvas.
    pub display: String,
    /// Diagnostic fill color.
    pub fill: Color,
    /// Name of the engine export that receives the canvas.
    pub entry_point: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            surface_id: SurfaceId::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            display: DEFAULT_DISPLAY.to_string(),
            fill: Color::default(),
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
        }
    }
}

impl BridgeConfig {
    /// Parse JSON, filling omitted fields with defaults, then validate.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BridgeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.surface_id.is_empty() {
            return Err(BridgeError::InvalidConfig("surface_id is empty".into()));
        }
        if self.width == 0 || self.height == 0 {
            return Err(BridgeError::InvalidConfig(format!(
                "resolution {}x{} has a zero dimension",
                self.width, self.height
            )));
        }
        let display = self.display.trim();
        if display.is_empty() || display.eq_ignore_ascii_case("none") {
            return Err(BridgeError::InvalidConfig(format!(
                "display `{}` would leave the canvas hidden",
                self.display
            )));
        }
        if self.entry_point.trim().is_empty() {
            return Err(BridgeError::InvalidConfig("entry_point is empty".into()));
        }
        Ok(())
    }
}
