//! Picker configuration.
//!
//! A [`PickerConfig`] is plain JSON with camelCase keys. Every field has a
//! default, so an empty object is a valid configuration:
//!
//! ```json
//! {
//!   "defaultStyle": "TwoTone",
//!   "cancellation": "supersede",
//!   "render": { "size": 48, "color": "#1e88e5" },
//!   "grid": { "columns": 8, "padding": 4 }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::render::Tint;
use crate::style::IconStyle;
use crate::worker::CancellationPolicy;

/// Settings for a picker session and the rasters it produces.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct PickerConfig {
    /// Style shown when a picker opens.
    pub default_style: IconStyle,
    pub cancellation: CancellationPolicy,
    pub render: RenderSettings,
    pub grid: GridSettings,
}

/// Rasterisation settings for single icons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct RenderSettings {
    /// Output edge length in pixels.
    pub size: u32,
    /// Hex tint colour (`#rrggbb`). Glyphs are black when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self { size: 40, color: None }
    }
}

impl RenderSettings {
    /// The parsed tint colour, if one is configured.
    pub fn tint(&self) -> Result<Option<Tint>> {
        self.color.as_deref().map(Tint::parse).transpose()
    }
}

/// Layout of a rendered result sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct GridSettings {
    pub columns: u32,
    /// Gap around every cell, in pixels.
    pub padding: u32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self { columns: 6, padding: 5 }
    }
}

impl PickerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_style(mut self, style: IconStyle) -> Self {
        self.default_style = style;
        self
    }

    pub fn with_cancellation(mut self, policy: CancellationPolicy) -> Self {
        self.cancellation = policy;
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), ?config, "loaded picker config");
        Ok(config)
    }
}
