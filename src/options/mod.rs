//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (display toggles, camera, interaction feel,
//! lighting, colors, geometry, keybindings) are consolidated here. Options
//! serialize to/from TOML so a look can be saved as a named preset.

mod camera;
mod colors;
mod display;
mod geometry;
mod interaction;
mod lighting;

use std::path::Path;

pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use display::DisplayOptions;
pub use geometry::GeometryOptions;
pub use interaction::InteractionOptions;
pub use lighting::LightingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::BuckyError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[lighting]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Startup molecule and display toggles.
    pub display: DisplayOptions,
    /// Camera projection and zoom parameters.
    pub camera: CameraOptions,
    /// Drag rotation, damping and spin parameters.
    pub interaction: InteractionOptions,
    /// Lighting and material parameters.
    pub lighting: LightingOptions,
    /// Color palette options.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Ball-and-stick primitive sizes and tessellation.
    pub geometry: GeometryOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, BuckyError> {
        toml::from_str(content)
            .map_err(|e| BuckyError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, BuckyError> {
        let content = std::fs::read_to_string(path).map_err(BuckyError::Io)?;
        let options = Self::from_toml_str(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), BuckyError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BuckyError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(BuckyError::Io)?;
        }
        std::fs::write(path, content).map_err(BuckyError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
