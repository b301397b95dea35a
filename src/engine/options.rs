//! Options methods for [`ViewerEngine`].

use std::path::Path;

use super::ViewerEngine;
use crate::options::Options;
use crate::renderer::PrimitiveMeshes;

impl ViewerEngine {
    /// Replace options and apply all changes to subsystems.
    ///
    /// Display options only seed the startup state, so the current
    /// molecule and toggles are left alone.
    pub fn set_options(&mut self, new: Options) {
        self.options = new;
        self.apply_options();
    }

    /// Push current option values to the camera, meshes, instances and key
    /// bindings.
    pub fn apply_options(&mut self) {
        self.camera.apply_options(&self.options.camera);
        self.meshes = PrimitiveMeshes::from_options(&self.options.geometry);
        self.refresh_instances();
        *self.input.key_bindings_mut() = self.options.keybindings.clone();
    }

    /// Load a named view preset from the presets directory.
    /// Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match Options::load(&path) {
            Ok(opts) => {
                log::info!("Loaded view preset '{name}'");
                self.set_options(opts);
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to load view preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current options as a named view preset.
    /// Returns true on success.
    pub fn save_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.options.save(&path) {
            Ok(()) => {
                log::info!("Saved view preset '{name}'");
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to save view preset '{name}': {e}");
                false
            }
        }
    }
}
