//! Options methods for SpinViewer

use std::path::Path;

use super::SpinViewer;
use crate::error::SpinError;
use crate::options::Options;
use crate::surface::FrameSurface;

impl<S: FrameSurface> SpinViewer<S> {
    /// Replace options and apply them to the drag controller.
    ///
    /// The frame count is fixed for the lifetime of the viewer, so options
    /// naming a different count are rejected and nothing changes.
    pub fn set_options(&mut self, new: Options) -> Result<(), SpinError> {
        new.validate()?;
        if new.frames.total_frames != self.total_frames() {
            return Err(SpinError::InvalidOptions(format!(
                "frame count is fixed at {}, got {}",
                self.total_frames(),
                new.frames.total_frames
            )));
        }
        self.options = new;
        self.apply_options();
        Ok(())
    }

    /// Push current option values to the controller.
    fn apply_options(&mut self) {
        self.controller.apply_options(&self.options.drag);
    }

    /// Load a named preset from the presets directory.
    /// Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match Options::load(&path).and_then(|opts| self.set_options(opts)) {
            Ok(()) => {
                log::info!("Loaded viewer preset '{name}'");
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to load viewer preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current options as a named preset.
    /// Returns true on success.
    pub fn save_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.options.save(&path) {
            Ok(()) => {
                log::info!("Saved viewer preset '{name}'");
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to save viewer preset '{name}': {e}");
                false
            }
        }
    }
}
