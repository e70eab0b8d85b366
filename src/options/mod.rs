//! Viewer options with TOML preset support.
//!
//! Drag behaviour and the frame sequence description are consolidated here.
//! Options serialize to/from TOML so a deployment can ship presets next to
//! its frame assets.

mod drag;
mod frames;

use std::path::Path;

pub use drag::DragOptions;
pub use frames::{FrameOptions, FrameSourceOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SpinError;
use crate::ring::MIN_FRAMES;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[drag]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Drag sensitivity and direction.
    pub drag: DragOptions,
    /// Frame count and asset naming.
    pub frames: FrameOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text and validate them.
    pub fn from_toml_str(content: &str) -> Result<Self, SpinError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| SpinError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SpinError> {
        let content = std::fs::read_to_string(path).map_err(SpinError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SpinError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SpinError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SpinError::Io)?;
        }
        std::fs::write(path, content).map_err(SpinError::Io)
    }

    /// Reject values no viewer can run with.
    pub fn validate(&self) -> Result<(), SpinError> {
        if self.frames.total_frames < MIN_FRAMES {
            return Err(SpinError::InvalidOptions(format!(
                "frames.total_frames must be at least {MIN_FRAMES}, got {}",
                self.frames.total_frames
            )));
        }
        let sensitivity = self.drag.sensitivity_px;
        if !sensitivity.is_finite() || sensitivity < 0.0 {
            return Err(SpinError::InvalidOptions(format!(
                "drag.sensitivity_px must be a finite, non-negative number, \
                 got {sensitivity}"
            )));
        }
        if self.frames.source.pad_width == 0 {
            return Err(SpinError::InvalidOptions(
                "frames.source.pad_width must be at least 1".into(),
            ));
        }
        Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("spinview-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[drag]
sensitivity_px = 12.0
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.drag.sensitivity_px, 12.0);
        // Everything else should be default
        assert!(!opts.drag.invert);
        assert_eq!(opts.frames.total_frames, 32);
        assert_eq!(opts.frames.source.pad_width, 4);
    }

    #[test]
    fn nested_source_table_parses() {
        let toml_str = r#"
[frames]
total_frames = 24

[frames.source]
directory = "spin"
prefix = "chair_"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.frames.total_frames, 24);
        assert_eq!(opts.frames.source.path_for(24), "spin/chair_0024.webp");
    }

    #[test]
    fn validation_rejects_unusable_values() {
        for toml_str in [
            "[frames]\ntotal_frames = 1\n",
            "[drag]\nsensitivity_px = -1.0\n",
            "[drag]\nsensitivity_px = nan\n",
            "[frames.source]\npad_width = 0\n",
        ] {
            assert!(
                matches!(
                    Options::from_toml_str(toml_str),
                    Err(SpinError::InvalidOptions(_))
                ),
                "{toml_str}"
            );
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            Options::from_toml_str("[drag\nsensitivity_px = 3"),
            Err(SpinError::OptionsParse(_))
        ));
        assert!(matches!(
            Options::from_toml_str("[drag]\nsensitivity_px = \"fast\""),
            Err(SpinError::OptionsParse(_))
        ));
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = scratch_dir("presets");
        let mut opts = Options::default();
        opts.drag.invert = true;
        opts.frames.total_frames = 36;

        opts.save(&dir.join("reversed.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "not a preset").unwrap();

        assert_eq!(Options::load(&dir.join("reversed.toml")).unwrap(), opts);
        assert_eq!(Options::list_presets(&dir), vec!["default", "reversed"]);
        assert!(matches!(
            Options::load(&dir.join("missing.toml")),
            Err(SpinError::Io(_))
        ));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("drag"));
        assert!(props.contains_key("frames"));

        let drag = &props["drag"]["properties"];
        assert!(drag.get("sensitivity_px").is_some());
        assert!(drag.get("invert").is_some());

        // Asset naming is not a UI concern
        let frames = &props["frames"]["properties"];
        assert!(frames.get("total_frames").is_some());
        assert!(frames.get("source").is_none());
    }
}
