use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Frames", inline)]
#[serde(default)]
/// The rotation sequence: how many frames and where they live.
pub struct FrameOptions {
    /// Number of evenly spaced angles in one full rotation.
    #[schemars(title = "Frame Count", range(min = 2))]
    pub total_frames: usize,
    /// Asset naming for each frame.
    #[schemars(skip)]
    pub source: FrameSourceOptions,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            total_frames: 32,
            source: FrameSourceOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Builds `{directory}/{prefix}{index:0pad_width}.{extension}` asset paths.
pub struct FrameSourceOptions {
    /// Directory (or URL prefix) holding the frames.
    pub directory: String,
    /// File name stem shared by every frame.
    pub prefix: String,
    /// Zero-padding width of the frame number.
    pub pad_width: usize,
    /// File extension without the dot.
    pub extension: String,
}

impl Default for FrameSourceOptions {
    fn default() -> Self {
        Self {
            directory: "images".into(),
            prefix: "yaleLock360_v2_".into(),
            pad_width: 4,
            extension: "webp".into(),
        }
    }
}

impl FrameSourceOptions {
    /// Asset path for 1-based frame `index`.
    #[must_use]
    pub fn path_for(&self, index: usize) -> String {
        let directory = self.directory.trim_end_matches('/');
        let width = self.pad_width;
        let name = format!("{}{index:0width$}.{}", self.prefix, self.extension);
        if directory.is_empty() {
            name
        } else {
            format!("{directory}/{name}")
        }
    }
}
