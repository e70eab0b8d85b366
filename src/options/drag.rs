use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::DEFAULT_SENSITIVITY_PX;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Drag", inline)]
#[serde(default)]
/// Drag-to-spin sensitivity and direction.
pub struct DragOptions {
    /// Horizontal pointer travel that must be exceeded to step one frame.
    #[schemars(title = "Sensitivity", range(min = 0.0, max = 100.0), extend("step" = 1.0))]
    pub sensitivity_px: f32,
    /// Step forward when dragging left instead of right.
    #[schemars(title = "Invert Direction")]
    pub invert: bool,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            sensitivity_px: DEFAULT_SENSITIVITY_PX,
            invert: false,
        }
    }
}
