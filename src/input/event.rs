use serde::{Deserialize, Serialize};

/// Where a pointer event came from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PointerSource {
    /// Mouse or pen.
    #[default]
    Mouse,
    /// Primary touch contact.
    Touch,
}

/// Platform-agnostic pointer events.
///
/// These are fed into a [`DragController`](super::DragController) which
/// converts them into [`SpinCommand`](crate::viewer::SpinCommand) values.
/// Only the horizontal coordinate of the primary contact is carried.
///
/// # Example
///
/// ```ignore
/// viewer.handle_event(PointerEvent::Down { source: PointerSource::Touch, x: 120.0 })?;
/// viewer.handle_event(PointerEvent::Move { source: PointerSource::Touch, x: 131.0 })?;
/// ```
///
/// Serialized tagged by `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    /// Contact started (mousedown / touchstart).
    Down {
        /// Device that produced the event.
        #[serde(default)]
        source: PointerSource,
        /// Horizontal position in the host's pointer coordinate space.
        x: f32,
    },
    /// Contact moved (mousemove / touchmove).
    Move {
        /// Device that produced the event.
        #[serde(default)]
        source: PointerSource,
        /// Horizontal position in the host's pointer coordinate space.
        x: f32,
    },
    /// Contact released (mouseup / touchend).
    Up {
        /// Device that produced the event.
        #[serde(default)]
        source: PointerSource,
    },
    /// Contact cancelled by the platform (touchcancel).
    Cancel {
        /// Device that produced the event.
        #[serde(default)]
        source: PointerSource,
    },
    /// Pointer left the tracked area (mouseleave).
    Leave {
        /// Device that produced the event.
        #[serde(default)]
        source: PointerSource,
    },
}

impl PointerEvent {
    /// Device that produced this event.
    #[must_use]
    pub fn source(&self) -> PointerSource {
        match *self {
            Self::Down { source, .. }
            | Self::Move { source, .. }
            | Self::Up { source }
            | Self::Cancel { source }
            | Self::Leave { source } => source,
        }
    }

    /// Whether this event ends a drag session.
    #[must_use]
    pub fn is_end(&self) -> bool {
        matches!(self, Self::Up { .. } | Self::Cancel { .. } | Self::Leave { .. })
    }
}
