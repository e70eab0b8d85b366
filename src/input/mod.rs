//! Input handling: pointer event types, the drag-session state machine, and
//! the controller that turns horizontal drags into frame steps.

/// Multi-source drag-session state machine.
pub(crate) mod drag;
/// Platform-agnostic pointer events.
pub mod event;
/// Converts pointer events into viewer commands.
pub mod processor;

pub use event::{PointerEvent, PointerSource};
pub use processor::{DragController, DEFAULT_SENSITIVITY_PX};
