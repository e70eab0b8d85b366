//! Converts pointer events into viewer commands.
//!
//! The `DragController` owns the transient drag session and the sensitivity
//! settings. It is the only thing that sits between raw pointer events and
//! the viewer's [`execute`](crate::viewer::SpinViewer::execute) method.

use super::drag::DragSession;
use super::event::{PointerEvent, PointerSource};
use crate::options::DragOptions;
use crate::viewer::SpinCommand;

/// Horizontal displacement, in pointer-coordinate units, that must be
/// exceeded before one frame step is committed.
pub const DEFAULT_SENSITIVITY_PX: f32 = 5.0;

/// Turns horizontal drags into single-frame [`SpinCommand`]s.
///
/// Each move that strays more than the sensitivity from the reference point
/// yields exactly one step, and the reference point jumps to the move's
/// coordinate. Any excess displacement is discarded, so a fast swipe still
/// advances one frame per event.
///
/// Moving left (negative delta) steps backward and moving right steps
/// forward; [`DragOptions::invert`] swaps the two.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = controller.handle_event(event) {
///     viewer.execute(cmd)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DragController {
    /// The single logical drag session.
    session: DragSession,
    /// Strict lower bound on |delta| for a step.
    sensitivity_px: f32,
    /// Whether leftward drags step forward instead of backward.
    invert: bool,
}

impl DragController {
    /// Create a controller with the given sensitivity and the default
    /// direction mapping.
    #[must_use]
    pub fn new(sensitivity_px: f32) -> Self {
        Self {
            session: DragSession::Idle,
            sensitivity_px: sanitize_sensitivity(sensitivity_px),
            invert: false,
        }
    }

    /// Create a controller from drag options.
    #[must_use]
    pub fn from_options(options: &DragOptions) -> Self {
        let mut controller = Self::new(options.sensitivity_px);
        controller.invert = options.invert;
        controller
    }

    /// Re-apply drag options. A session in progress keeps running.
    pub fn apply_options(&mut self, options: &DragOptions) {
        self.sensitivity_px = sanitize_sensitivity(options.sensitivity_px);
        self.invert = options.invert;
    }

    /// Current sensitivity threshold.
    #[must_use]
    pub fn sensitivity_px(&self) -> f32 {
        self.sensitivity_px
    }

    /// Whether the direction mapping is inverted.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.invert
    }

    /// Whether a drag session is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_active()
    }

    /// Process a pointer event and return zero or one commands.
    pub fn handle_event(&mut self, event: PointerEvent) -> Option<SpinCommand> {
        match event {
            PointerEvent::Down { source, x } => {
                self.on_pointer_down(source, x);
                None
            }
            PointerEvent::Move { source, x } => self.on_pointer_move(source, x),
            PointerEvent::Up { .. }
            | PointerEvent::Cancel { .. }
            | PointerEvent::Leave { .. } => {
                self.on_pointer_end();
                None
            }
        }
    }

    /// Start a session at `x` unless one is already active.
    pub fn on_pointer_down(&mut self, source: PointerSource, x: f32) {
        if self.session.begin(source, x) {
            log::debug!("drag session started ({source:?}) at x={x}");
        } else if !x.is_finite() {
            log::warn!("ignoring pointer-down with non-finite x={x}");
        }
    }

    /// Compare `x` against the reference point and commit a step if the
    /// sensitivity threshold is exceeded.
    pub fn on_pointer_move(
        &mut self,
        source: PointerSource,
        x: f32,
    ) -> Option<SpinCommand> {
        let delta = self.session.displacement(source, x)?;

        if !delta.is_finite() || delta.abs() <= self.sensitivity_px {
            return None;
        }

        self.session.recommit(x);
        let leftward = delta < 0.0;
        if leftward == self.invert {
            Some(SpinCommand::StepForward)
        } else {
            Some(SpinCommand::StepBackward)
        }
    }

    /// End the session. Up, cancel and leave all land here, whatever their
    /// source.
    pub fn on_pointer_end(&mut self) {
        if self.session.is_active() {
            log::debug!("drag session ended");
        }
        self.session.end();
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(DEFAULT_SENSITIVITY_PX)
    }
}

fn sanitize_sensitivity(sensitivity_px: f32) -> f32 {
    if sensitivity_px.is_finite() && sensitivity_px >= 0.0 {
        sensitivity_px
    } else {
        log::warn!(
            "invalid drag sensitivity {sensitivity_px}, using \
             {DEFAULT_SENSITIVITY_PX}"
        );
        DEFAULT_SENSITIVITY_PX
    }
}
