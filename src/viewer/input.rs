//! Pointer entry points for SpinViewer

use super::SpinViewer;
use crate::error::SpinError;
use crate::input::{PointerEvent, PointerSource};
use crate::surface::FrameSurface;

impl<S: FrameSurface> SpinViewer<S> {
    /// Process a platform-agnostic pointer event.
    ///
    /// Returns the new frame index when the event committed a step.
    pub fn handle_event(
        &mut self,
        event: PointerEvent,
    ) -> Result<Option<usize>, SpinError> {
        self.controller
            .handle_event(event)
            .map(|command| self.execute(command))
            .transpose()
    }

    /// Contact started at horizontal position `x`.
    pub fn handle_pointer_down(&mut self, x: f32) {
        self.controller.on_pointer_down(PointerSource::default(), x);
    }

    /// Contact moved to horizontal position `x`.
    ///
    /// Returns the new frame index when the move committed a step.
    pub fn handle_pointer_move(
        &mut self,
        x: f32,
    ) -> Result<Option<usize>, SpinError> {
        self.controller
            .on_pointer_move(PointerSource::default(), x)
            .map(|command| self.execute(command))
            .transpose()
    }

    /// Contact released, cancelled or left the viewer.
    pub fn handle_pointer_end(&mut self) {
        self.controller.on_pointer_end();
    }
}
