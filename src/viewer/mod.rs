//! The spin viewer: frame ring, host surfaces and drag controller wired
//! together behind a handful of entry points.

mod command;
mod input;
mod options;

pub use command::SpinCommand;

use crate::error::SpinError;
use crate::input::DragController;
use crate::options::Options;
use crate::ring::FrameRing;
use crate::surface::{FrameSurface, SurfaceTable};

/// Drag-to-spin viewer over a fixed sequence of frames.
///
/// Owns the [`FrameRing`] (logical presentation state), the
/// [`SurfaceTable`] (host surfaces, addressed by handle) and the
/// [`DragController`]. Every frame change goes through
/// [`execute`](Self::execute), which updates the ring and then mirrors it
/// onto the surfaces.
#[derive(Debug)]
pub struct SpinViewer<S> {
    ring: FrameRing,
    surfaces: SurfaceTable<S>,
    controller: DragController,
    options: Options,
    active_preset: Option<String>,
}

impl<S: FrameSurface> SpinViewer<S> {
    /// Build a viewer of `total_frames` frames stepping every
    /// `sensitivity_px` of horizontal drag.
    ///
    /// `factory` is called once per frame with its 1-based index, in order.
    /// Frame 1 is shown when this returns.
    pub fn initialize<F>(
        total_frames: usize,
        sensitivity_px: f32,
        factory: F,
    ) -> Result<Self, SpinError>
    where
        F: FnMut(usize) -> S,
    {
        let mut options = Options::default();
        options.frames.total_frames = total_frames;
        options.drag.sensitivity_px = sensitivity_px;
        Self::from_options(options, factory)
    }

    /// Build a viewer described by `options`.
    pub fn from_options<F>(options: Options, factory: F) -> Result<Self, SpinError>
    where
        F: FnMut(usize) -> S,
    {
        let ring = FrameRing::new(options.frames.total_frames)?;
        options.validate()?;
        let surfaces = SurfaceTable::from_factory(ring.total_frames(), factory);
        Ok(Self::assemble(ring, surfaces, options))
    }

    /// Build a viewer around surfaces the host already created, one per
    /// frame in index order.
    pub fn with_surfaces(
        options: Options,
        surfaces: SurfaceTable<S>,
    ) -> Result<Self, SpinError> {
        let ring = FrameRing::new(options.frames.total_frames)?;
        options.validate()?;
        if surfaces.len() != ring.total_frames() {
            return Err(SpinError::InvalidOptions(format!(
                "{} surfaces supplied for {} frames",
                surfaces.len(),
                ring.total_frames()
            )));
        }
        Ok(Self::assemble(ring, surfaces, options))
    }

    fn assemble(
        ring: FrameRing,
        mut surfaces: SurfaceTable<S>,
        options: Options,
    ) -> Self {
        surfaces.sync(&ring);
        log::info!(
            "spin viewer ready: {} frames, sensitivity {}px",
            ring.total_frames(),
            options.drag.sensitivity_px
        );
        Self {
            ring,
            surfaces,
            controller: DragController::from_options(&options.drag),
            options,
            active_preset: None,
        }
    }

    /// Apply a command to the ring and push the result to the surfaces.
    ///
    /// Returns the index of the frame now on screen.
    pub fn execute(&mut self, command: SpinCommand) -> Result<usize, SpinError> {
        let from = self.ring.current_index();
        let index = match command {
            SpinCommand::StepForward => self.ring.advance(),
            SpinCommand::StepBackward => self.ring.retreat(),
            SpinCommand::JumpTo { index } => {
                self.ring.set_current(index)?;
                index
            }
        };
        self.surfaces.sync(&self.ring);
        log::debug!("{command:?}: frame {from} -> {index}");
        Ok(index)
    }

    /// 1-based index of the frame on screen.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.ring.current_index()
    }

    /// Number of frames in the sequence.
    #[must_use]
    pub fn total_frames(&self) -> usize {
        self.ring.total_frames()
    }

    /// Read-only view of the ring.
    #[must_use]
    pub fn ring(&self) -> &FrameRing {
        &self.ring
    }

    /// Read-only view of the host surfaces.
    #[must_use]
    pub fn surfaces(&self) -> &SurfaceTable<S> {
        &self.surfaces
    }

    /// Read-only view of the drag controller.
    #[must_use]
    pub fn controller(&self) -> &DragController {
        &self.controller
    }

    /// Options the viewer is running with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Name of the last preset loaded or saved.
    #[must_use]
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }

    /// Whether a drag session is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }
}
