//! The viewer's complete interactive vocabulary.
//!
//! Every frame change, whether triggered by a drag gesture or a
//! programmatic seek, is represented as a `SpinCommand`. Consumers construct
//! commands and pass them to
//! [`SpinViewer::execute`](super::SpinViewer::execute).

/// A discrete operation on the frame ring.
///
/// ```ignore
/// viewer.execute(SpinCommand::StepForward)?;
/// viewer.execute(SpinCommand::JumpTo { index: 17 })?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinCommand {
    /// Show the next frame, wrapping from the last to the first.
    StepForward,
    /// Show the previous frame, wrapping from the first to the last.
    StepBackward,
    /// Show a specific frame.
    JumpTo {
        /// 1-based frame index.
        index: usize,
    },
}
