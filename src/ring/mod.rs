//! The frame ring: a fixed-size circular index space over the frames of a
//! rotation sequence, and the per-frame presentation state it owns.

/// Per-frame presentation state and surface handles.
mod frame;
/// Ring arithmetic and the single presentation mutation point.
mod frame_ring;

pub use frame::{FetchPriority, Frame, SurfaceId};
pub use frame_ring::{FrameRing, MIN_FRAMES};
