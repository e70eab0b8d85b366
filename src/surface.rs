//! Visual surfaces owned by the host layer.
//!
//! The ring only stores [`SurfaceId`] handles. A [`SurfaceTable`] owns the
//! actual surfaces in creation order and mirrors the ring's presentation
//! state onto them after every change.

use crate::ring::{FetchPriority, FrameRing, SurfaceId};

/// Something that can display one frame of the sequence.
pub trait FrameSurface {
    /// Put this surface on screen.
    fn show(&mut self);
    /// Take this surface off screen.
    fn hide(&mut self);
    /// Hint how urgently the surface's asset should be fetched.
    fn set_fetch_priority(&mut self, priority: FetchPriority);
}

/// Surfaces in creation order, addressed by [`SurfaceId`].
#[derive(Debug)]
pub struct SurfaceTable<S> {
    surfaces: Vec<S>,
}

impl<S: FrameSurface> SurfaceTable<S> {
    /// Create `count` surfaces by calling `factory` with each 1-based frame
    /// index in order.
    pub fn from_factory<F>(count: usize, factory: F) -> Self
    where
        F: FnMut(usize) -> S,
    {
        Self {
            surfaces: (1..=count).map(factory).collect(),
        }
    }

    /// Fallible variant of [`from_factory`](Self::from_factory); stops at
    /// the first error.
    pub fn try_from_factory<F, E>(count: usize, factory: F) -> Result<Self, E>
    where
        F: FnMut(usize) -> Result<S, E>,
    {
        Ok(Self {
            surfaces: (1..=count).map(factory).collect::<Result<_, _>>()?,
        })
    }

    /// Number of surfaces held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Whether the table holds no surfaces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// The surface behind `id`.
    #[must_use]
    pub fn get(&self, id: SurfaceId) -> Option<&S> {
        self.surfaces.get(id.0)
    }

    /// Iterate surfaces in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.surfaces.iter()
    }

    /// Push every frame's visibility and priority onto its surface.
    pub fn sync(&mut self, ring: &FrameRing) {
        for frame in ring.frames() {
            let Some(surface) = self.surfaces.get_mut(frame.surface().0) else {
                log::warn!(
                    "frame {} has no surface (table holds {})",
                    frame.index(),
                    self.surfaces.len()
                );
                continue;
            };
            if frame.is_visible() {
                surface.show();
            } else {
                surface.hide();
            }
            surface.set_fetch_priority(frame.fetch_priority());
        }
    }
}

/// In-memory surface that just records what it was told.
///
/// Used when there is nothing to draw to: tests, benchmarks and trace
/// replay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessSurface {
    visible: bool,
    fetch_priority: FetchPriority,
    updates: u64,
}

impl HeadlessSurface {
    /// A hidden, low-priority surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last visibility applied.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Last priority applied.
    #[must_use]
    pub fn fetch_priority(&self) -> FetchPriority {
        self.fetch_priority
    }

    /// How many show/hide/priority calls this surface received.
    #[must_use]
    pub fn updates(&self) -> u64 {
        self.updates
    }
}

impl FrameSurface for HeadlessSurface {
    fn show(&mut self) {
        self.visible = true;
        self.updates += 1;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.updates += 1;
    }

    fn set_fetch_priority(&mut self, priority: FetchPriority) {
        self.fetch_priority = priority;
        self.updates += 1;
    }
}
