/// Coarse hint for how urgently a frame's asset should be fetched/decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FetchPriority {
    /// Fetch whenever bandwidth allows.
    #[default]
    Low,
    /// Fetch ahead of everything else.
    High,
}

impl FetchPriority {
    /// The value browsers accept for the `fetchpriority` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

/// Non-owning handle to a frame's visual surface.
///
/// Indexes a [`SurfaceTable`](crate::surface::SurfaceTable) owned by the
/// host layer; the ring never touches the surface itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub usize);

/// One still image of the rotation sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    index: usize,
    surface: SurfaceId,
    visible: bool,
    fetch_priority: FetchPriority,
}

impl Frame {
    /// A hidden, low-priority frame at 1-based `index`.
    pub(crate) fn new(index: usize, surface: SurfaceId) -> Self {
        Self {
            index,
            surface,
            visible: false,
            fetch_priority: FetchPriority::Low,
        }
    }

    /// 1-based position in the sequence, fixed at creation.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Handle of the surface this frame drives.
    #[must_use]
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    /// Whether this frame is the one on screen.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current fetch-priority hint.
    #[must_use]
    pub fn fetch_priority(&self) -> FetchPriority {
        self.fetch_priority
    }

    pub(crate) fn demote(&mut self) {
        self.visible = false;
        self.fetch_priority = FetchPriority::Low;
    }

    pub(crate) fn reveal(&mut self) {
        self.visible = true;
        self.fetch_priority = FetchPriority::High;
    }

    pub(crate) fn prefetch(&mut self) {
        self.fetch_priority = FetchPriority::High;
    }
}
