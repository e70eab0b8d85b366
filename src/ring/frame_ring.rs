use super::frame::{FetchPriority, Frame, SurfaceId};
use crate::error::SpinError;

/// Smallest frame count a ring accepts.
pub const MIN_FRAMES: usize = 2;

/// 1-based successor of `index` in a ring of `total` frames.
fn next_index(index: usize, total: usize) -> usize {
    (index % total) + 1
}

/// 1-based predecessor of `index` in a ring of `total` frames.
fn previous_index(index: usize, total: usize) -> usize {
    ((index % total) + total - 2) % total + 1
}

/// Ordered set of frames plus the index of the one on screen.
///
/// Invariant: exactly one frame is visible, and it is the frame at
/// [`current_index`](Self::current_index). The frames adjacent to it in
/// ring order carry [`FetchPriority::High`] so whichever way the user keeps
/// dragging, the next frame is already being fetched.
#[derive(Debug, Clone)]
pub struct FrameRing {
    frames: Vec<Frame>,
    current: usize,
}

impl FrameRing {
    /// Build a ring of `total_frames` frames and show frame 1.
    ///
    /// Frame `i` is bound to `SurfaceId(i - 1)`, i.e. surfaces are expected
    /// in creation order.
    pub fn new(total_frames: usize) -> Result<Self, SpinError> {
        if total_frames < MIN_FRAMES {
            return Err(SpinError::InvalidConfiguration { total_frames });
        }

        let frames = (1..=total_frames)
            .map(|index| Frame::new(index, SurfaceId(index - 1)))
            .collect();
        let mut ring = Self { frames, current: 1 };
        ring.present(1);
        Ok(ring)
    }

    /// Number of frames in the ring.
    #[must_use]
    pub fn total_frames(&self) -> usize {
        self.frames.len()
    }

    /// 1-based index of the visible frame.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Index after `index`, wrapping `N` to `1`.
    #[must_use]
    pub fn next(&self, index: usize) -> usize {
        next_index(index, self.total_frames())
    }

    /// Index before `index`, wrapping `1` to `N`.
    #[must_use]
    pub fn previous(&self, index: usize) -> usize {
        previous_index(index, self.total_frames())
    }

    /// Make `index` the visible frame.
    ///
    /// Every frame is hidden and demoted, then the target is shown at high
    /// priority and its two ring neighbours are promoted (but stay hidden).
    pub fn set_current(&mut self, index: usize) -> Result<(), SpinError> {
        if !(1..=self.total_frames()).contains(&index) {
            return Err(SpinError::IndexOutOfRange {
                index,
                total_frames: self.total_frames(),
            });
        }
        self.present(index);
        Ok(())
    }

    /// Step to the next frame and return its index.
    pub fn advance(&mut self) -> usize {
        let index = self.next(self.current);
        self.present(index);
        index
    }

    /// Step to the previous frame and return its index.
    pub fn retreat(&mut self) -> usize {
        let index = self.previous(self.current);
        self.present(index);
        index
    }

    /// All frames in index order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The frame at 1-based `index`, if in range.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        index.checked_sub(1).and_then(|slot| self.frames.get(slot))
    }

    /// Indices of every frame currently marked [`FetchPriority::High`].
    pub fn high_priority_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.frames
            .iter()
            .filter(|frame| frame.fetch_priority() == FetchPriority::High)
            .map(Frame::index)
    }

    /// Caller guarantees `1 <= index <= N`.
    fn present(&mut self, index: usize) {
        for frame in &mut self.frames {
            frame.demote();
        }

        let next = self.next(index);
        let previous = self.previous(index);
        self.frames[index - 1].reveal();
        self.frames[next - 1].prefetch();
        self.frames[previous - 1].prefetch();

        self.current = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_indices(ring: &FrameRing) -> Vec<usize> {
        ring.frames()
            .iter()
            .filter(|f| f.is_visible())
            .map(Frame::index)
            .collect()
    }

    fn sorted_high(ring: &FrameRing) -> Vec<usize> {
        let mut high: Vec<usize> = ring.high_priority_indices().collect();
        high.sort_unstable();
        high
    }

    #[test]
    fn rejects_rings_smaller_than_two() {
        for n in [0, 1] {
            assert!(matches!(
                FrameRing::new(n),
                Err(SpinError::InvalidConfiguration { total_frames }) if total_frames == n
            ));
        }
    }

    #[test]
    fn new_ring_shows_first_frame() {
        let ring = FrameRing::new(32).unwrap();
        assert_eq!(ring.current_index(), 1);
        assert_eq!(visible_indices(&ring), vec![1]);
        assert_eq!(sorted_high(&ring), vec![1, 2, 32]);
    }

    #[test]
    fn frames_keep_their_creation_index_and_surface() {
        let ring = FrameRing::new(5).unwrap();
        for (slot, frame) in ring.frames().iter().enumerate() {
            assert_eq!(frame.index(), slot + 1);
            assert_eq!(frame.surface(), SurfaceId(slot));
        }
        assert!(ring.frame(0).is_none());
        assert!(ring.frame(6).is_none());
        assert_eq!(ring.frame(5).map(Frame::index), Some(5));
    }

    #[test]
    fn wraps_at_both_boundaries() {
        for n in 2..=40 {
            let ring = FrameRing::new(n).unwrap();
            assert_eq!(ring.next(n), 1);
            assert_eq!(ring.previous(1), n);
        }
    }

    #[test]
    fn neighbours_of_huge_indices_reduce_modulo_n() {
        for n in 2..=40 {
            let ring = FrameRing::new(n).unwrap();
            let equivalent = match usize::MAX % n {
                0 => n,
                r => r,
            };
            assert_eq!(ring.next(usize::MAX), ring.next(equivalent), "n={n}");
            assert_eq!(
                ring.previous(usize::MAX),
                ring.previous(equivalent),
                "n={n}"
            );
        }
        let ring = FrameRing::new(32).unwrap();
        assert_eq!(ring.previous(usize::MAX), 30);
        assert_eq!(ring.next(usize::MAX), 32);
    }

    #[test]
    fn next_and_previous_are_inverse() {
        for n in 2..=40 {
            let ring = FrameRing::new(n).unwrap();
            for i in 1..=n {
                assert_eq!(ring.next(ring.previous(i)), i, "n={n} i={i}");
                assert_eq!(ring.previous(ring.next(i)), i, "n={n} i={i}");
            }
        }
    }

    #[test]
    fn set_current_promotes_neighbours() {
        let mut ring = FrameRing::new(32).unwrap();
        ring.set_current(16).unwrap();
        ring.set_current(17).unwrap();

        assert_eq!(visible_indices(&ring), vec![17]);
        assert_eq!(sorted_high(&ring), vec![16, 17, 18]);
        let low = ring
            .frames()
            .iter()
            .filter(|f| f.fetch_priority() == FetchPriority::Low)
            .count();
        assert_eq!(low, 29);
    }

    #[test]
    fn set_current_rejects_out_of_range() {
        let mut ring = FrameRing::new(8).unwrap();
        ring.set_current(3).unwrap();

        for bad in [0, 9, 100] {
            assert!(matches!(
                ring.set_current(bad),
                Err(SpinError::IndexOutOfRange { index, total_frames: 8 }) if index == bad
            ));
        }
        // Failed calls leave presentation untouched
        assert_eq!(ring.current_index(), 3);
        assert_eq!(visible_indices(&ring), vec![3]);
    }

    #[test]
    fn exactly_one_frame_visible_after_any_sequence() {
        let mut ring = FrameRing::new(7).unwrap();
        for target in [7, 1, 4, 4, 2, 6, 1, 7] {
            ring.set_current(target).unwrap();
            assert_eq!(visible_indices(&ring), vec![ring.current_index()]);
        }
        for _ in 0..20 {
            let _ = ring.advance();
            assert_eq!(visible_indices(&ring), vec![ring.current_index()]);
        }
        for _ in 0..20 {
            let _ = ring.retreat();
            assert_eq!(visible_indices(&ring), vec![ring.current_index()]);
        }
    }

    #[test]
    fn advance_and_retreat_wrap() {
        let mut ring = FrameRing::new(4).unwrap();
        assert_eq!(ring.retreat(), 4);
        assert_eq!(ring.advance(), 1);
        assert_eq!(ring.advance(), 2);
    }

    #[test]
    fn three_frame_ring_promotes_everything() {
        let mut ring = FrameRing::new(3).unwrap();
        for i in 1..=3 {
            ring.set_current(i).unwrap();
            assert_ne!(ring.next(i), i);
            assert_ne!(ring.previous(i), i);
            assert_ne!(ring.next(i), ring.previous(i));
            assert_eq!(sorted_high(&ring), vec![1, 2, 3]);
            assert_eq!(visible_indices(&ring), vec![i]);
        }
    }

    #[test]
    fn two_frame_ring_neighbours_coincide() {
        let mut ring = FrameRing::new(2).unwrap();
        assert_eq!(ring.next(1), 2);
        assert_eq!(ring.previous(1), 2);
        ring.set_current(2).unwrap();
        assert_eq!(ring.next(2), 1);
        assert_eq!(ring.previous(2), 1);
        assert_eq!(visible_indices(&ring), vec![2]);
        assert_eq!(sorted_high(&ring), vec![1, 2]);
    }

    #[test]
    fn only_current_and_neighbours_are_high() {
        for n in 4..=12 {
            let mut ring = FrameRing::new(n).unwrap();
            for i in 1..=n {
                ring.set_current(i).unwrap();
                for frame in ring.frames() {
                    let idx = frame.index();
                    let expected = if idx == i
                        || idx == ring.next(i)
                        || idx == ring.previous(i)
                    {
                        FetchPriority::High
                    } else {
                        FetchPriority::Low
                    };
                    assert_eq!(frame.fetch_priority(), expected, "n={n} i={i}");
                }
            }
        }
    }
}
