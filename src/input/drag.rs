use super::event::PointerSource;

/// State of the single logical drag session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) enum DragSession {
    /// No contact in progress.
    #[default]
    Idle,
    /// A contact is down; `reference_x` is where it started or where the
    /// last step was committed.
    Active {
        source: PointerSource,
        reference_x: f32,
    },
}

impl DragSession {
    /// Start a session unless one is already running.
    ///
    /// Returns `false` when the down event was ignored.
    pub(crate) fn begin(&mut self, source: PointerSource, x: f32) -> bool {
        if self.is_active() || !x.is_finite() {
            return false;
        }
        *self = Self::Active {
            source,
            reference_x: x,
        };
        true
    }

    /// Horizontal displacement of `x` from the reference point, if a
    /// session owned by `source` is running and `x` is finite.
    pub(crate) fn displacement(&self, source: PointerSource, x: f32) -> Option<f32> {
        if !x.is_finite() {
            return None;
        }
        match *self {
            Self::Active {
                source: owner,
                reference_x,
            } if owner == source => Some(x - reference_x),
            _ => None,
        }
    }

    /// Move the reference point to `x` after a committed step.
    pub(crate) fn recommit(&mut self, x: f32) {
        if let Self::Active { reference_x, .. } = self {
            *reference_x = x;
        }
    }

    /// Drop back to idle. Safe to call repeatedly.
    pub(crate) fn end(&mut self) {
        *self = Self::Idle;
    }

    pub(crate) fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    pub(crate) fn reference_x(&self) -> Option<f32> {
        match *self {
            Self::Active { reference_x, .. } => Some(reference_x),
            Self::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_down_does_not_restart_session() {
        let mut session = DragSession::default();
        assert!(session.begin(PointerSource::Mouse, 10.0));
        assert!(!session.begin(PointerSource::Touch, 50.0));
        assert_eq!(session.reference_x(), Some(10.0));
    }

    #[test]
    fn foreign_source_has_no_displacement() {
        let mut session = DragSession::default();
        let _ = session.begin(PointerSource::Touch, 10.0);
        assert_eq!(session.displacement(PointerSource::Touch, 4.0), Some(-6.0));
        assert_eq!(session.displacement(PointerSource::Mouse, 4.0), None);
    }

    #[test]
    fn non_finite_move_has_no_displacement() {
        let mut session = DragSession::default();
        let _ = session.begin(PointerSource::Mouse, 100.0);
        for x in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert_eq!(session.displacement(PointerSource::Mouse, x), None);
        }
        assert_eq!(session.reference_x(), Some(100.0));
    }

    #[test]
    fn non_finite_down_is_ignored() {
        let mut session = DragSession::default();
        assert!(!session.begin(PointerSource::Mouse, f32::NAN));
        assert!(!session.begin(PointerSource::Mouse, f32::INFINITY));
        assert!(!session.is_active());
    }

    #[test]
    fn end_is_idempotent() {
        let mut session = DragSession::default();
        session.end();
        assert_eq!(session, DragSession::Idle);
        let _ = session.begin(PointerSource::Mouse, 0.0);
        session.end();
        session.end();
        assert_eq!(session, DragSession::Idle);
        assert_eq!(session.displacement(PointerSource::Mouse, 100.0), None);
    }

    #[test]
    fn recommit_only_applies_while_active() {
        let mut session = DragSession::default();
        session.recommit(5.0);
        assert_eq!(session.reference_x(), None);
        let _ = session.begin(PointerSource::Mouse, 0.0);
        session.recommit(7.0);
        assert_eq!(session.reference_x(), Some(7.0));
    }
}
