/// Decides whether scroll events may move the active-section highlight.
///
/// A nav click sets the highlight itself and engages the gate until its
/// smooth scroll settles. Scroll events are also ignored while an overlay
/// has the page frozen, since those come from the freeze clamping the
/// page to the top and from the restore afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettleGate {
    settling: bool,
}

impl SettleGate {
    pub fn engage(&mut self) {
        self.settling = true;
    }

    pub fn release(&mut self) {
        self.settling = false;
    }

    pub fn allows_tracking(&self, scroll_locked: bool) -> bool {
        !self.settling && !scroll_locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_by_default() {
        let gate = SettleGate::default();
        assert!(gate.allows_tracking(false));
    }

    #[test]
    fn click_suppresses_tracking_until_released() {
        let mut gate = SettleGate::default();
        gate.engage();
        assert!(!gate.allows_tracking(false));
        gate.release();
        assert!(gate.allows_tracking(false));
    }

    #[test]
    fn repeated_clicks_keep_the_gate_closed() {
        let mut gate = SettleGate::default();
        gate.engage();
        gate.engage();
        assert!(!gate.allows_tracking(false));
        gate.release();
        assert!(gate.allows_tracking(false));
    }

    #[test]
    fn frozen_page_never_tracks() {
        let mut gate = SettleGate::default();
        assert!(!gate.allows_tracking(true));
        gate.engage();
        assert!(!gate.allows_tracking(true));
        gate.release();
        assert!(!gate.allows_tracking(true));
    }
}
