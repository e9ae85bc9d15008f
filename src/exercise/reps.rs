use super::metrics::Phase;

/// Counts repetitions from a stream of phases.
///
/// A rep is one `Down` → `Up` transition between consecutive observations;
/// every other transition, `Hold` included, leaves the count alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepCounter {
    count: u32,
    last: Phase,
}

impl RepCounter {
    pub fn new() -> Self {
        Self::resume(0, Phase::Up)
    }

    /// Continues counting from a previously reported state
    pub fn resume(count: u32, last: Phase) -> Self {
        Self { count, last }
    }

    /// Records the phase of the next frame; returns true if it completed a rep
    pub fn observe(&mut self, phase: Phase) -> bool {
        let completed = self.last == Phase::Down && phase == Phase::Up;
        if completed {
            self.count = self.count.saturating_add(1);
        }
        self.last = phase;
        completed
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn last_phase(&self) -> Phase {
        self.last
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for RepCounter {
    fn default() -> Self {
        Self::new()
    }
}
