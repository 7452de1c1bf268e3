use crate::Geometry;
use crate::codec::offset_to_index;

/// Debouncer state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebounceState {
    /// No settle timer armed.
    Settling,
    /// A settle timer is armed and will commit `pending_index` at `deadline_ms`.
    PendingCommit { pending_index: i64, deadline_ms: u64 },
}

/// Collapses a burst of scroll-position events into one settled index.
///
/// Every event cancels the armed settle timer (if any) and arms a new one, so at most one
/// timer is ever outstanding. Time is supplied by the caller as monotonic milliseconds; the
/// timer "fires" when [`Debouncer::poll`] observes `now_ms >= deadline_ms`.
#[derive(Clone, Copy, Debug)]
pub struct Debouncer {
    delay_ms: u64,
    state: DebounceState,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            state: DebounceState::Settling,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Changes the settle delay. An already armed timer keeps its deadline.
    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    pub fn state(&self) -> DebounceState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, DebounceState::PendingCommit { .. })
    }

    pub fn pending_index(&self) -> Option<i64> {
        match self.state {
            DebounceState::PendingCommit { pending_index, .. } => Some(pending_index),
            DebounceState::Settling => None,
        }
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        match self.state {
            DebounceState::PendingCommit { deadline_ms, .. } => Some(deadline_ms),
            DebounceState::Settling => None,
        }
    }

    /// Records a scroll-position event: resolves the candidate row and re-arms the timer.
    ///
    /// Returns the candidate index.
    pub fn on_offset(&mut self, offset: f64, geometry: &Geometry, now_ms: u64) -> i64 {
        let candidate = offset_to_index(offset, geometry);
        self.arm(candidate, now_ms);
        candidate
    }

    /// Cancels any armed timer and arms a new one for `candidate`.
    pub fn arm(&mut self, candidate: i64, now_ms: u64) {
        let deadline_ms = now_ms.saturating_add(self.delay_ms);
        ptrace!(candidate, deadline_ms, "Debouncer::arm");
        self.state = DebounceState::PendingCommit {
            pending_index: candidate,
            deadline_ms,
        };
    }

    /// Fires the timer if its deadline has passed.
    ///
    /// Returns the pending index exactly once per armed timer, moving back to `Settling`.
    pub fn poll(&mut self, now_ms: u64) -> Option<i64> {
        let DebounceState::PendingCommit {
            pending_index,
            deadline_ms,
        } = self.state
        else {
            return None;
        };
        if now_ms < deadline_ms {
            return None;
        }
        self.state = DebounceState::Settling;
        ptrace!(pending_index, now_ms, "Debouncer::fire");
        Some(pending_index)
    }

    /// Cancels the armed timer, discarding the pending index.
    pub fn cancel(&mut self) -> Option<i64> {
        let discarded = self.pending_index();
        if discarded.is_some() {
            ptrace!(discarded = ?discarded, "Debouncer::cancel");
        }
        self.state = DebounceState::Settling;
        discarded
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(crate::DEFAULT_SETTLE_DELAY_MS)
    }
}
