//! Cyclic navigation with a transition lock.
//!
//! The controller owns the current position in the moment sequence. A
//! navigation request takes the lock and reports that a transition started;
//! the UI event loop schedules the 300 ms visual delay and then calls
//! [`Navigator::complete_transition`], which moves the index and releases
//! the lock. Requests arriving while the lock is held are swallowed, never
//! queued.

use std::time::Duration;

/// How long a card transition is displayed before the index moves.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// Direction of travel through the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the next moment.
    Forward,
    /// Towards the previous moment.
    Backward,
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum NavRequest {
    /// The lock was taken; schedule the transition delay.
    Started,
    /// A transition is already in flight; the request was dropped.
    Swallowed,
}

impl NavRequest {
    /// Whether this request took the lock.
    #[must_use]
    pub fn started(self) -> bool {
        matches!(self, Self::Started)
    }
}

/// Position state for the card sequence.
///
/// The index is always valid: movement wraps modulo the sequence length in
/// both directions. The store guarantees a non-empty sequence by
/// construction, so `len` is at least one.
#[derive(Debug)]
pub struct Navigator {
    len: usize,
    current: usize,
    pending: Option<Direction>,
}

impl Navigator {
    /// Create a navigator over a sequence of `len` moments, starting at
    /// index zero.
    #[must_use]
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "store is non-empty by construction");
        Self {
            len,
            current: 0,
            pending: None,
        }
    }

    /// The current index.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// The sequence length.
    #[must_use]
    pub fn total(&self) -> usize {
        self.len
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Request a move towards the next moment.
    pub fn advance(&mut self) -> NavRequest {
        self.navigate(Direction::Forward)
    }

    /// Request a move towards the previous moment.
    pub fn retreat(&mut self) -> NavRequest {
        self.navigate(Direction::Backward)
    }

    /// Request a move in the given direction.
    pub fn navigate(&mut self, direction: Direction) -> NavRequest {
        if self.pending.is_some() {
            tracing::trace!(?direction, "navigation swallowed mid-transition");
            return NavRequest::Swallowed;
        }
        self.pending = Some(direction);
        tracing::debug!(?direction, current = self.current, "transition started");
        NavRequest::Started
    }

    /// Apply the pending move and release the lock.
    ///
    /// Called by the event loop when the transition delay elapses. Returns
    /// the new current index; without a pending transition this is a no-op.
    pub fn complete_transition(&mut self) -> usize {
        if let Some(direction) = self.pending.take() {
            self.current = match direction {
                Direction::Forward => (self.current + 1) % self.len,
                Direction::Backward => (self.current + self.len - 1) % self.len,
            };
            tracing::debug!(current = self.current, "transition completed");
        }
        self.current
    }

    /// The position indicator: `"{index+1} / {total}"`.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current + 1, self.len)
    }
}
