//! Delayed step fills that can go stale.
//!
//! A collaborator that simulates slow work takes a [`FillTicket`] from the
//! controller when the work starts and hands it back with the result. The
//! controller bumps its generation on every step change, so a result that
//! arrives after the user moved on (or restarted) no longer matches and is
//! dropped instead of being merged into a newer wizard state.

use std::time::{Duration, Instant};

/// Identifies the step visit a fill was started from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillTicket {
    pub(crate) generation: u64,
    pub(crate) step_index: usize,
}

impl FillTicket {
    pub fn step_index(&self) -> usize {
        self.step_index
    }
}

/// Work that completes at a deadline.
///
/// There are no threads behind this: the owner polls `is_ready` from its
/// event loop and takes the payload once the deadline has passed.
#[derive(Debug, Clone)]
pub struct PendingTask<T> {
    ticket: FillTicket,
    ready_at: Instant,
    payload: T,
}

impl<T> PendingTask<T> {
    /// Schedule `payload` to become ready `delay` after `now`
    pub fn schedule(ticket: FillTicket, now: Instant, delay: Duration, payload: T) -> Self {
        Self {
            ticket,
            ready_at: now + delay,
            payload,
        }
    }

    pub fn ticket(&self) -> FillTicket {
        self.ticket
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn is_ready(&self, now: Instant) -> bool {
        now >= self.ready_at
    }

    /// Time left before the payload is ready (zero once ready)
    pub fn remaining(&self, now: Instant) -> Duration {
        self.ready_at.saturating_duration_since(now)
    }

    pub fn into_parts(self) -> (FillTicket, T) {
        (self.ticket, self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket() -> FillTicket {
        FillTicket {
            generation: 3,
            step_index: 1,
        }
    }

    #[test]
    fn test_ready_after_deadline() {
        let start = Instant::now();
        let task = PendingTask::schedule(ticket(), start, Duration::from_millis(2000), "names");

        assert!(!task.is_ready(start));
        assert!(!task.is_ready(start + Duration::from_millis(1999)));
        assert!(task.is_ready(start + Duration::from_millis(2000)));
        assert_eq!(
            task.remaining(start + Duration::from_millis(500)),
            Duration::from_millis(1500)
        );
        assert_eq!(task.remaining(start + Duration::from_secs(5)), Duration::ZERO);
    }

    #[test]
    fn test_zero_delay_is_ready_immediately() {
        let start = Instant::now();
        let task = PendingTask::schedule(ticket(), start, Duration::ZERO, 7u8);
        assert!(task.is_ready(start));

        let (t, payload) = task.into_parts();
        assert_eq!(t, ticket());
        assert_eq!(payload, 7);
    }
}
