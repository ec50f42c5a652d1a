//! Timed suspension of drawing input while the map is panned

use std::time::{Duration, Instant};

/// Identifies one scheduled resume; a newer suspension cancels older tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancellationToken(u64);

#[derive(Debug, Clone, Copy)]
struct ScheduledResume {
    token: CancellationToken,
    at: Instant,
}

/// Explicit timed state for "suspend drawing, resume after a delay".
///
/// Each [`suspend`](Self::suspend) replaces the pending resume, so repeated
/// secondary actions extend the suspension instead of racing each other.
#[derive(Debug, Default)]
pub struct PanSuspension {
    generation: u64,
    pending: Option<ScheduledResume>,
}

impl PanSuspension {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspend until `now + delay`, cancelling any earlier schedule
    pub fn suspend(&mut self, now: Instant, delay: Duration) -> CancellationToken {
        self.generation += 1;
        let token = CancellationToken(self.generation);
        self.pending = Some(ScheduledResume {
            token,
            at: now + delay,
        });
        token
    }

    /// Drop the pending resume without firing it
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_suspended(&self) -> bool {
        self.pending.is_some()
    }

    /// Fire the pending resume if it is due
    pub fn poll(&mut self, now: Instant) -> Option<CancellationToken> {
        let pending = self.pending?;
        if now < pending.at {
            return None;
        }
        self.pending = None;
        Some(pending.token)
    }

    /// Time left until the pending resume fires
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|p| p.at.saturating_duration_since(now))
    }
}
