use std::time::{Duration, Instant};

/// Identifies one scheduled trigger. Only the most recent token is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceToken(u64);

#[derive(Debug)]
struct Pending<T> {
    token: DebounceToken,
    deadline: Instant,
    value: T,
}

/// Cancellable single-slot timer.
///
/// Scheduling replaces whatever is pending, so at most one trigger exists at
/// a time and only the value from the last call within the quiet period is
/// ever delivered. Time is passed in by the caller.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
    next_token: u64,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            next_token: 0,
        }
    }

    /// Schedule `value` to fire `delay` after `now`, cancelling any predecessor.
    pub fn schedule(&mut self, value: T, now: Instant) -> DebounceToken {
        self.next_token += 1;
        let token = DebounceToken(self.next_token);
        self.pending = Some(Pending {
            token,
            deadline: now + self.delay,
            value,
        });
        token
    }

    /// Cancel the trigger for `token`. Returns false if it already fired or was replaced.
    pub fn cancel(&mut self, token: DebounceToken) -> bool {
        match &self.pending {
            Some(pending) if pending.token == token => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
