use std::time::{Duration, Instant};

/// Most ticks run back-to-back after a stall before the backlog is dropped.
pub const MAX_CATCH_UP_TICKS: u32 = 5;

/// Fixed-period tick source for the game loop.
///
/// The loop asks how many ticks are due, runs them, renders, and sleeps until
/// the next deadline. Deadlines advance by exactly one period per tick so the
/// simulation speed does not depend on the frame rate. After a long stall
/// (window dragged, debugger) the backlog is capped and then discarded.
pub struct FixedTicker {
    period: Duration,
    next_deadline: Instant,
}

impl FixedTicker {
    /// First tick falls due one period after `start`.
    pub fn new(period: Duration, start: Instant) -> Self {
        FixedTicker {
            period,
            next_deadline: start + period,
        }
    }

    /// Number of ticks to run now, advancing the deadline past them.
    pub fn ticks_due(&mut self, now: Instant) -> u32 {
        let mut due = 0;
        while now >= self.next_deadline && due < MAX_CATCH_UP_TICKS {
            due += 1;
            self.next_deadline += self.period;
        }

        if now >= self.next_deadline {
            log::debug!("Tick backlog dropped after a stall");
            self.next_deadline = now + self.period;
        }

        due
    }

    /// How long the loop may sleep before the next tick is due.
    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.next_deadline.saturating_duration_since(now)
    }
}
