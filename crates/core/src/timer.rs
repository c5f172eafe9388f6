//! Timer module - cancellable one-shot delay driven by the host tick
//!
//! The board never sleeps. The host advances time by calling
//! [`PuzzleBoard::tick`](crate::board::PuzzleBoard::tick) with the elapsed
//! milliseconds and the board forwards that to its [`Timer`].

/// One-shot timer service.
pub trait Timer {
    /// Arm the timer to fire after `delay_ms`, replacing any pending schedule.
    fn schedule(&mut self, delay_ms: u32);

    /// Drop the pending schedule, if any.
    fn cancel(&mut self);

    fn is_pending(&self) -> bool;

    /// Advance time. Returns `true` exactly once, on the call where the
    /// pending delay runs out.
    fn advance(&mut self, elapsed_ms: u32) -> bool;
}

/// Countdown timer in milliseconds.
#[derive(Debug, Clone, Default)]
pub struct OneShotTimer {
    remaining_ms: Option<u32>,
}

impl OneShotTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds left before firing, if armed
    pub fn remaining_ms(&self) -> Option<u32> {
        self.remaining_ms
    }
}

impl Timer for OneShotTimer {
    fn schedule(&mut self, delay_ms: u32) {
        self.remaining_ms = Some(delay_ms);
    }

    fn cancel(&mut self) {
        self.remaining_ms = None;
    }

    fn is_pending(&self) -> bool {
        self.remaining_ms.is_some()
    }

    fn advance(&mut self, elapsed_ms: u32) -> bool {
        let Some(remaining) = self.remaining_ms else {
            return false;
        };

        let remaining = remaining.saturating_sub(elapsed_ms);
        if remaining == 0 {
            self.remaining_ms = None;
            true
        } else {
            self.remaining_ms = Some(remaining);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_delay() {
        let mut t = OneShotTimer::new();
        t.schedule(50);
        assert!(!t.advance(16));
        assert!(!t.advance(16));
        assert!(!t.advance(16));
        assert_eq!(t.remaining_ms(), Some(2));
        assert!(t.advance(16));
        assert!(!t.is_pending());
        assert!(!t.advance(16));
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut t = OneShotTimer::new();
        t.schedule(20);
        assert!(!t.advance(10));
        t.cancel();
        assert!(!t.advance(100));
    }

    #[test]
    fn reschedule_restarts_countdown() {
        let mut t = OneShotTimer::new();
        t.schedule(20);
        assert!(!t.advance(15));
        t.schedule(20);
        assert!(!t.advance(15));
        assert!(t.advance(5));
    }

    #[test]
    fn zero_delay_fires_on_next_advance() {
        let mut t = OneShotTimer::new();
        t.schedule(0);
        assert!(t.is_pending());
        assert!(t.advance(0));
    }
}
