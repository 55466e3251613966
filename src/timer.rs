use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Handle returned when a timer is scheduled. Cancelling it guarantees the
/// timer never fires, whatever happens to the clock afterwards.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Fires once after `duration` of frame time has been fed through `update`.
#[derive(Debug)]
pub struct OneShotTimer {
    remaining: Duration,
    token: CancelToken,
    fired: bool,
}

impl OneShotTimer {
    pub fn schedule(duration: Duration) -> (Self, CancelToken) {
        let token = CancelToken::default();
        let timer = Self {
            remaining: duration,
            token: token.clone(),
            fired: false,
        };
        (timer, token)
    }

    /// Returns true on the single update where the timer elapses.
    pub fn update(&mut self, dt: Duration) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(dt);
        if self.remaining.is_zero() {
            self.fired = true;
            return true;
        }
        false
    }

    pub fn is_pending(&self) -> bool {
        !self.fired && !self.token.is_cancelled()
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }
}
