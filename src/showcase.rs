use std::time::Duration;

use tracing::{debug, trace};

use crate::constants::TRANSITION_DURATION;
use crate::error::ShowcaseError;
use crate::item::DisplayItem;
use crate::state::ShowcaseState;
use crate::timer::{CancelToken, OneShotTimer};

/// Rotating showcase controller.
///
/// Cycles through a fixed sequence of items. Every accepted navigation
/// request locks the showcase for the transition window; requests made
/// while locked are dropped, not queued.
#[derive(Debug)]
pub struct Showcase {
    items: Box<[DisplayItem]>,
    current_index: usize,
    state: ShowcaseState,
    transition: Duration,
    timer: Option<OneShotTimer>,
    cancel: Option<CancelToken>,
}

impl Showcase {
    pub fn new(items: Vec<DisplayItem>) -> Result<Self, ShowcaseError> {
        if items.is_empty() {
            return Err(ShowcaseError::NoItems);
        }
        Ok(Self {
            items: items.into_boxed_slice(),
            current_index: 0,
            state: ShowcaseState::Idle,
            transition: TRANSITION_DURATION,
            timer: None,
            cancel: None,
        })
    }

    /// Replaces the default transition window.
    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    pub fn advance(&mut self) -> bool {
        if self.is_transitioning() {
            trace!("advance rejected, transition in progress");
            return false;
        }
        let next = (self.current_index + 1) % self.len();
        self.begin_transition(next);
        true
    }

    pub fn retreat(&mut self) -> bool {
        if self.is_transitioning() {
            trace!("retreat rejected, transition in progress");
            return false;
        }
        let previous = (self.current_index + self.len() - 1) % self.len();
        self.begin_transition(previous);
        true
    }

    /// Jumping to the current index is accepted and still locks navigation.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if self.is_transitioning() {
            trace!(index, "jump rejected, transition in progress");
            return false;
        }
        if index >= self.len() {
            debug!(index, len = self.len(), "jump rejected, index out of range");
            return false;
        }
        self.begin_transition(index);
        true
    }

    /// Feeds frame time to the pending transition timer.
    pub fn update(&mut self, dt: Duration) {
        let fired = match self.timer.as_mut() {
            Some(timer) => timer.update(dt),
            None => false,
        };
        if fired {
            self.timer = None;
            self.cancel = None;
            self.state = ShowcaseState::Idle;
            trace!(index = self.current_index, "transition finished");
        }
    }

    /// Tears the showcase down; the pending timer is cancelled.
    pub fn unmount(mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
        debug!(index = self.current_index, "showcase unmounted");
    }

    fn begin_transition(&mut self, index: usize) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
        let (timer, token) = OneShotTimer::schedule(self.transition);
        self.timer = Some(timer);
        self.cancel = Some(token);
        self.state = ShowcaseState::Transitioning;
        debug!(from = self.current_index, to = index, "transition started");
        self.current_index = index;
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_item(&self) -> &DisplayItem {
        &self.items[self.current_index]
    }

    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn state(&self) -> ShowcaseState {
        self.state
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn transition(&self) -> Duration {
        self.transition
    }

    /// How far the current transition has run, from 0.0 to 1.0.
    /// Idle showcases report 1.0.
    pub fn transition_progress(&self) -> f32 {
        match &self.timer {
            Some(timer) if !self.transition.is_zero() => {
                1.0 - timer.remaining().as_secs_f32() / self.transition.as_secs_f32()
            }
            _ => 1.0,
        }
    }
}

impl Drop for Showcase {
    fn drop(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
    }
}

#[cfg(test)]
#[path = "tests/showcase_tests.rs"]
mod tests;
