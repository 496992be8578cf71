//! Stack-based router
//!
//! Keeps the back stack of routes and the fade transition that plays when
//! the current route changes. Screens themselves are owned by the `App`,
//! which re-mounts a fresh screen whenever `mount_generation` moves.

use crate::types::Route;
use std::time::{Duration, Instant};

/// Pop the stack down to `route` before pushing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopUpTo {
    pub route: Route,
    pub inclusive: bool,
}

/// Extra behaviour for a `navigate` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavOptions {
    pub pop_up_to: Option<PopUpTo>,
}

impl NavOptions {
    pub fn pop_up_to(route: Route, inclusive: bool) -> Self {
        Self {
            pop_up_to: Some(PopUpTo { route, inclusive }),
        }
    }
}

/// Cross-fade between two screens
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub started_at: Instant,
    pub duration: Duration,
}

impl Transition {
    /// Progress in 0.0..=1.0, `None` once finished
    pub fn progress(&self, now: Instant) -> Option<f32> {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            None
        } else {
            Some(elapsed.as_secs_f32() / self.duration.as_secs_f32())
        }
    }
}

#[derive(Debug)]
pub struct Navigator {
    stack: Vec<Route>,
    mount_generation: u64,
    transition_duration: Option<Duration>,
    transition: Option<Transition>,
}

impl Navigator {
    pub fn new(start: Route, transition_ms: Option<u64>) -> Self {
        Self {
            stack: vec![start],
            mount_generation: 0,
            transition_duration: transition_ms.map(Duration::from_millis),
            transition: None,
        }
    }

    /// The route on top of the stack
    pub fn current(&self) -> Route {
        // The stack is created with one entry and never popped below it
        self.stack.last().copied().unwrap_or(Route::Login)
    }

    pub fn back_stack(&self) -> &[Route] {
        &self.stack
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Bumped on every change of the current screen instance
    pub fn mount_generation(&self) -> u64 {
        self.mount_generation
    }

    /// Navigate to `route`, optionally popping entries first
    pub fn navigate(&mut self, route: Route, options: NavOptions) {
        let from = self.current();

        if let Some(PopUpTo {
            route: target,
            inclusive,
        }) = options.pop_up_to
        {
            if let Some(idx) = self.stack.iter().rposition(|r| *r == target) {
                let keep = if inclusive { idx } else { idx + 1 };
                self.stack.truncate(keep);
            }

            // Re-mount instead of stacking the same route twice
            if self.stack.last() == Some(&route) {
                self.on_changed(from);
                return;
            }
        }

        self.stack.push(route);
        self.on_changed(from);
    }

    /// Go back one entry; does nothing on the last remaining entry
    pub fn pop_back_stack(&mut self) -> bool {
        if self.stack.len() <= 1 {
            tracing::debug!(route = self.current().as_str(), "pop ignored at root");
            return false;
        }
        let from = self.current();
        self.stack.pop();
        self.on_changed(from);
        true
    }

    /// Current fade progress, clearing the transition once done
    pub fn transition_progress(&mut self, now: Instant) -> Option<f32> {
        let progress = self.transition.and_then(|t| t.progress(now));
        if progress.is_none() {
            self.transition = None;
        }
        progress
    }

    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }

    fn on_changed(&mut self, from: Route) {
        self.mount_generation += 1;
        self.transition = self.transition_duration.map(|duration| Transition {
            started_at: Instant::now(),
            duration,
        });
        tracing::info!(
            from = from.as_str(),
            to = self.current().as_str(),
            depth = self.stack.len(),
            "navigated"
        );
    }
}
