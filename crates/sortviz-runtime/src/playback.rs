//! Timed playback of a materialized step sequence.
//!
//! Invariants:
//! - Steps are shown in order, each at most once.
//! - The cancellation token is polled before every advance; a cancelled
//!   playback shows nothing further and the unplayed steps are discarded.
//! - The delay between two steps is `101 - speed` milliseconds.
//!
//! Two drivers are provided. [`Playback::play`] owns the loop and sleeps on
//! the cancellation token. [`Playback::advance`] is frame-driven: the caller
//! feeds elapsed time and receives the steps now due.

use sortviz_core::Step;
use web_time::Duration;

use crate::cancellation::CancellationToken;
use crate::error::SessionError;

/// Playback speed, `1..=100`. Higher is faster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Speed(u8);

impl Speed {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;
    pub const DEFAULT: Speed = Speed(50);

    /// Accept `value` only within `MIN..=MAX`.
    pub fn new(value: u8) -> Result<Self, SessionError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SessionError::SpeedOutOfRange { value })
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Pause after each displayed step.
    #[must_use]
    pub const fn delay(self) -> Duration {
        Duration::from_millis(101 - self.0 as u64)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Result of one [`Playback::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick<'a> {
    /// Display this step.
    Step { index: usize, step: &'a Step },
    /// Every step has been shown.
    Finished,
    /// The token fired; nothing further will be shown.
    Cancelled,
}

/// How a playback loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Completed { played: usize },
    Cancelled { played: usize },
}

impl PlaybackOutcome {
    #[must_use]
    pub const fn played(self) -> usize {
        match self {
            Self::Completed { played } | Self::Cancelled { played } => played,
        }
    }

    /// Index of the last step that was displayed.
    #[must_use]
    pub const fn last_index(self) -> Option<usize> {
        self.played().checked_sub(1)
    }

    #[must_use]
    pub const fn is_cancelled(self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// Cursor over a step sequence.
#[derive(Debug, Clone)]
pub struct Playback {
    steps: Vec<Step>,
    position: usize,
    speed: Speed,
    elapsed: Duration,
    next_due: Duration,
    start_logged: bool,
    stop_logged: bool,
}

impl Playback {
    #[must_use]
    pub fn new(steps: Vec<Step>, speed: Speed) -> Self {
        Self {
            steps,
            position: 0,
            speed,
            elapsed: Duration::ZERO,
            next_due: Duration::ZERO,
            start_logged: false,
            stop_logged: false,
        }
    }

    #[must_use]
    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Change pacing for the steps not yet shown.
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of steps already shown.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.steps.len().saturating_sub(self.position)
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.position >= self.steps.len()
    }

    /// The step most recently shown.
    #[must_use]
    pub fn current(&self) -> Option<&Step> {
        self.position.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Rewind to the first step.
    pub fn reset(&mut self) {
        self.position = 0;
        self.elapsed = Duration::ZERO;
        self.next_due = Duration::ZERO;
        self.start_logged = false;
        self.stop_logged = false;
    }

    /// Poll `token`, then advance by one step.
    pub fn tick(&mut self, token: &CancellationToken) -> Tick<'_> {
        self.log_start();
        if token.is_cancelled() {
            self.log_stop("cancelled");
            return Tick::Cancelled;
        }
        if self.is_done() {
            self.log_stop("completed");
            return Tick::Finished;
        }
        let index = self.position;
        self.position += 1;
        tracing::debug!(
            target: "sortviz.playback",
            index,
            remaining = self.steps.len() - self.position,
            "playback step"
        );
        Tick::Step {
            index,
            step: &self.steps[index],
        }
    }

    /// Play every remaining step, sleeping on `token` between steps.
    pub fn play<F>(&mut self, token: &CancellationToken, apply: F) -> PlaybackOutcome
    where
        F: FnMut(usize, &Step),
    {
        self.play_with_sleeper(token, |delay| token.wait_timeout(delay), apply)
    }

    /// Play every remaining step with a custom sleep.
    ///
    /// `sleep` receives the delay and returns `true` if it was interrupted
    /// by cancellation. Tests use this to avoid real sleeping while still
    /// checking the delay schedule.
    pub fn play_with_sleeper<S, F>(
        &mut self,
        token: &CancellationToken,
        mut sleep: S,
        mut apply: F,
    ) -> PlaybackOutcome
    where
        S: FnMut(Duration) -> bool,
        F: FnMut(usize, &Step),
    {
        let start = self.position;
        loop {
            match self.tick(token) {
                Tick::Step { index, step } => apply(index, step),
                Tick::Finished => {
                    return PlaybackOutcome::Completed {
                        played: self.position - start,
                    };
                }
                Tick::Cancelled => {
                    return PlaybackOutcome::Cancelled {
                        played: self.position - start,
                    };
                }
            }
            if !self.is_done() && sleep(self.speed.delay()) {
                self.log_stop("cancelled");
                return PlaybackOutcome::Cancelled {
                    played: self.position - start,
                };
            }
        }
    }

    /// Feed `delta` of elapsed time and return the steps that became due,
    /// in order. The first step is due immediately.
    pub fn advance(&mut self, delta: Duration) -> &[Step] {
        self.log_start();
        let start = self.position;
        self.elapsed = self.elapsed.saturating_add(delta);
        while self.position < self.steps.len() && self.elapsed >= self.next_due {
            self.position += 1;
            self.next_due = self.next_due.saturating_add(self.speed.delay());
        }
        if self.is_done() {
            self.log_stop("completed");
        }
        &self.steps[start..self.position]
    }

    fn log_start(&mut self) {
        if self.start_logged {
            return;
        }
        tracing::info!(
            target: "sortviz.playback",
            playback_event = "start",
            steps = self.steps.len(),
            speed = self.speed.get(),
            delay_ms = self.speed.delay().as_millis() as u64,
        );
        self.start_logged = true;
    }

    fn log_stop(&mut self, reason: &'static str) {
        if self.stop_logged {
            return;
        }
        tracing::info!(
            target: "sortviz.playback",
            playback_event = "stop",
            reason,
            played = self.position,
            steps = self.steps.len(),
        );
        self.stop_logged = true;
    }
}
