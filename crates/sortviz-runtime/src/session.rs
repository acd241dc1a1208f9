//! Session state: the current array and the run in flight.
//!
//! The session is the generation collaborator of the engines. It owns the
//! displayed array, draws fresh arrays from a seeded RNG, and enforces that
//! at most one run is in flight: regenerating, resizing or switching the
//! algorithm is refused until the run finishes or is reset.
//!
//! # Lifecycle
//!
//! ```text
//!  idle ──start()──▶ in flight ──finish(handle, outcome)──▶ idle
//!    ▲                   │
//!    └──────reset()──────┘   (cancels the run, regenerates)
//! ```

use rand::SeedableRng;
use rand::rngs::SmallRng;
use sortviz_core::{Algorithm, ArrayConfig, Element, SortRun, generate};

use crate::cancellation::{CancellationSource, CancellationToken};
use crate::error::SessionError;
use crate::playback::{Playback, PlaybackOutcome, Speed};

/// Initial settings of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub algorithm: Algorithm,
    pub array: ArrayConfig,
    pub speed: Speed,
    pub seed: u64,
}

/// One started run: its playback cursor and its cancellation source.
#[derive(Debug)]
pub struct RunHandle {
    run_id: u64,
    algorithm: Algorithm,
    pub playback: Playback,
    source: CancellationSource,
}

impl RunHandle {
    #[must_use]
    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Token for the playback loop.
    #[must_use]
    pub fn token(&self) -> CancellationToken {
        self.source.token()
    }

    /// Control handle, e.g. for a signal handler on another thread.
    #[must_use]
    pub fn canceller(&self) -> CancellationSource {
        self.source.clone()
    }

    /// Play the whole run, calling `apply` for every displayed step.
    pub fn play<F>(&mut self, apply: F) -> PlaybackOutcome
    where
        F: FnMut(usize, &sortviz_core::Step),
    {
        let token = self.source.token();
        self.playback.play(&token, apply)
    }
}

#[derive(Debug)]
struct InFlight {
    run_id: u64,
    source: CancellationSource,
}

/// The array being displayed plus the controls that act on it.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    rng: SmallRng,
    array: Vec<Element>,
    in_flight: Option<InFlight>,
    next_run_id: u64,
}

impl Session {
    /// Create a session and generate its first array.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let array = generate(config.array, &mut rng);
        tracing::debug!(
            target: "sortviz.session",
            seed = config.seed,
            size = config.array.size(),
            algorithm = config.algorithm.key(),
            "session created"
        );
        Self {
            config,
            rng,
            array,
            in_flight: None,
            next_run_id: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The array as currently displayed.
    #[must_use]
    pub fn array(&self) -> &[Element] {
        &self.array
    }

    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.config.algorithm
    }

    #[must_use]
    pub fn speed(&self) -> Speed {
        self.config.speed
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    fn ensure_idle(&self) -> Result<(), SessionError> {
        if self.in_flight.is_some() {
            tracing::warn!(target: "sortviz.session", "control refused while a run is in flight");
            return Err(SessionError::RunInFlight);
        }
        Ok(())
    }

    /// Draw a fresh array of the configured size.
    pub fn regenerate(&mut self) -> Result<&[Element], SessionError> {
        self.ensure_idle()?;
        self.draw();
        Ok(&self.array)
    }

    /// Change the array size and regenerate.
    pub fn set_size(&mut self, size: usize) -> Result<&[Element], SessionError> {
        self.ensure_idle()?;
        self.config.array = ArrayConfig::new(size)?;
        self.draw();
        Ok(&self.array)
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> Result<(), SessionError> {
        self.ensure_idle()?;
        self.config.algorithm = algorithm;
        Ok(())
    }

    /// Speed for the next run. Allowed at any time.
    pub fn set_speed(&mut self, speed: Speed) {
        self.config.speed = speed;
    }

    /// Sort a copy of the current array and mark the session in flight.
    pub fn start(&mut self) -> Result<RunHandle, SessionError> {
        self.ensure_idle()?;
        let SortRun { algorithm, steps } = self.config.algorithm.run(&self.array);
        let run_id = self.next_run_id;
        self.next_run_id += 1;
        let source = CancellationSource::new();
        self.in_flight = Some(InFlight {
            run_id,
            source: source.clone(),
        });
        tracing::info!(
            target: "sortviz.session",
            run_id,
            algorithm = algorithm.key(),
            size = self.array.len(),
            steps = steps.len(),
            "run started"
        );
        Ok(RunHandle {
            run_id,
            algorithm,
            playback: Playback::new(steps, self.config.speed),
            source,
        })
    }

    /// Close the run: the array keeps the last displayed snapshot.
    ///
    /// Fails with [`SessionError::NoRunInFlight`] if `handle` is not the
    /// current run (for example after a [`reset`](Self::reset)).
    pub fn finish(
        &mut self,
        handle: &RunHandle,
        outcome: PlaybackOutcome,
    ) -> Result<(), SessionError> {
        match &self.in_flight {
            Some(current) if current.run_id == handle.run_id => {}
            _ => return Err(SessionError::NoRunInFlight),
        }
        if let Some(step) = handle.playback.current() {
            self.array = step.elements().to_vec();
        }
        self.in_flight = None;
        tracing::info!(
            target: "sortviz.session",
            run_id = handle.run_id,
            played = outcome.played(),
            cancelled = outcome.is_cancelled(),
            "run finished"
        );
        Ok(())
    }

    /// Cancel any run in flight and draw a fresh array.
    pub fn reset(&mut self) -> &[Element] {
        if let Some(current) = self.in_flight.take() {
            current.source.cancel();
            tracing::info!(
                target: "sortviz.session",
                run_id = current.run_id,
                "run cancelled by reset"
            );
        }
        self.draw();
        &self.array
    }

    fn draw(&mut self) {
        self.array = generate(self.config.array, &mut self.rng);
        tracing::debug!(
            target: "sortviz.session",
            size = self.array.len(),
            "array regenerated"
        );
    }
}
