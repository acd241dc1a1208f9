#![forbid(unsafe_code)]

//! SortViz Runtime
//!
//! Playback of materialized step sequences, and the session state that
//! feeds the engines.
//!
//! # Key Components
//!
//! - [`Playback`] - cursor over a step sequence, paced by a [`Speed`]
//! - [`CancellationSource`] / [`CancellationToken`] - cooperative stop signal
//! - [`Session`] - owns the current array; refuses regeneration while a run
//!   is in flight
//!
//! # How it fits in the system
//! The engines in `sortviz-core` produce every step eagerly. The runtime
//! never interleaves with engine execution: the only suspension point is
//! the delay between two displayed steps, and the cancellation token is
//! polled before each advance.

pub mod cancellation;
pub mod error;
pub mod playback;
pub mod session;

pub use cancellation::{CancellationSource, CancellationToken};
pub use error::SessionError;
pub use playback::{Playback, PlaybackOutcome, Speed, Tick};
pub use session::{RunHandle, Session, SessionConfig};
