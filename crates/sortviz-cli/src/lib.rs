#![forbid(unsafe_code)]

//! Terminal front end for SortViz.
//!
//! `sortviz run` animates a sort as a coloured bar chart, `sortviz trace`
//! dumps the step sequence as JSON lines, and `sortviz list` prints the
//! algorithm catalogue.

pub mod cli;
pub mod config;
pub mod error;
pub mod list;
pub mod logging;
pub mod render;
pub mod run;
#[cfg(unix)]
pub mod signals;
pub mod trace;

pub use cli::run_from_env;
pub use error::{CliError, Result};
