#![forbid(unsafe_code)]

//! SortViz Core
//!
//! Step-recording sorting engines. Instead of merely sorting, every engine
//! produces an ordered sequence of immutable [`Step`]s that annotate which
//! elements are being compared, swapped, pivoted on, or already settled.
//! Played back in order, the steps replay the algorithm bar by bar.
//!
//! # Key Components
//!
//! - [`Element`] / [`Role`] - one array entry with a stable identity
//! - [`record`] / [`Marks`] - the step recorder
//! - [`SortEngine`] - the engine trait, implemented by [`BubbleSort`],
//!   [`SelectionSort`], [`InsertionSort`], [`MergeSort`] and [`QuickSort`]
//! - [`Algorithm`] - convenience enum and catalogue over the five engines
//! - [`generate`] / [`ArrayConfig`] - random input generation
//!
//! # Role in SortViz
//! `sortviz-core` is pure and synchronous. Engines run to completion and
//! return a fully materialized step sequence; pacing, cancellation and
//! rendering live in `sortviz-runtime` and the CLI.
//!
//! # Example
//!
//! ```
//! use sortviz_core::{Algorithm, Element};
//!
//! let input = Element::from_values(&[3, 1, 2]);
//! let run = Algorithm::Quick.run(&input);
//! let last = run.final_step().expect("terminal step");
//! assert_eq!(last.values(), vec![1, 2, 3]);
//! assert!(last.is_terminal());
//! ```

pub mod element;
pub mod engine;
pub mod error;
pub mod generate;
pub mod step;

pub use element::{Element, Role};
pub use engine::{
    Algorithm, BubbleSort, InsertionSort, MergeSort, QuickSort, SelectionSort, SortEngine, SortRun,
};
pub use error::ConfigError;
pub use generate::{
    ArrayConfig, DEFAULT_SIZE, SIZE_MAX, SIZE_MIN, SIZE_STEP, VALUE_MAX, VALUE_MIN, generate,
    generate_seeded,
};
pub use step::{Marks, SortedSet, Step, StepLog, record};
