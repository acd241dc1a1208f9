//! Sorting engines.
//!
//! Each engine copies its input into a private working buffer, sorts it in
//! the algorithm's usual way, and records a [`Step`] after every comparison,
//! swap and settling event. The caller's slice is never touched.
//!
//! # Standalone structs vs. convenience enum
//!
//! Each engine has a unit struct ([`BubbleSort`], [`SelectionSort`],
//! [`InsertionSort`], [`MergeSort`], [`QuickSort`]) implementing
//! [`SortEngine`]. For selection by name, use [`Algorithm`], which delegates
//! to the same engines and carries the catalogue metadata.
//!
//! Every engine ends with a terminal step whose sorted set covers the whole
//! array, including for empty and single-element input.

mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;

use std::fmt;
use std::str::FromStr;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;

use crate::element::Element;
use crate::error::ConfigError;
use crate::step::Step;

/// A step-recording sorting algorithm.
pub trait SortEngine {
    /// Catalogue entry for this engine.
    fn algorithm(&self) -> Algorithm;

    /// Sort a private copy of `input` and return every recorded step.
    ///
    /// Deterministic: the same input order always yields the same steps.
    fn record_steps(&self, input: &[Element]) -> Vec<Step>;
}

/// Built-in algorithm selection and catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Exchange sort: repeated adjacent-pair passes.
    #[default]
    Bubble,
    /// Repeatedly select the minimum of the unsorted suffix.
    Selection,
    /// Grow a sorted prefix by shifting each key into place.
    Insertion,
    /// Top-down divide and merge. Stable.
    Merge,
    /// Lomuto partition with the last element as pivot.
    Quick,
}

impl Algorithm {
    /// Every algorithm in catalogue order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// Short key used on the command line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
            Self::Merge => "Merge Sort",
            Self::Quick => "Quick Sort",
        }
    }

    /// Time complexity as shown in the catalogue (average case for quick sort).
    #[must_use]
    pub const fn time_complexity(self) -> &'static str {
        match self {
            Self::Bubble | Self::Selection | Self::Insertion => "O(n²)",
            Self::Merge | Self::Quick => "O(n log n)",
        }
    }

    /// Auxiliary space complexity.
    #[must_use]
    pub const fn space_complexity(self) -> &'static str {
        match self {
            Self::Bubble | Self::Selection | Self::Insertion => "O(1)",
            Self::Merge => "O(n)",
            Self::Quick => "O(log n)",
        }
    }

    /// Whether equal values are guaranteed to keep their input order.
    #[must_use]
    pub const fn is_stable(self) -> bool {
        matches!(self, Self::Merge)
    }

    /// The engine behind this entry.
    #[must_use]
    pub fn engine(self) -> &'static dyn SortEngine {
        match self {
            Self::Bubble => &BubbleSort,
            Self::Selection => &SelectionSort,
            Self::Insertion => &InsertionSort,
            Self::Merge => &MergeSort,
            Self::Quick => &QuickSort,
        }
    }

    /// Run the engine over `input` and wrap the materialized steps.
    #[must_use]
    pub fn run(self, input: &[Element]) -> SortRun {
        let _span = tracing::debug_span!(
            "sortviz.engine",
            algorithm = self.key(),
            input_len = input.len(),
        )
        .entered();

        let steps = self.engine().record_steps(input);

        tracing::debug!(
            target: "sortviz.engine",
            algorithm = self.key(),
            input_len = input.len(),
            steps = steps.len(),
            "sort run recorded"
        );

        SortRun {
            algorithm: self,
            steps,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    /// Accepts the key (`quick`), the picker id (`quickSort`) or the display
    /// name (`Quick Sort`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        let wanted = wanted.strip_suffix("sort").unwrap_or(&wanted);
        Self::ALL
            .into_iter()
            .find(|a| a.key() == wanted)
            .ok_or_else(|| ConfigError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}

/// The fully materialized step sequence of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SortRun {
    pub algorithm: Algorithm,
    pub steps: Vec<Step>,
}

impl SortRun {
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The terminal step.
    #[must_use]
    pub fn final_step(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Hand the steps over to a playback collaborator.
    #[must_use]
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}
