//! Step recorder.
//!
//! A [`Step`] is an immutable snapshot of the whole working array plus the
//! highlight sets that were active when it was recorded. [`record`] is the
//! only place roles are computed; renderers read [`Element::role`] and never
//! re-derive it from the index sets.
//!
//! # Invariants
//!
//! 1. **Full copy**: a step owns its elements. Mutating the working array
//!    after recording never changes an emitted step.
//! 2. **One role per element**: `Sorted > Pivot > Swapping > Comparing > Default`.
//! 3. **Terminal signal**: the last step of every run has a sorted set that
//!    covers every index ([`Step::is_terminal`]).

use crate::element::{Element, Role};

// ---------------------------------------------------------------------------
// SortedSet
// ---------------------------------------------------------------------------

/// Set of settled indices.
///
/// Bitmap-backed so that role resolution stays linear in the array length.
/// Indices beyond the bitmap are simply not members.
#[derive(Debug, Clone, Default)]
pub struct SortedSet {
    marks: Vec<bool>,
    len: usize,
}

impl SortedSet {
    /// Empty set sized for an array of `capacity` elements.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            marks: vec![false; capacity],
            len: 0,
        }
    }

    /// Set containing every index in `0..n`.
    #[must_use]
    pub fn full(n: usize) -> Self {
        Self {
            marks: vec![true; n],
            len: n,
        }
    }

    /// Insert `index`, growing the bitmap if needed. Returns `false` if it
    /// was already present.
    pub fn insert(&mut self, index: usize) -> bool {
        if index >= self.marks.len() {
            self.marks.resize(index + 1, false);
        }
        if self.marks[index] {
            return false;
        }
        self.marks[index] = true;
        self.len += 1;
        true
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.marks.get(index).copied().unwrap_or(false)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when every index in `0..n` is a member.
    #[must_use]
    pub fn covers(&self, n: usize) -> bool {
        (0..n).all(|i| self.contains(i))
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.marks
            .iter()
            .enumerate()
            .filter_map(|(i, &set)| set.then_some(i))
    }

    /// True if every member of `self` is also in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &SortedSet) -> bool {
        self.iter().all(|i| other.contains(i))
    }
}

impl PartialEq for SortedSet {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for SortedSet {}

#[cfg(feature = "serde")]
impl serde::Serialize for SortedSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

// ---------------------------------------------------------------------------
// Marks
// ---------------------------------------------------------------------------

/// Highlight sets passed to [`record`]. Every field is optional.
#[derive(Debug, Clone, Copy, Default)]
pub struct Marks<'a> {
    pub comparing: &'a [usize],
    pub swapping: &'a [usize],
    pub sorted: Option<&'a SortedSet>,
    pub pivot: Option<usize>,
}

impl<'a> Marks<'a> {
    /// No highlights.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            comparing: &[],
            swapping: &[],
            sorted: None,
            pivot: None,
        }
    }

    #[must_use]
    pub const fn comparing(indices: &'a [usize]) -> Self {
        Self {
            comparing: indices,
            ..Self::none()
        }
    }

    #[must_use]
    pub const fn swapping(indices: &'a [usize]) -> Self {
        Self {
            swapping: indices,
            ..Self::none()
        }
    }

    #[must_use]
    pub const fn pivot(index: usize) -> Self {
        Self {
            pivot: Some(index),
            ..Self::none()
        }
    }

    #[must_use]
    pub const fn sorted(set: &'a SortedSet) -> Self {
        Self {
            sorted: Some(set),
            ..Self::none()
        }
    }

    #[must_use]
    pub const fn with_sorted(self, set: &'a SortedSet) -> Self {
        Self {
            sorted: Some(set),
            ..self
        }
    }

    #[must_use]
    pub const fn with_pivot(self, index: usize) -> Self {
        Self {
            pivot: Some(index),
            ..self
        }
    }

    /// Resolve the single role for `index`: the highest
    /// [`Role::precedence`] among the sets that contain it.
    #[must_use]
    pub fn role_at(&self, index: usize) -> Role {
        [
            (self.comparing.contains(&index), Role::Comparing),
            (self.swapping.contains(&index), Role::Swapping),
            (self.pivot == Some(index), Role::Pivot),
            (self.sorted.is_some_and(|s| s.contains(index)), Role::Sorted),
        ]
        .into_iter()
        .filter_map(|(member, role)| member.then_some(role))
        .max_by_key(|role| role.precedence())
        .unwrap_or(Role::Default)
    }
}

// ---------------------------------------------------------------------------
// Step
// ---------------------------------------------------------------------------

/// One immutable snapshot of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Step {
    elements: Vec<Element>,
    comparing: Vec<usize>,
    swapping: Vec<usize>,
    sorted: SortedSet,
    pivot: Option<usize>,
}

/// Snapshot `working` with roles resolved from `marks`.
///
/// Pure: allocates the copy and returns it. Engines call this after every
/// comparison, swap and settling event.
#[must_use]
pub fn record(working: &[Element], marks: Marks<'_>) -> Step {
    let elements = working
        .iter()
        .enumerate()
        .map(|(i, e)| e.with_role(marks.role_at(i)))
        .collect();
    Step {
        elements,
        comparing: marks.comparing.to_vec(),
        swapping: marks.swapping.to_vec(),
        sorted: marks.sorted.cloned().unwrap_or_default(),
        pivot: marks.pivot,
    }
}

impl Step {
    #[inline]
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn comparing(&self) -> &[usize] {
        &self.comparing
    }

    #[must_use]
    pub fn swapping(&self) -> &[usize] {
        &self.swapping
    }

    #[must_use]
    pub fn sorted(&self) -> &SortedSet {
        &self.sorted
    }

    #[must_use]
    pub fn pivot(&self) -> Option<usize> {
        self.pivot
    }

    /// Role of the element at `index`, if in range.
    #[must_use]
    pub fn role_at(&self, index: usize) -> Option<Role> {
        self.elements.get(index).map(|e| e.role)
    }

    /// Element values in array order.
    #[must_use]
    pub fn values(&self) -> Vec<u32> {
        self.elements.iter().map(|e| e.value).collect()
    }

    /// Element ids in array order.
    #[must_use]
    pub fn ids(&self) -> Vec<usize> {
        self.elements.iter().map(|e| e.id).collect()
    }

    /// True when the sorted set covers every index: the run is complete.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.sorted.covers(self.elements.len())
    }
}

// ---------------------------------------------------------------------------
// StepLog
// ---------------------------------------------------------------------------

/// Append-only step sequence used by the engines while they run.
#[derive(Debug, Default)]
pub struct StepLog {
    steps: Vec<Step>,
}

impl StepLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a snapshot of `working` and append it.
    pub fn push(&mut self, working: &[Element], marks: Marks<'_>) {
        self.steps.push(record(working, marks));
    }

    /// Append the terminal step (every index sorted) and hand the sequence over.
    #[must_use]
    pub fn finish(mut self, working: &[Element]) -> Vec<Step> {
        let all = SortedSet::full(working.len());
        self.push(working, Marks::sorted(&all));
        self.steps
    }
}
