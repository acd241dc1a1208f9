#![forbid(unsafe_code)]

//! Array entries and their highlight roles.

use std::fmt;

/// Highlight classification of an element for one instant of a run.
///
/// When several highlight sets could apply to the same index, the recorder
/// assigns exactly one role using the precedence
/// `Sorted > Pivot > Swapping > Comparing > Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    #[default]
    Default,
    Comparing,
    Swapping,
    Sorted,
    Pivot,
}

impl Role {
    /// All roles, lowest precedence first.
    pub const ALL: [Role; 5] = [
        Role::Default,
        Role::Comparing,
        Role::Swapping,
        Role::Pivot,
        Role::Sorted,
    ];

    /// Stable lowercase label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Comparing => "comparing",
            Self::Swapping => "swapping",
            Self::Sorted => "sorted",
            Self::Pivot => "pivot",
        }
    }

    /// Rank used to resolve overlapping highlight sets. Higher wins.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Default => 0,
            Self::Comparing => 1,
            Self::Swapping => 2,
            Self::Pivot => 3,
            Self::Sorted => 4,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single array entry.
///
/// `id` is assigned at generation and follows the element wherever the
/// engines move it, so a renderer can track identity independent of position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Element {
    pub value: u32,
    pub id: usize,
    pub role: Role,
}

impl Element {
    /// Create an element with the default role.
    #[must_use]
    pub const fn new(value: u32, id: usize) -> Self {
        Self {
            value,
            id,
            role: Role::Default,
        }
    }

    /// Build a sequence with sequential ids `0..values.len()`.
    #[must_use]
    pub fn from_values(values: &[u32]) -> Vec<Self> {
        values
            .iter()
            .enumerate()
            .map(|(id, &value)| Self::new(value, id))
            .collect()
    }

    /// Copy of this element carrying `role`.
    #[must_use]
    pub const fn with_role(self, role: Role) -> Self {
        Self { role, ..self }
    }
}
