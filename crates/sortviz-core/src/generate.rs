//! Random input generation.
//!
//! The generator is the collaborator that feeds the engines: a configured
//! number of elements with values drawn uniformly from
//! `VALUE_MIN..VALUE_MAX` and sequential ids. Size bounds are enforced here,
//! never inside the engines.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::element::Element;
use crate::error::ConfigError;

/// Smallest generated value (inclusive).
pub const VALUE_MIN: u32 = 10;
/// Largest generated value (exclusive).
pub const VALUE_MAX: u32 = 410;
/// Smallest configurable array size.
pub const SIZE_MIN: usize = 10;
/// Largest configurable array size.
pub const SIZE_MAX: usize = 100;
/// Increment of the size picker.
pub const SIZE_STEP: usize = 5;
/// Size used when nothing is configured.
pub const DEFAULT_SIZE: usize = 50;

/// Validated generation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayConfig {
    size: usize,
}

impl ArrayConfig {
    /// Accept `size` only within `SIZE_MIN..=SIZE_MAX` and on a
    /// `SIZE_STEP` boundary.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if !(SIZE_MIN..=SIZE_MAX).contains(&size) {
            return Err(ConfigError::SizeOutOfRange {
                size,
                min: SIZE_MIN,
                max: SIZE_MAX,
            });
        }
        if size % SIZE_STEP != 0 {
            return Err(ConfigError::SizeOffStep {
                size,
                step: SIZE_STEP,
            });
        }
        Ok(Self { size })
    }

    /// Any size, including 0. For tests and tooling.
    #[must_use]
    pub const fn unchecked(size: usize) -> Self {
        Self { size }
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self { size: DEFAULT_SIZE }
    }
}

/// Draw a fresh element sequence from `rng`.
pub fn generate<R: Rng + ?Sized>(config: ArrayConfig, rng: &mut R) -> Vec<Element> {
    (0..config.size)
        .map(|id| Element::new(rng.random_range(VALUE_MIN..VALUE_MAX), id))
        .collect()
}

/// Deterministic variant of [`generate`].
#[must_use]
pub fn generate_seeded(config: ArrayConfig, seed: u64) -> Vec<Element> {
    let mut rng = SmallRng::seed_from_u64(seed);
    generate(config, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Role;

    #[test]
    fn config_bounds() {
        assert!(ArrayConfig::new(SIZE_MIN).is_ok());
        assert!(ArrayConfig::new(SIZE_MAX).is_ok());
        assert_eq!(
            ArrayConfig::new(SIZE_MIN - 1),
            Err(ConfigError::SizeOutOfRange {
                size: SIZE_MIN - 1,
                min: SIZE_MIN,
                max: SIZE_MAX,
            })
        );
        assert!(ArrayConfig::new(SIZE_MAX + 1).is_err());
        assert_eq!(
            ArrayConfig::new(37),
            Err(ConfigError::SizeOffStep {
                size: 37,
                step: SIZE_STEP,
            })
        );
        for size in (SIZE_MIN..=SIZE_MAX).step_by(SIZE_STEP) {
            assert!(ArrayConfig::new(size).is_ok(), "{size}");
        }
        assert_eq!(ArrayConfig::unchecked(0).size(), 0);
        assert_eq!(ArrayConfig::default().size(), DEFAULT_SIZE);
    }

    #[test]
    fn generated_values_in_range_with_sequential_ids() {
        let elems = generate_seeded(ArrayConfig::unchecked(500), 7);
        assert_eq!(elems.len(), 500);
        for (i, e) in elems.iter().enumerate() {
            assert_eq!(e.id, i);
            assert_eq!(e.role, Role::Default);
            assert!((VALUE_MIN..VALUE_MAX).contains(&e.value), "value {}", e.value);
        }
    }

    #[test]
    fn same_seed_same_array() {
        let config = ArrayConfig::default();
        assert_eq!(generate_seeded(config, 42), generate_seeded(config, 42));
    }

    #[test]
    fn empty_config_yields_empty_array() {
        assert!(generate_seeded(ArrayConfig::unchecked(0), 1).is_empty());
    }
}
