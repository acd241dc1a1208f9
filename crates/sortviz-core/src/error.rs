use thiserror::Error;

/// Configuration rejected at the generation boundary.
///
/// Engines never fail; only the collaborator-facing configuration does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("array size {size} outside {min}..={max}")]
    SizeOutOfRange { size: usize, min: usize, max: usize },

    #[error("array size {size} is not a multiple of {step}")]
    SizeOffStep { size: usize, step: usize },

    #[error("unknown algorithm: {name}")]
    UnknownAlgorithm { name: String },
}
