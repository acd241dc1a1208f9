use sortviz_core::ConfigError;
use sortviz_runtime::SessionError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CliError {
    /// Process exit code: 2 for bad configuration, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_)
            | Self::Session(SessionError::Config(_) | SessionError::SpeedOutOfRange { .. }) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CliError;
    use sortviz_core::ConfigError;
    use sortviz_runtime::SessionError;

    #[test]
    fn configuration_errors_exit_with_two() {
        let config = ConfigError::UnknownAlgorithm {
            name: "bogo".to_string(),
        };
        assert_eq!(CliError::Config(config).exit_code(), 2);
        assert_eq!(
            CliError::Session(SessionError::SpeedOutOfRange { value: 0 }).exit_code(),
            2
        );
    }

    #[test]
    fn runtime_errors_exit_with_one() {
        assert_eq!(CliError::Session(SessionError::RunInFlight).exit_code(), 1);
        let io = std::io::Error::other("broken pipe");
        assert_eq!(CliError::from(io).exit_code(), 1);
    }
}
