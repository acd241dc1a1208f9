use sortviz_core::ConfigError;
use thiserror::Error;

/// Errors reported at the session boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("a run is already in flight")]
    RunInFlight,

    #[error("no run in flight")]
    NoRunInFlight,

    #[error("speed {value} outside 1..=100")]
    SpeedOutOfRange { value: u8 },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::SessionError;
    use sortviz_core::ConfigError;

    #[test]
    fn config_errors_convert_transparently() {
        let inner = ConfigError::SizeOutOfRange {
            size: 3,
            min: 10,
            max: 100,
        };
        let error: SessionError = inner.clone().into();
        assert_eq!(error, SessionError::Config(inner.clone()));
        assert_eq!(error.to_string(), inner.to_string());
    }

    #[test]
    fn speed_message() {
        assert_eq!(
            SessionError::SpeedOutOfRange { value: 0 }.to_string(),
            "speed 0 outside 1..=100"
        );
    }
}
