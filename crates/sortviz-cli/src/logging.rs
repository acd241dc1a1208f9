//! Subscriber setup for the command-line front end.
//!
//! Filter directives come from `SORTVIZ_LOG`, then `RUST_LOG`, and default to
//! `warn`. Output always goes to stderr so stdout stays clean for frames and
//! JSON traces.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SORTVIZ_LOG";
const DEFAULT_DIRECTIVES: &str = "warn";

/// Output format of the log stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Directives from the first variable that is set and non-empty.
#[must_use]
pub fn directives_with(env: &dyn Fn(&str) -> Option<String>) -> String {
    [LOG_ENV, "RUST_LOG"]
        .into_iter()
        .filter_map(env)
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVES.to_string())
}

fn filter_from(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|err| {
        eprintln!("sortviz: ignoring invalid log filter `{directives}`: {err}");
        EnvFilter::new(DEFAULT_DIRECTIVES)
    })
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(format: LogFormat) {
    let directives = directives_with(&|key| std::env::var(key).ok());
    let filter = filter_from(&directives);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);
    let installed = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if installed.is_ok() {
        tracing::debug!(%directives, ?format, "logging initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sortviz_log_takes_precedence() {
        let env = |key: &str| match key {
            LOG_ENV => Some("sortviz.playback=debug".to_string()),
            "RUST_LOG" => Some("info".to_string()),
            _ => None,
        };
        assert_eq!(directives_with(&env), "sortviz.playback=debug");
    }

    #[test]
    fn rust_log_is_the_fallback() {
        let env = |key: &str| (key == "RUST_LOG").then(|| "debug".to_string());
        assert_eq!(directives_with(&env), "debug");
    }

    #[test]
    fn blank_values_are_skipped() {
        let env = |key: &str| (key == LOG_ENV).then(|| "  ".to_string());
        assert_eq!(directives_with(&env), "warn");
        assert_eq!(directives_with(&|_| None), "warn");
    }

    #[test]
    fn invalid_directives_fall_back() {
        let filter = filter_from("sortviz=loudest");
        assert_eq!(filter.to_string(), "warn");
    }
}
