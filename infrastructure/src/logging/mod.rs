//! Logging infrastructure — `tracing` subscriber setup.
//!
//! Maps a verbosity count (as from repeated `-v` flags) to an
//! [`EnvFilter`]. `RUST_LOG` takes precedence when set.

use tracing_subscriber::EnvFilter;

/// Log level directive for a verbosity count
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    }
}

/// Build the log filter, preferring `RUST_LOG` over the verbosity count
pub fn filter_for_verbosity(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)))
}

/// Install the global fmt subscriber.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(verbosity: u8) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for_verbosity(verbosity))
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(3), "trace");
        assert_eq!(level_for_verbosity(9), "trace");
    }

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing(2);
        assert!(!init_tracing(2));

        // Domain events flow through the installed subscriber
        let mut question = quiz_domain::Question::new("q1").unwrap();
        assert!(question.add_choice("a", true).is_ok());
    }
}
