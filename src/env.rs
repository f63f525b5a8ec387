//! Environment variable names read by
//! [`LoggingConfig::from_env`](crate::init::LoggingConfig::from_env).
//!
//! These are purely helpers; handlers themselves never read the
//! environment.

/// Minimum level, e.g. `debug`, `WARN+2` or `-4`.
pub const PRETTY_LOG_LEVEL_ENV: &str = "PRETTY_LOG_LEVEL";

/// Severity rendering: `color`, `plain` or `name`. `NO_COLOR` and
/// `CLICOLOR` are honored by the color backend, not read here.
pub const PRETTY_LOG_STYLE_ENV: &str = "PRETTY_LOG_STYLE";

/// Optional service name bound as a `service=<name>` attribute on every line.
pub const PRETTY_LOG_SERVICE_ENV: &str = "PRETTY_LOG_SERVICE";

/// Read an environment variable, treating unset, non-unicode and empty
/// values alike.
pub fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
