use pretty_log_handler::init::{init_stderr_logging, try_init_pretty_logging, LoggingConfig};
use pretty_log_handler::env::PRETTY_LOG_LEVEL_ENV;
use pretty_log_handler::{InitError, NoopSink};
use std::sync::Arc;

// Single test: installs the process-wide subscriber and edits the environment.
#[test]
fn stderr_logging_survives_invalid_environment() {
    std::env::set_var(PRETTY_LOG_LEVEL_ENV, "loud");
    init_stderr_logging();
    tracing::info!("installed");

    let again = try_init_pretty_logging(Arc::new(NoopSink), LoggingConfig::default());
    assert!(matches!(again, Err(InitError::AlreadyInstalled(_))));
}
