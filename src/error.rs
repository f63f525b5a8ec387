use std::io;

/// Failure while rendering a record to its sink.
#[derive(thiserror::Error, Debug)]
pub enum HandleError {
    #[error("failed to write log record: {0}")]
    Write(#[from] io::Error),
}

/// Error returned when installing the global subscriber.
#[derive(thiserror::Error, Debug)]
pub enum InitError {
    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Invalid value in logging configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}: {source}")]
    Level {
        key: &'static str,
        #[source]
        source: crate::level::ParseLevelError,
    },

    #[error("{key}: unknown level style {value:?} (expected color, plain or name)")]
    Style { key: &'static str, value: String },
}
