use crate::env::{env_opt, PRETTY_LOG_LEVEL_ENV, PRETTY_LOG_SERVICE_ENV, PRETTY_LOG_STYLE_ENV};
use crate::error::{ConfigError, InitError};
use crate::handler::{Handler, HandlerOptions, LevelStyle, PrettyHandler};
use crate::layer::PrettyLayer;
use crate::record::Attr;
use crate::sink::LogSink;
use std::io;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

/// Configuration of the globally installed pretty logger.
///
/// **Fields**
/// - `handler`: threshold and severity style of the root handler.
/// - `service_name`: when set, every line carries `service=<name>` ahead
///   of any span or event attributes.
#[derive(Clone, Debug, Default)]
pub struct LoggingConfig {
    pub handler: HandlerOptions,
    pub service_name: Option<String>,
}

impl LoggingConfig {
    /// Build a configuration from the variables in [`crate::env`].
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_opt)
    }

    /// Same as [`from_env`](Self::from_env) but reading through `lookup`,
    /// which returns `None` for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = LoggingConfig::default();

        if let Some(raw) = lookup(PRETTY_LOG_LEVEL_ENV) {
            let level = raw.parse().map_err(|source| ConfigError::Level {
                key: PRETTY_LOG_LEVEL_ENV,
                source,
            })?;
            config.handler.min_level = Some(level);
        }

        if let Some(raw) = lookup(PRETTY_LOG_STYLE_ENV) {
            config.handler.style = match raw.trim().to_ascii_lowercase().as_str() {
                "color" | "colour" => LevelStyle::Color,
                "plain" => LevelStyle::Plain,
                "name" => LevelStyle::Name,
                _ => {
                    return Err(ConfigError::Style {
                        key: PRETTY_LOG_STYLE_ENV,
                        value: raw,
                    })
                }
            };
        }

        config.service_name = lookup(PRETTY_LOG_SERVICE_ENV);
        Ok(config)
    }

    /// Like [`from_env`](Self::from_env), but invalid values are reported
    /// on stderr and the defaults are used instead.
    pub fn from_env_or_default() -> Self {
        Self::from_lookup_or_default(env_opt)
    }

    /// Like [`from_lookup`](Self::from_lookup), falling back to the defaults
    /// on invalid values.
    pub fn from_lookup_or_default(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::from_lookup(lookup).unwrap_or_else(|e| {
            eprintln!("ignoring logging environment: {}", e);
            LoggingConfig::default()
        })
    }

    /// Root handler for this configuration, writing to `sink`.
    pub fn build_handler(&self, sink: Arc<dyn LogSink>) -> PrettyHandler {
        let handler = PrettyHandler::new(sink, self.handler);
        match &self.service_name {
            Some(name) => handler.with_attrs(&[Attr::new("service", name.clone())]),
            None => handler,
        }
    }
}

/// Install a [`Registry`] combined with a [`PrettyLayer`] writing to `sink`
/// as the global default subscriber.
///
/// **Returns**
/// - `Err(InitError::AlreadyInstalled)` if another global subscriber was
///   set first.
pub fn try_init_pretty_logging(sink: Arc<dyn LogSink>, config: LoggingConfig) -> Result<(), InitError> {
    let layer = PrettyLayer::new(config.build_handler(sink));
    let subscriber = Registry::default().with(layer);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Like [`try_init_pretty_logging`], but panics if a global subscriber is
/// already installed.
pub fn init_pretty_logging(sink: Arc<dyn LogSink>, config: LoggingConfig) {
    try_init_pretty_logging(sink, config).expect("set global subscriber");
}

/// Log to stderr, configured from the environment.
///
/// Invalid environment values are reported on stderr and the defaults are
/// used instead. This is the recommended entrypoint for command line tools.
pub fn init_stderr_logging() {
    init_pretty_logging(Arc::new(io::stderr()), LoggingConfig::from_env_or_default());
}
