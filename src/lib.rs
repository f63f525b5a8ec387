//! Human-readable, single-line, severity-colored output for `tracing`.
//!
//! ```text
//! 2024-01-15 09:30:00 [INFO]  server started port=8080
//! ```
//!
//! [`PrettyHandler`] does the rendering; [`PrettyLayer`] feeds it from a
//! `tracing_subscriber` registry; [`init`] wires both up globally.

pub mod assert;
pub mod color;
pub mod env;
pub mod error;
pub mod handler;
pub mod init;
pub mod layer;
pub mod level;
pub mod record;
pub mod sink;

pub use error::{ConfigError, HandleError, InitError};
pub use handler::{Handler, HandlerOptions, LevelStyle, PrettyHandler};
pub use layer::PrettyLayer;
pub use level::Level;
pub use record::{Attr, LogRecord, Value};
pub use sink::{LogSink, NoopSink, SharedWriter};
