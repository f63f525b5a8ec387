use crate::color::{paint, Color};
use crate::error::HandleError;
use crate::level::Level;
use crate::record::{Attr, LogRecord};
use crate::sink::LogSink;
use std::fmt::{self, Write as _};
use std::sync::Arc;

/// Timestamp layout used for the first field of every line.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Added to a level's rank to find its row in [`LEVEL_TABLE`].
///
/// Changing it reclassifies every existing call site, so it is part of the
/// output contract.
pub const LEVEL_TABLE_OFFSET: i32 = 4;

const DEBUG: (Color, &str) = (Color::Magenta, "[DEBUG]");
const INFO: (Color, &str) = (Color::Green, "[INFO] ");
const WARN: (Color, &str) = (Color::Yellow, "[WARN] ");
const ERROR: (Color, &str) = (Color::Red, "[ERROR]");

/// Severity tags indexed by `level + LEVEL_TABLE_OFFSET`.
///
/// Levels outside the table are clamped to its first or last row, so new
/// rows added here take effect without touching the lookup.
#[rustfmt::skip]
pub const LEVEL_TABLE: [(Color, &str); 13] = [
    DEBUG, DEBUG, DEBUG, DEBUG,
    INFO, INFO, INFO, INFO,
    WARN, WARN, WARN, WARN,
    ERROR,
];

/// Table row for `level`, clamped into range.
pub fn level_tag(level: Level) -> (Color, &'static str) {
    let last = LEVEL_TABLE.len() as i64 - 1;
    let index = (i64::from(level.rank()) + i64::from(LEVEL_TABLE_OFFSET)).clamp(0, last);
    LEVEL_TABLE[index as usize]
}

/// Operations a logging front-end needs from an output handler.
///
/// Front-ends are expected to consult [`enabled`](Handler::enabled) before
/// building a record, but [`handle`](Handler::handle) must not depend on
/// that having happened.
pub trait Handler: Clone + Send + Sync + 'static {
    /// Whether records at `level` should be built at all.
    fn enabled(&self, level: Level) -> bool;

    /// Render `record` to the handler's destination.
    fn handle(&self, record: &LogRecord) -> Result<(), HandleError>;

    /// Derive a handler that also renders `attrs` on every record.
    /// The receiver is left untouched.
    fn with_attrs(&self, attrs: &[Attr]) -> Self;

    /// Derive a handler that nests subsequent attributes under `name`.
    fn with_group(&self, name: &str) -> Self;
}

/// How the severity field of a line is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelStyle {
    /// Fixed-width bracketed tag in its severity color. Falls back to
    /// the plain tag when colors are disabled (see [`crate::color`]).
    #[default]
    Color,
    /// Fixed-width bracketed tag, no escape codes.
    Plain,
    /// The level's own name, e.g. `WARN+2`.
    Name,
}

/// Construction options for [`PrettyHandler`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HandlerOptions {
    /// Inclusive threshold. `None` means [`Level::INFO`].
    pub min_level: Option<Level>,
    pub style: LevelStyle,
}

/// Handler that writes one human-readable line per record:
///
/// ```text
/// 2024-01-15 09:30:00 [INFO]  server started port=8080
/// ```
///
/// Cloning and [`with_attrs`](Handler::with_attrs) are cheap: the sink and
/// the bound attributes are reference counted, and derivation builds a new
/// attribute slice instead of touching the shared one. All handlers derived
/// from the same root write to the same sink.
#[derive(Clone)]
pub struct PrettyHandler {
    sink: Arc<dyn LogSink>,
    min_level: Level,
    style: LevelStyle,
    attrs: Arc<[Attr]>,
}

impl PrettyHandler {
    pub fn new(sink: Arc<dyn LogSink>, options: HandlerOptions) -> Self {
        PrettyHandler {
            sink,
            min_level: options.min_level.unwrap_or(Level::INFO),
            style: options.style,
            attrs: Arc::from(Vec::new()),
        }
    }

    pub fn min_level(&self) -> Level {
        self.min_level
    }

    pub fn style(&self) -> LevelStyle {
        self.style
    }

    /// Attributes bound through previous derivations, outermost first.
    pub fn bound_attrs(&self) -> &[Attr] {
        &self.attrs
    }

    fn write_level(&self, out: &mut String, level: Level) {
        match self.style {
            LevelStyle::Color => {
                let (color, tag) = level_tag(level);
                out.push_str(&paint(color, tag));
            }
            LevelStyle::Plain => out.push_str(level_tag(level).1),
            LevelStyle::Name => {
                let _ = write!(out, "{}", level);
            }
        }
    }
}

impl Handler for PrettyHandler {
    fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    fn handle(&self, record: &LogRecord) -> Result<(), HandleError> {
        // No threshold check: callers that skip `enabled` still get output.
        let mut buf = String::with_capacity(64 + record.message.len());
        let _ = write!(buf, "{} ", record.time.format(TIME_FORMAT));
        self.write_level(&mut buf, record.level);
        buf.push(' ');
        buf.push_str(&record.message);
        self.sink.write_all(buf.as_bytes())?;

        for attr in self.attrs.iter().chain(record.attributes.iter()) {
            buf.clear();
            let _ = write!(buf, " {}", attr);
            self.sink.write_all(buf.as_bytes())?;
        }

        self.sink.write_all(b"\n")?;
        Ok(())
    }

    fn with_attrs(&self, attrs: &[Attr]) -> Self {
        if attrs.is_empty() {
            return self.clone();
        }

        let mut merged = Vec::with_capacity(self.attrs.len() + attrs.len());
        merged.extend_from_slice(&self.attrs);
        merged.extend_from_slice(attrs);

        PrettyHandler {
            sink: Arc::clone(&self.sink),
            min_level: self.min_level,
            style: self.style,
            attrs: Arc::from(merged),
        }
    }

    fn with_group(&self, name: &str) -> Self {
        panic!("PrettyHandler does not support attribute groups (requested group {name:?})");
    }
}

impl fmt::Debug for PrettyHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrettyHandler")
            .field("min_level", &self.min_level)
            .field("style", &self.style)
            .field("attrs", &self.attrs)
            .finish_non_exhaustive()
    }
}
