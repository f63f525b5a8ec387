use crate::level::Level;
use chrono::{DateTime, FixedOffset, TimeZone};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// A single log event as handed to a [`Handler`](crate::handler::Handler).
///
/// Records are built by the caller for one `handle` call and are not kept
/// afterwards.
///
/// `time` keeps the offset it was created with; lines show that wall clock,
/// not the process-local one.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub time: DateTime<FixedOffset>,
    pub level: Level,
    pub message: String,
    pub attributes: Vec<Attr>,
}

impl LogRecord {
    pub fn new<Tz: TimeZone>(time: DateTime<Tz>, level: Level, message: impl Into<String>) -> Self {
        LogRecord {
            time: time.fixed_offset(),
            level,
            message: message.into(),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute, keeping insertion order.
    pub fn with_attr(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        self.attributes.push(Attr::new(key, value));
        self
    }
}

/// Key/value pair attached to a record or bound to a handler.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attr {
    pub key: Cow<'static, str>,
    pub value: Value,
}

impl Attr {
    pub fn new(key: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        Attr {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Attribute value. Every variant renders unquoted through `Display`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    I64(i64),
    U64(u64),
    F64(f64),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::I64(v) => write!(f, "{}", v),
            Value::U64(v) => write!(f, "{}", v),
            Value::F64(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::I64(v.into())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::U64(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::U64(v.into())
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::U64(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}
