use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Signed severity rank of a [`LogRecord`](crate::record::LogRecord).
///
/// `0` is the informational baseline. Negative values are less severe
/// (debug-like), positive values more severe (warning/error-like). The
/// four named levels are spaced four apart so callers can express
/// in-between severities such as `WARN+2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Level(pub i32);

impl Level {
    pub const TRACE: Level = Level(-8);
    pub const DEBUG: Level = Level(-4);
    pub const INFO: Level = Level(0);
    pub const WARN: Level = Level(4);
    pub const ERROR: Level = Level(8);

    /// Raw numeric rank.
    pub fn rank(self) -> i32 {
        self.0
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::INFO
    }
}

impl From<tracing::Level> for Level {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE => Level::TRACE,
            tracing::Level::DEBUG => Level::DEBUG,
            tracing::Level::INFO => Level::INFO,
            tracing::Level::WARN => Level::WARN,
            tracing::Level::ERROR => Level::ERROR,
        }
    }
}

impl From<&tracing::Level> for Level {
    fn from(level: &tracing::Level) -> Self {
        Level::from(*level)
    }
}

/// Renders the nearest named level at or below `self`, plus the distance
/// from it when non-zero: `INFO`, `DEBUG-4`, `WARN+2`, `ERROR+10`.
impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (base, name) = if *self < Level::INFO {
            (Level::DEBUG, "DEBUG")
        } else if *self < Level::WARN {
            (Level::INFO, "INFO")
        } else if *self < Level::ERROR {
            (Level::WARN, "WARN")
        } else {
            (Level::ERROR, "ERROR")
        };

        let delta = self.0 - base.0;
        if delta == 0 {
            f.write_str(name)
        } else {
            write!(f, "{}{:+}", name, delta)
        }
    }
}

/// Error returned when a level string cannot be parsed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid log level {input:?}")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    fn new(input: &str) -> Self {
        ParseLevelError { input: input.to_string() }
    }
}

/// Accepts the names produced by `Display` (case-insensitive, with an
/// optional signed offset), `TRACE`, or a bare integer rank.
impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(rank) = trimmed.parse::<i32>() {
            return Ok(Level(rank));
        }

        let split = trimmed.find(|c| c == '+' || c == '-').unwrap_or(trimmed.len());
        let (name, offset) = trimmed.split_at(split);

        let base = match name.to_ascii_uppercase().as_str() {
            "TRACE" => Level::TRACE,
            "DEBUG" => Level::DEBUG,
            "INFO" => Level::INFO,
            "WARN" | "WARNING" => Level::WARN,
            "ERROR" => Level::ERROR,
            _ => return Err(ParseLevelError::new(s)),
        };

        if offset.is_empty() {
            return Ok(base);
        }

        let delta = offset.parse::<i32>().map_err(|_| ParseLevelError::new(s))?;
        base.0
            .checked_add(delta)
            .map(Level)
            .ok_or_else(|| ParseLevelError::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_levels_render_bare() {
        assert_eq!(Level::DEBUG.to_string(), "DEBUG");
        assert_eq!(Level::INFO.to_string(), "INFO");
        assert_eq!(Level::WARN.to_string(), "WARN");
        assert_eq!(Level::ERROR.to_string(), "ERROR");
    }

    #[test]
    fn in_between_levels_render_with_offset() {
        assert_eq!(Level::TRACE.to_string(), "DEBUG-4");
        assert_eq!(Level(2).to_string(), "INFO+2");
        assert_eq!(Level(6).to_string(), "WARN+2");
        assert_eq!(Level(18).to_string(), "ERROR+10");
        assert_eq!(Level(-1).to_string(), "DEBUG+3");
    }

    #[test]
    fn parses_names_offsets_and_ranks() {
        assert_eq!("info".parse::<Level>(), Ok(Level::INFO));
        assert_eq!("Warning".parse::<Level>(), Ok(Level::WARN));
        assert_eq!("WARN+2".parse::<Level>(), Ok(Level(6)));
        assert_eq!("debug-4".parse::<Level>(), Ok(Level(-8)));
        assert_eq!("trace".parse::<Level>(), Ok(Level::TRACE));
        assert_eq!("-3".parse::<Level>(), Ok(Level(-3)));
        assert_eq!(" 12 ".parse::<Level>(), Ok(Level(12)));
    }

    #[test]
    fn rejects_garbage() {
        assert!("loud".parse::<Level>().is_err());
        assert!("INFO+x".parse::<Level>().is_err());
        assert!("".parse::<Level>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for rank in [-12, -8, -4, -1, 0, 3, 4, 7, 8, 40] {
            let level = Level(rank);
            assert_eq!(level.to_string().parse::<Level>(), Ok(level));
        }
    }

    #[test]
    fn tracing_levels_map_onto_ranks() {
        assert_eq!(Level::from(tracing::Level::TRACE), Level(-8));
        assert_eq!(Level::from(tracing::Level::ERROR), Level(8));
        assert!(Level::from(tracing::Level::DEBUG) < Level::from(tracing::Level::INFO));
    }
}
