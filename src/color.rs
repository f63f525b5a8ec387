//! Terminal styling for severity tags.
//!
//! Rendering goes through `colored`, so its process-wide switches apply:
//! `NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE`, a non-terminal stdout, and
//! [`set_override`].

use colored::Colorize;

pub use colored::control::{set_override, unset_override};
pub use colored::Color;

/// Wrap `text` in `color`, or return it unchanged when colors are off.
pub fn paint(color: Color, text: &str) -> String {
    text.color(color).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_wraps_text_and_resets() {
        set_override(true);
        assert_eq!(paint(Color::Green, "ok"), "\x1b[32mok\x1b[0m");
        assert_eq!(paint(Color::Magenta, "[DEBUG]"), "\x1b[35m[DEBUG]\x1b[0m");
    }
}
