mod common;

use common::{morning, Capture};
use pretty_log_handler::{color, Handler, HandlerOptions, Level, LogRecord, PrettyHandler};

// Own binary: the color switch is process-wide.
#[test]
fn colored_style_drops_escapes_when_colors_are_off() {
    color::set_override(false);
    let capture = Capture::new();
    let handler = PrettyHandler::new(capture.sink(), HandlerOptions::default());

    handler
        .handle(&LogRecord::new(morning(), Level::WARN, "disk low").with_attr("free", 3u64))
        .unwrap();

    assert_eq!(capture.contents(), "2024-01-15 09:30:00 [WARN]  disk low free=3\n");
}
