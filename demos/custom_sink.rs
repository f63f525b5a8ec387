use std::io;
use std::sync::Arc;

use pretty_log_handler::{
    init::{init_pretty_logging, LoggingConfig},
    sink::LogSink,
};
use tracing::{error, info, info_span};

/// Example of plugging in a completely custom destination by implementing
/// the `LogSink` trait directly. Imagine this forwards lines to some
/// in-house collector; here it just prints to stdout.
struct CollectorStub;

impl LogSink for CollectorStub {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        // Handlers write a record in several pieces; a real sink would
        // buffer up to the newline before shipping.
        io::Write::write_all(&mut io::stdout().lock(), buf)
    }
}

fn main() {
    let sink: Arc<dyn LogSink> = Arc::new(CollectorStub);

    init_pretty_logging(
        sink,
        LoggingConfig {
            service_name: Some("custom-sink-demo".to_string()),
            ..LoggingConfig::default()
        },
    );

    info!("custom sink example started");

    let span = info_span!("request", id = 17, path = "/checkout");
    let _guard = span.enter();
    error!(db = "orders", "simulated error rendered via custom sink");
}
