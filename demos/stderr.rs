use std::time::Instant;
use tracing::{debug, info, info_span, warn};

use pretty_log_handler::init::init_stderr_logging;

// Try `PRETTY_LOG_LEVEL=debug` or `PRETTY_LOG_STYLE=name` to see the
// environment configuration at work.
fn main() {
    init_stderr_logging();

    info!(port = 8080, "server started");
    debug!("only visible at PRETTY_LOG_LEVEL=debug or lower");

    let n: u64 = 5;
    let start = Instant::now();
    let span = info_span!("batch", size = n);
    let _guard = span.enter();
    for i in 0..n {
        info!(iteration = i, "processing");
    }
    warn!(elapsed = ?start.elapsed(), "batch finished");
}
