#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone};
use pretty_log_handler::{HandlerOptions, Level, LevelStyle, LogSink, PrettyHandler, SharedWriter};
use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, ThreadId};

/// In-memory sink whose contents can be read back as text.
#[derive(Clone, Default)]
pub struct Capture(Arc<SharedWriter<Vec<u8>>>);

impl Capture {
    pub fn new() -> Self {
        Capture(Arc::new(SharedWriter::new(Vec::new())))
    }

    pub fn sink(&self) -> Arc<dyn LogSink> {
        self.0.clone()
    }

    pub fn contents(&self) -> String {
        self.0.with_inner(|buf| String::from_utf8(buf.clone()).unwrap())
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

/// Accepts `limit` bytes in total, then fails every write.
pub struct FailingSink {
    limit: usize,
    pub written: Mutex<Vec<u8>>,
    pub calls: AtomicUsize,
}

impl FailingSink {
    pub fn new(limit: usize) -> Self {
        FailingSink {
            limit,
            written: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn written(&self) -> String {
        String::from_utf8(self.written.lock().unwrap().clone()).unwrap()
    }
}

impl LogSink for FailingSink {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut written = self.written.lock().unwrap();
        let room = self.limit.saturating_sub(written.len());
        if buf.len() > room {
            written.extend_from_slice(&buf[..room]);
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        written.extend_from_slice(buf);
        Ok(())
    }
}

/// Keeps a separate buffer per writing thread.
#[derive(Default)]
pub struct PerThreadSink {
    buffers: Mutex<HashMap<ThreadId, Vec<u8>>>,
}

impl PerThreadSink {
    pub fn take(&self, id: ThreadId) -> String {
        let bytes = self.buffers.lock().unwrap().remove(&id).unwrap_or_default();
        String::from_utf8(bytes).unwrap()
    }
}

impl LogSink for PerThreadSink {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        self.buffers
            .lock()
            .unwrap()
            .entry(thread::current().id())
            .or_default()
            .extend_from_slice(buf);
        Ok(())
    }
}

pub fn plain(sink: Arc<dyn LogSink>, min_level: Option<Level>) -> PrettyHandler {
    PrettyHandler::new(
        sink,
        HandlerOptions {
            min_level,
            style: LevelStyle::Plain,
        },
    )
}

pub fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(y, mo, d, h, mi, s).single().unwrap()
}

pub fn morning() -> DateTime<Local> {
    at(2024, 1, 15, 9, 30, 0)
}

/// Strip the `YYYY-MM-DD HH:MM:SS ` prefix of a rendered line.
pub fn without_time(line: &str) -> &str {
    &line[20..]
}
