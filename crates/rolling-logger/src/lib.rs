//! Rolling Logger
//!
//! `tracing_subscriber::fmt` output routed to the browser console (stderr
//! off-wasm) with the most recent lines kept in a fixed-size circular buffer.

use std::collections::VecDeque;
use std::fmt;
use std::io;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Lines kept when no capacity is given
pub const DEFAULT_CAPACITY: usize = 500;

/// Circular buffer of formatted log lines
#[derive(Clone, Debug)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn push(&self, line: String) {
        let mut lines = match self.lines.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Where formatted lines go besides the buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sink {
    /// Browser console on wasm32, stderr elsewhere
    Console,
    /// Buffer only
    Silent,
}

/// `MakeWriter` handing each event a [`LineWriter`]
#[derive(Clone, Debug)]
pub struct BufferWriter {
    buffer: LogBuffer,
    sink: Sink,
}

impl BufferWriter {
    pub fn new(buffer: LogBuffer, sink: Sink) -> Self {
        Self { buffer, sink }
    }

    fn line(&self, level: Level) -> LineWriter {
        LineWriter {
            buffer: self.buffer.clone(),
            sink: self.sink,
            level,
            bytes: Vec::new(),
        }
    }
}

impl<'a> MakeWriter<'a> for BufferWriter {
    type Writer = LineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.line(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        self.line(*meta.level())
    }
}

/// Collects one formatted event and commits it on drop
pub struct LineWriter {
    buffer: LogBuffer,
    sink: Sink,
    level: Level,
    bytes: Vec<u8>,
}

impl io::Write for LineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        if self.bytes.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.bytes).trim_end().to_string();
        if self.sink == Sink::Console {
            write_console(&self.level, &line);
        }
        self.buffer.push(line);
    }
}

/// Wall-clock `HH:MM:SS.mmm` from chrono, which works on wasm32
struct ClockTime;

impl FormatTime for ClockTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Utc::now().format("%H:%M:%S%.3f"))
    }
}

/// fmt layer writing plain lines into `buffer`
pub fn layer<S>(buffer: LogBuffer, sink: Sink) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_timer(ClockTime)
        .with_writer(BufferWriter::new(buffer, sink))
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: &Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match *level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: &Level, line: &str) {
    eprintln!("{}", line);
}

static GLOBAL_BUFFER: OnceLock<LogBuffer> = OnceLock::new();

/// Parse a level name, falling back to INFO
pub fn parse_level(name: Option<&str>) -> Level {
    name.and_then(|n| n.trim().parse::<Level>().ok())
        .unwrap_or(Level::INFO)
}

/// Install the layer as the global default. Later calls are no-ops.
pub fn init(max_level: Level, capacity: usize) {
    if GLOBAL_BUFFER.get().is_some() {
        return;
    }
    let buffer = GLOBAL_BUFFER.get_or_init(|| LogBuffer::new(capacity)).clone();
    let subscriber = tracing_subscriber::registry()
        .with(LevelFilter::from_level(max_level))
        .with(layer(buffer, Sink::Console));
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        write_console(&Level::WARN, "rolling-logger: a global subscriber was already set");
    }
}

/// Most recent lines captured by [`init`], oldest first
pub fn recent_lines() -> Vec<String> {
    GLOBAL_BUFFER.get().map(LogBuffer::snapshot).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture<F: FnOnce()>(level: Level, capacity: usize, f: F) -> Vec<String> {
        let buffer = LogBuffer::new(capacity);
        let subscriber = tracing_subscriber::registry()
            .with(LevelFilter::from_level(level))
            .with(layer(buffer.clone(), Sink::Silent));
        tracing::subscriber::with_default(subscriber, f);
        buffer.snapshot()
    }

    #[test]
    fn test_formats_message_and_fields() {
        let lines = capture(Level::DEBUG, 10, || {
            tracing::info!(url = "http://x/api/teams/", count = 2, "fetched");
        });
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("fetched"));
        assert!(lines[0].contains("http://x/api/teams/"));
        assert!(lines[0].ends_with("count=2"));
        assert!(!lines[0].contains('\u{1b}'));
    }

    #[test]
    fn test_level_filtering() {
        let lines = capture(Level::WARN, 10, || {
            tracing::debug!("hidden");
            tracing::info!("hidden");
            tracing::error!("shown");
        });
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("shown"));
    }

    #[test]
    fn test_buffer_rolls_over() {
        let lines = capture(Level::INFO, 3, || {
            for i in 0..5 {
                tracing::info!("line {}", i);
            }
        });
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("line 2"));
        assert!(lines[2].ends_with("line 4"));
    }

    #[test]
    fn test_global_init_fills_recent_lines() {
        init(Level::INFO, 8);
        init(Level::TRACE, 1);
        tracing::info!("dashboard mounted");
        let lines = recent_lines();
        assert!(lines.iter().any(|l| l.ends_with("dashboard mounted")));
        assert!(lines.len() <= 8);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("debug")), Level::DEBUG);
        assert_eq!(parse_level(Some("WARN")), Level::WARN);
        assert_eq!(parse_level(Some("loud")), Level::INFO);
        assert_eq!(parse_level(None), Level::INFO);
    }
}
