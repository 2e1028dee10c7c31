//! Timestamped console logger
//!
//! Every line has the shape `[HH:MM:SS.mmm] message`, stamped with the local
//! time of day when the line is written. The [`Logger`] handle is cheap to
//! clone so task actions can log their own lines through the same sink as the
//! runner.

use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{Local, NaiveTime};
use colored::*;

use crate::types::LocalbotResult;

/// `chrono` format used for the time-of-day prefix
pub const TIME_OF_DAY_FORMAT: &str = "%H:%M:%S%.3f";

/// Source of the time of day stamped on each line
pub trait Clock: Send {
    fn time_of_day(&self) -> NaiveTime;
}

/// Local wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn time_of_day(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
    fn time_of_day(&self) -> NaiveTime {
        self.0
    }
}

/// Render one log line without the trailing newline.
pub fn format_line(time: NaiveTime, message: &str) -> String {
    format!("[{}] {}", time.format(TIME_OF_DAY_FORMAT), message)
}

/// Split the message out of a rendered line, or `None` if the line has no
/// `[time] ` prefix.
pub fn strip_timestamp(line: &str) -> Option<&str> {
    line.strip_prefix('[')?
        .split_once("] ")
        .map(|(_, message)| message)
}

struct LoggerInner {
    sink: Box<dyn Write + Send>,
    clock: Box<dyn Clock>,
    color: bool,
}

/// Shared handle writing timestamped lines to a sink
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Mutex<LoggerInner>>,
}

impl Logger {
    /// Logger over an arbitrary sink. Colour is off.
    pub fn new(sink: impl Write + Send + 'static, clock: impl Clock + 'static) -> Self {
        Self::build(Box::new(sink), Box::new(clock), false)
    }

    /// Logger over standard output with the local clock. Error lines are
    /// coloured only when stdout is a terminal.
    pub fn stdout() -> Self {
        let color = io::stdout().is_terminal();
        Self::build(Box::new(io::stdout()), Box::new(SystemClock), color)
    }

    fn build(sink: Box<dyn Write + Send>, clock: Box<dyn Clock>, color: bool) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LoggerInner { sink, clock, color })),
        }
    }

    /// Write a plain log line.
    pub fn log(&self, message: &str) -> LocalbotResult<()> {
        self.write_line(message, false)
    }

    /// Write an error line. Same format as [`Logger::log`].
    pub fn error(&self, message: &str) -> LocalbotResult<()> {
        self.write_line(message, true)
    }

    fn write_line(&self, message: &str, is_error: bool) -> LocalbotResult<()> {
        let mut inner = self.lock();
        let time = inner.clock.time_of_day();
        let line = if is_error && inner.color {
            format_line(time, &message.red().to_string())
        } else {
            format_line(time, message)
        };

        writeln!(inner.sink, "{}", line)?;
        inner.sink.flush()?;
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, LoggerInner> {
        // A panic mid-write leaves the sink usable; keep logging.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// In-memory sink that can be shared with a [`Logger`] and read back later
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Written lines with the timestamp prefix removed
    pub fn messages(&self) -> Vec<String> {
        self.lines()
            .iter()
            .filter_map(|line| strip_timestamp(line))
            .map(str::to_string)
            .collect()
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
