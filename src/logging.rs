//! Run log that writes every record to a log file and a filtered subset to the console.
//!
//! A single [`RunLog`] is created in `main` and handed to each stage by reference.
//! It implements [`log::Log`] but is never installed as the global logger.

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::error::{FsbextError, Result};

/// Records logged with this target only reach the log file.
pub const FILE_ONLY: &str = "file";

const DEFAULT_TARGET: &str = "fsbext";

type Sink = Box<dyn Write + Send>;

pub struct RunLog {
    file: Mutex<Sink>,
    console: Mutex<Sink>,
    console_level: LevelFilter,
}

impl RunLog {
    /// Truncates `path` and logs to it, with the console on stdout.
    pub fn open(path: &Path, verbose: bool) -> Result<Self> {
        let file = File::create(path).map_err(|source| FsbextError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::with_writers(
            Box::new(BufWriter::new(file)),
            Box::new(io::stdout()),
            verbose,
        ))
    }

    pub fn with_writers(file: Sink, console: Sink, verbose: bool) -> Self {
        Self {
            file: Mutex::new(file),
            console: Mutex::new(console),
            console_level: if verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }

    /// Discards everything.
    pub fn silent() -> Self {
        Self::with_writers(Box::new(io::sink()), Box::new(io::sink()), false)
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.emit(Level::Debug, DEFAULT_TARGET, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.emit(Level::Info, DEFAULT_TARGET, message);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.emit(Level::Warn, DEFAULT_TARGET, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.emit(Level::Error, DEFAULT_TARGET, message);
    }

    /// Logs to the file only, regardless of level.
    pub fn file_only(&self, level: Level, message: impl fmt::Display) {
        self.emit(level, FILE_ONLY, message);
    }

    /// Writes a line to the console without a status tag or log entry. Used for the
    /// per-file progress output.
    pub fn console(&self, message: impl fmt::Display) {
        if let Ok(mut console) = self.console.lock() {
            let _ = write!(console, "{message}");
            let _ = console.flush();
        }
    }

    fn emit(&self, level: Level, target: &str, message: impl fmt::Display) {
        self.log(
            &Record::builder()
                .level(level)
                .target(target)
                .args(format_args!("{message}"))
                .build(),
        );
    }
}

impl Log for RunLog {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "{} {}: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            );
        }

        if record.target() != FILE_ONLY && record.level() <= self.console_level {
            if let Ok(mut console) = self.console.lock() {
                let _ = writeln!(console, "{} {}", console_tag(record.level()), record.args());
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
        if let Ok(mut console) = self.console.lock() {
            let _ = console.flush();
        }
    }
}

impl Drop for RunLog {
    fn drop(&mut self) {
        self.flush();
    }
}

fn console_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "[EE]",
        Level::Warn => "[!!]",
        Level::Info => "[ii]",
        Level::Debug | Level::Trace => "[..]",
    }
}
