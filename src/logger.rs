use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use time::OffsetDateTime;
use time::macros::format_description;

pub enum LogOutput {
    Stdout,
    Stderr,
}

/// `log` backend for binaries embedding the wiki core
pub struct Logger {
    pub write_to_std: Option<LogOutput>,
    pub severity: Level,
    pub file: Option<Arc<Mutex<File>>>,
    pub enable_colors: bool,
}

impl Logger {
    /// Create a new logger. When `file_path` is given, records are appended
    /// to it (without colors) in addition to `write_to_std`.
    pub fn new(
        file_path: Option<&Path>,
        severity: Option<Level>,
        write_to_std: Option<LogOutput>,
        enable_colors: bool,
    ) -> Self {
        let file = file_path.and_then(|path| {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
                .map(|f| Arc::new(Mutex::new(f)))
        });

        Logger {
            write_to_std,
            severity: severity.unwrap_or(Level::Info),
            file,
            enable_colors,
        }
    }

    /// Current UTC time as `HH:MM:SS`
    fn timestamp() -> String {
        OffsetDateTime::now_utc()
            .format(format_description!("[hour]:[minute]:[second]"))
            .unwrap_or_default()
    }

    /// Get color code for log level
    fn color(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1b[31m", // Red
            Level::Warn => "\x1b[33m",  // Yellow
            Level::Info => "\x1b[36m",  // Cyan
            Level::Debug => "\x1b[35m", // Magenta
            Level::Trace => "\x1b[37m", // White
        }
    }

    fn reset() -> &'static str {
        "\x1b[0m"
    }

    /// Format one record line, newline included
    pub fn format_line(
        timestamp: &str,
        level: Level,
        args: &std::fmt::Arguments<'_>,
        colors: bool,
    ) -> String {
        let level_str = level.as_str();
        if colors {
            let color = Self::color(level);
            let reset = Self::reset();
            format!("{color}[{timestamp}] {level_str}{reset} {args}\n")
        } else {
            format!("[{timestamp}] {level_str} {args}\n")
        }
    }

    /// Initialize logger with environment variables
    ///
    /// `DFTR_LOG` (or `RUST_LOG`) picks the level, `DFTR_LOG_FILE` names a
    /// file to append to, and `NO_COLOR` disables colors.
    pub fn init() -> Result<(), log::SetLoggerError> {
        let severity = std::env::var("DFTR_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string())
            .parse::<Level>()
            .unwrap_or(Level::Info);

        let file_path = std::env::var("DFTR_LOG_FILE").ok().map(PathBuf::from);
        let enable_colors = std::env::var("NO_COLOR").is_err();

        let logger = Logger::new(
            file_path.as_deref(),
            Some(severity),
            Some(LogOutput::Stderr),
            enable_colors,
        );
        log::set_max_level(LevelFilter::Trace);
        log::set_logger(Box::leak(Box::new(logger)))?;
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.severity
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = Self::timestamp();

        if let Some(write_to_std) = &self.write_to_std {
            let line =
                Self::format_line(&timestamp, record.level(), record.args(), self.enable_colors);
            match write_to_std {
                LogOutput::Stdout => {
                    let _ = std::io::stdout().write_all(line.as_bytes());
                }
                LogOutput::Stderr => {
                    let _ = std::io::stderr().write_all(line.as_bytes());
                }
            }
        }

        if let Some(file) = &self.file {
            if let Ok(mut file_guard) = file.lock() {
                let line = Self::format_line(&timestamp, record.level(), record.args(), false);
                let _ = file_guard.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
        if let Some(file) = &self.file {
            if let Ok(mut file_guard) = file.lock() {
                let _ = file_guard.flush();
            }
        }
    }
}
