use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// `log` backend writing `[timestamp] LEVEL message` lines
pub struct Logger {
    pub write_to_stderr: bool,
    pub severity: Level,
    pub file: Option<Arc<Mutex<File>>>,
    pub enable_colors: bool,
}

impl Logger {
    /// Create a new logger; `file_path` adds a plain-text copy of every line
    pub fn new(
        file_path: Option<PathBuf>,
        severity: Option<Level>,
        write_to_stderr: bool,
        enable_colors: bool,
    ) -> Self {
        let file = file_path.and_then(|path| {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            File::create(&path).ok().map(|f| Arc::new(Mutex::new(f)))
        });

        Logger {
            write_to_stderr,
            severity: severity.unwrap_or(Level::Info),
            file,
            enable_colors,
        }
    }

    fn timestamp() -> String {
        OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default()
    }

    fn color(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1b[31m",
            Level::Warn => "\x1b[33m",
            Level::Info => "\x1b[36m",
            Level::Debug => "\x1b[35m",
            Level::Trace => "\x1b[37m",
        }
    }

    const RESET: &'static str = "\x1b[0m";

    /// Initialize logger from `WIKI_LOG` / `RUST_LOG`, `WIKI_LOG_FILE` and `NO_COLOR`
    pub fn init() -> Result<(), log::SetLoggerError> {
        let severity = std::env::var("WIKI_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string())
            .parse::<Level>()
            .unwrap_or(Level::Info);

        let file_path = std::env::var("WIKI_LOG_FILE").ok().map(PathBuf::from);
        let enable_colors = std::env::var("NO_COLOR").is_err();

        let logger = Logger::new(file_path, Some(severity), true, enable_colors);
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
        let level_str = record.level().as_str();
        let args = record.args();

        if self.write_to_stderr {
            let line = if self.enable_colors {
                let color = Self::color(record.level());
                let reset = Self::RESET;
                format!("{color}[{timestamp}] {level_str}{reset} {args}\n")
            } else {
                format!("[{timestamp}] {level_str} {args}\n")
            };
            let _ = std::io::stderr().write_all(line.as_bytes());
        }

        // file copy never carries colors
        if let Some(file) = &self.file {
            if let Ok(mut guard) = file.lock() {
                let _ = writeln!(guard, "[{timestamp}] {level_str} {args}");
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
        if let Some(file) = &self.file {
            if let Ok(mut guard) = file.lock() {
                let _ = guard.flush();
            }
        }
    }
}
