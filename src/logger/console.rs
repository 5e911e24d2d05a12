use std::fmt::{self, Display};
use std::io::Write;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Info,
    Warn,
    Error,
    Debug,
}

impl ConsoleLevel {
    pub fn tag(self) -> &'static str {
        match self {
            ConsoleLevel::Info => "[INFO]",
            ConsoleLevel::Warn => "[WARN]",
            ConsoleLevel::Error => "[ERROR]",
            ConsoleLevel::Debug => "[DEBUG]",
        }
    }
}

pub trait ConsoleSink: Send + Sync {
    fn emit(&self, level: ConsoleLevel, line: &str);
}

/// Info and debug lines go to stdout, warnings and errors to stderr.
#[derive(Debug, Default)]
pub struct StdConsole;

impl ConsoleSink for StdConsole {
    fn emit(&self, level: ConsoleLevel, line: &str) {
        // A closed stream must not take the caller down with it.
        let _ = match level {
            ConsoleLevel::Info | ConsoleLevel::Debug => writeln!(std::io::stdout().lock(), "{line}"),
            ConsoleLevel::Warn | ConsoleLevel::Error => writeln!(std::io::stderr().lock(), "{line}"),
        };
    }
}

/// Keeps every emitted line in memory.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: Mutex<Vec<(ConsoleLevel, String)>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(ConsoleLevel, String)> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl ConsoleSink for MemoryConsole {
    fn emit(&self, level: ConsoleLevel, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((level, line.to_string()));
    }
}

/// Tagged console output that is silenced outside development mode,
/// except for errors.
///
/// The mode is fixed at construction. Build one per process and hand it to
/// whoever needs it.
pub struct ConsoleLogger {
    development: bool,
    sink: Arc<dyn ConsoleSink>,
}

impl ConsoleLogger {
    pub fn new(development: bool, sink: Arc<dyn ConsoleSink>) -> Self {
        Self { development, sink }
    }

    /// Development mode follows the build profile.
    pub fn for_build() -> Self {
        Self::new(cfg!(debug_assertions), Arc::new(StdConsole))
    }

    pub fn is_development(&self) -> bool {
        self.development
    }

    pub fn info(&self, message: impl Display) {
        if self.development {
            self.emit(ConsoleLevel::Info, message);
        }
    }

    pub fn warn(&self, message: impl Display) {
        if self.development {
            self.emit(ConsoleLevel::Warn, message);
        }
    }

    pub fn debug(&self, message: impl Display) {
        if self.development {
            self.emit(ConsoleLevel::Debug, message);
        }
    }

    pub fn error(&self, message: impl Display) {
        self.emit(ConsoleLevel::Error, message);
    }

    fn emit(&self, level: ConsoleLevel, message: impl Display) {
        self.sink
            .emit(level, &format!("{} {}", level.tag(), message));
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("development", &self.development)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(development: bool) -> (ConsoleLogger, Arc<MemoryConsole>) {
        let sink = Arc::new(MemoryConsole::new());
        (ConsoleLogger::new(development, sink.clone()), sink)
    }

    fn log_all(logger: &ConsoleLogger) {
        logger.info("starting");
        logger.warn(format_args!("slow view {}", "manager/Home"));
        logger.debug("cache miss");
        logger.error("load failed");
    }

    #[test]
    fn development_emits_every_level() {
        let (logger, sink) = capture(true);
        log_all(&logger);
        assert_eq!(
            sink.entries(),
            vec![
                (ConsoleLevel::Info, "[INFO] starting".to_string()),
                (ConsoleLevel::Warn, "[WARN] slow view manager/Home".to_string()),
                (ConsoleLevel::Debug, "[DEBUG] cache miss".to_string()),
                (ConsoleLevel::Error, "[ERROR] load failed".to_string()),
            ]
        );
    }

    #[test]
    fn production_only_emits_errors() {
        let (logger, sink) = capture(false);
        log_all(&logger);
        assert_eq!(
            sink.entries(),
            vec![(ConsoleLevel::Error, "[ERROR] load failed".to_string())]
        );
    }

    #[test]
    fn error_is_emitted_exactly_once() {
        for development in [true, false] {
            let (logger, sink) = capture(development);
            logger.error("boom");
            assert_eq!(sink.entries().len(), 1);
        }
    }

    #[test]
    fn mode_is_reported() {
        assert!(capture(true).0.is_development());
        assert!(!capture(false).0.is_development());
        assert_eq!(ConsoleLogger::for_build().is_development(), cfg!(debug_assertions));
    }
}
