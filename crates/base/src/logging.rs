use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

/// Environment variable that overrides the default maximum log level.
///
/// Accepts `off`, `error`, `warn`, `info`, `debug` or `trace`.
pub const LOG_LEVEL_ENV: &str = "BODYPOSE_LOG";

/// A logger that writes to stderr, leaving stdout to the program's report.
pub struct StderrLogger {
    start: Instant,
}

impl StderrLogger {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Format a record as `<seconds since start> [LEVEL] file:line - message`
    pub fn format(&self, record: &Record) -> String {
        let elapsed = self.start.elapsed().as_secs_f64();
        let file = record.file().unwrap_or("unknown");
        let line = record.line().unwrap_or(0);
        format!(
            "{:>10.6} [{}] {}:{} - {}",
            elapsed,
            record.level(),
            file,
            line,
            record.args()
        )
    }
}

impl Default for StderrLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}", line);
    }

    fn flush(&self) {
        std::io::stderr().flush().ok();
    }
}

/// Resolve the maximum log level from an optional override value.
///
/// Unparseable or missing values fall back to the build-mode default:
/// Debug for debug builds, Info for release builds.
pub fn max_level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
}

/// Initialize the global logger with StderrLogger
///
/// The max level comes from `BODYPOSE_LOG` when set, otherwise from the build
/// mode. Only the first call per process installs the logger; later calls are
/// ignored.
pub fn init_stderr_logger() {
    static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

    let logger = LOGGER.get_or_init(StderrLogger::new);
    let level = max_level_from(std::env::var(LOG_LEVEL_ENV).ok().as_deref());

    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}
