use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

/// A logger that writes to stdout, stamping each line with the time
/// elapsed since the logger first ran.
pub struct StdoutLogger;

static START: OnceLock<Instant> = OnceLock::new();

fn elapsed_seconds() -> f64 {
    START.get_or_init(Instant::now).elapsed().as_secs_f64()
}

/// Format a log record as `ELAPSED [LEVEL] target: message`.
pub fn format_record(record: &Record) -> String {
    format!(
        "{:9.3} [{}] {}: {}",
        elapsed_seconds(),
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for StdoutLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        println!("{}", format_record(record));
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

/// Initialize the global logger with StdoutLogger
///
/// Sets the max level based on build mode:
/// - Debug builds: LevelFilter::Debug (all levels active)
/// - Release builds: LevelFilter::Info (Debug suppressed)
///
/// This can only be called once per process. Subsequent calls are silently ignored.
pub fn init_stdout_logger() {
    static LOGGER: StdoutLogger = StdoutLogger;

    let max_level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(max_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_seconds_monotonic() {
        let a = elapsed_seconds();
        let b = elapsed_seconds();
        assert!(b >= a);
    }

    #[test]
    fn test_format_record_structure() {
        let record = log::RecordBuilder::new()
            .level(log::Level::Warn)
            .target("fovea_test")
            .args(format_args!("channel count looks odd"))
            .build();

        let line = format_record(&record);
        assert!(line.contains("[WARN]"));
        assert!(line.contains("fovea_test:"));
        assert!(line.ends_with("channel count looks odd"));
    }

    #[test]
    fn test_format_record_pads_elapsed() {
        let record = log::RecordBuilder::new()
            .level(log::Level::Info)
            .target("t")
            .args(format_args!("m"))
            .build();

        // "%9.3f" keeps short uptimes right-aligned in a 9-char column
        let line = format_record(&record);
        let stamp = line.split(" [").next().unwrap();
        assert!(stamp.len() >= 9);
        assert!(stamp.trim_start().parse::<f64>().is_ok());
    }
}
