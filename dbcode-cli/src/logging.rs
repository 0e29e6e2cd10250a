use chrono::{DateTime, Local};
use log::{LevelFilter, Metadata, Record, SetLoggerError};

use crate::PROGRESS_BAR;

const LIBRARY_TARGET: &str = "dbcode::";

/// Prints log records on the standard error, above the progress spinner.
struct SpinnerLogger;

impl log::Log for SpinnerLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            PROGRESS_BAR.println(format_record(record, Local::now()));
        }
    }

    fn flush(&self) {}
}

/// `<time> <LEVEL> <module>: <message>`, with the library prefix stripped
/// from the module path.
fn format_record(record: &Record, time: DateTime<Local>) -> String {
    let target = record.target();
    let module = target.strip_prefix(LIBRARY_TARGET).unwrap_or(target);

    format!(
        "{} {:<5} {}: {}",
        time.format("%H:%M:%S%.3f"),
        record.level(),
        module,
        record.args()
    )
}

static LOGGER: SpinnerLogger = SpinnerLogger;

pub fn init_logging(filter: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(filter);

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};
    use log::{Level, Record};

    use crate::logging::format_record;

    #[test]
    fn test_format_record() {
        let time = Local.ymd(2022, 9, 1).and_hms_milli(13, 5, 7, 42);
        let line = format_record(
            &Record::builder()
                .level(Level::Warn)
                .target("dbcode::codon")
                .args(format_args!("2 codon(s) could not be mapped"))
                .build(),
            time,
        );

        assert_eq!(line, "13:05:07.042 WARN  codon: 2 codon(s) could not be mapped");
    }

    #[test]
    fn test_format_record_foreign_target() {
        let time = Local.ymd(2022, 9, 1).and_hms(0, 0, 0);
        let line = format_record(
            &Record::builder()
                .level(Level::Info)
                .target("dbcode")
                .args(format_args!("Output file: -"))
                .build(),
            time,
        );

        assert_eq!(line, "00:00:00.000 INFO  dbcode: Output file: -");
    }
}
