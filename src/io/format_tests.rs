use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::io::format::{cartmoments_error, cartmoments_warn, nice_bool};

/// A logger that keeps every record it receives as `(level, target, message)`.
struct RecordingLogger {
    records: Mutex<Vec<(Level, String, String)>>,
}

impl Log for RecordingLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((
                record.level(),
                record.target().to_string(),
                record.args().to_string(),
            ));
        }
    }

    fn flush(&self) {}
}

static LOGGER: RecordingLogger = RecordingLogger {
    records: Mutex::new(Vec::new()),
};

#[test]
fn test_io_format_error_logged_once() {
    // A logger can only be installed once per process.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);

    cartmoments_error!("Moment rotation failed on site {}.", 271828);
    cartmoments_warn!("Suspicious transformation matrix {}.", 314159);

    let records = LOGGER.records.lock().unwrap();
    let errors = records
        .iter()
        .filter(|(_, _, msg)| msg == "Moment rotation failed on site 271828.")
        .collect::<Vec<_>>();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].0, Level::Error);
    assert_eq!(errors[0].1, "cartmoments-output");

    let warnings = records
        .iter()
        .filter(|(_, _, msg)| msg == "Suspicious transformation matrix 314159.")
        .collect::<Vec<_>>();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].0, Level::Warn);
    assert_eq!(warnings[0].1, "cartmoments-output");
}

#[test]
fn test_io_format_nice_bool() {
    assert_eq!(nice_bool(true), "yes");
    assert_eq!(nice_bool(false), "no");
}
