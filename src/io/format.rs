//! Nice output formatting.

use std::fmt;

use log;

#[cfg(test)]
#[path = "format_tests.rs"]
mod format_tests;

const CARTMOMENTS_BANNER_LENGTH: usize = 103;

/// Logs an error to the `cartmoments-output` logger.
macro_rules! cartmoments_error {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::error!(target: "cartmoments-output", $fmt, $($($arg)*)?); }
}

/// Logs a warning to the `cartmoments-output` logger.
macro_rules! cartmoments_warn {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::warn!(target: "cartmoments-output", $fmt, $($($arg)*)?); }
}

/// Logs a main output line to the `cartmoments-output` logger.
macro_rules! cartmoments_output {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::info!(target: "cartmoments-output", $fmt, $($($arg)*)?); }
}

pub(crate) use {cartmoments_error, cartmoments_output, cartmoments_warn};

/// Logs a nicely formatted section title to the `cartmoments-output` logger.
pub(crate) fn log_title(title: &str) {
    let length = title.chars().count().max(CARTMOMENTS_BANNER_LENGTH - 6);
    let bar = "─".repeat(length);
    cartmoments_output!("┌──{bar}──┐");
    cartmoments_output!("│§ {title:^length$} §│");
    cartmoments_output!("└──{bar}──┘");
}

/// Writes a nicely formatted subtitle.
pub(crate) fn write_subtitle(f: &mut fmt::Formatter<'_>, subtitle: &str) -> fmt::Result {
    let length = subtitle.chars().count();
    let bar = "═".repeat(length);
    writeln!(f, "{subtitle}")?;
    writeln!(f, "{bar}")?;
    Ok(())
}

/// Logs a nicely formatted subtitle to the `cartmoments-output` logger.
pub(crate) fn log_subtitle(subtitle: &str) {
    let length = subtitle.chars().count();
    let bar = "═".repeat(length);
    cartmoments_output!("{}", subtitle);
    cartmoments_output!("{}", bar);
}

/// Turns a boolean into a string of `yes` or `no`.
pub(crate) fn nice_bool(b: bool) -> String {
    if b {
        "yes".to_string()
    } else {
        "no".to_string()
    }
}

/// A trait for logging outputs nicely.
pub(crate) trait CartMomentsOutput: fmt::Debug + fmt::Display {
    /// Logs display output nicely.
    fn log_output_display(&self) {
        let lines = self.to_string();
        lines.lines().for_each(|line| {
            cartmoments_output!("{line}");
        })
    }
}

// Blanket implementation
impl<T> CartMomentsOutput for T where T: fmt::Debug + fmt::Display {}
