//! Command-line interface.

use std::path::PathBuf;

use anyhow::{self, format_err};
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::io::format::cartmoments_output;
use crate::moments::rotation_rules::LMAX_TABULATED;


const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// Logs a nicely formatted heading to the `cartmoments-output` logger.
pub fn log_heading() {
    let version = if let Some(ver) = VERSION {
        format!("v{ver}")
    } else {
        "v unknown".to_string()
    };
    let bar = "─".repeat(101);
    cartmoments_output!("╭{bar}╮");
    cartmoments_output!("│ {:<99} │", "");
    cartmoments_output!(
        "│ {:<99} │",
        "cartmoments: enumeration and rotation of Cartesian multipole moments"
    );
    cartmoments_output!(
        "│ {:<99} │",
        format!("Rotation rules tabulated up to l = {LMAX_TABULATED}")
    );
    cartmoments_output!("│ {version:>99} │");
    cartmoments_output!("╰{bar}╯");
    cartmoments_output!("");
}

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the YAML input file.
    #[arg(short, long)]
    pub config: PathBuf,

    /// Path to the output file. If not given, output is written to the console.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a `log4rs` YAML configuration file. If given, this overrides `--output` and
    /// `--verbose`.
    #[arg(long)]
    pub log_config: Option<PathBuf>,

    /// Increases the verbosity of diagnostic logging. May be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Returns the level of diagnostic logging requested on the command line.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Builds the `log4rs` configuration requested on the command line. Main outputs go to the
    /// `cartmoments-output` logger, which writes to [`Self::output`] if given and to the console
    /// otherwise. Diagnostic messages always go to the console.
    pub fn build_log_config(&self) -> Result<Config, anyhow::Error> {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new("{h({l})}: {m}{n}")))
            .build();
        let output_appender = if let Some(output) = self.output.as_ref() {
            Appender::builder().build(
                "output",
                Box::new(
                    FileAppender::builder()
                        .encoder(Box::new(PatternEncoder::new("{m}{n}")))
                        .append(false)
                        .build(output)?,
                ),
            )
        } else {
            Appender::builder().build(
                "output",
                Box::new(
                    ConsoleAppender::builder()
                        .encoder(Box::new(PatternEncoder::new("{m}{n}")))
                        .build(),
                ),
            )
        };
        Config::builder()
            .appender(Appender::builder().build("stdout", Box::new(stdout)))
            .appender(output_appender)
            .logger(
                Logger::builder()
                    .appender("output")
                    .additive(false)
                    .build("cartmoments-output", LevelFilter::Info),
            )
            .build(Root::builder().appender("stdout").build(self.log_level()))
            .map_err(|err| format_err!(err))
    }

    /// Initialises logging as requested on the command line.
    pub fn init_logging(&self) -> Result<(), anyhow::Error> {
        if let Some(log_config) = self.log_config.as_ref() {
            log4rs::init_file(log_config, Default::default()).map_err(|err| format_err!(err))
        } else {
            log4rs::init_config(self.build_log_config()?)
                .map(|_| ())
                .map_err(|err| format_err!(err))
        }
    }
}
