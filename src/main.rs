use anyhow;
use clap::Parser;

use cartmoments::interfaces::cli::{log_heading, Cli};
use cartmoments::interfaces::input::Input;
use cartmoments::interfaces::InputHandle;
use cartmoments::io::read_cartmoments_yaml;

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    cli.init_logging()?;
    log_heading();

    let input = read_cartmoments_yaml::<Input, _>(&cli.config)?;
    input.handle()
}
