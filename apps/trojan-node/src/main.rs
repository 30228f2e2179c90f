use trojan_node::cli::{Cli, run};
use trojan_node::error::NodeError;
use trojan_node::logger::{initialize as LoggerInitialize, level_filter};

use std::process::ExitCode;

use clap::Parser;
use log::info;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The logger may not be up yet if the config failed to load
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<(), NodeError> {
    let config = cli.load_config()?;

    // Initialize logger FIRST, everything after this is recorded
    LoggerInitialize(level_filter(config.log.level), config.log.file.as_deref())?;
    info!("trojan-node starting");

    if let Some(output) = run(&cli.command, &config)? {
        println!("{output}");
    }

    Ok(())
}
