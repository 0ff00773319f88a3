//! Resume Relevance CLI entry point
//!
//! Loads the configuration exactly as the application does at startup,
//! including the credential warning, then runs one inspection command.

mod args;
mod commands;

use clap::Parser;
use resume_relevance_core::{Config, ConfigResult, ConsoleLogger, Logger};

use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> ConfigResult<()> {
    let logger = startup_logger(cli.verbose);
    let config = Config::startup(&cli.root, &cli.secrets, &logger);
    logger.debug(&format!("{:?}", config));

    let output = match &cli.command {
        Commands::Show(args) => commands::show(&config, args)?,
        Commands::Check => commands::check(&config),
        Commands::Paths => commands::paths(&config),
        Commands::Stores => commands::stores(),
    };
    print!("{}", output);
    Ok(())
}

/// Console logger for the CLI; stdout carries only command output
fn startup_logger(verbose: bool) -> ConsoleLogger {
    ConsoleLogger::new().verbose(verbose).warnings_to_stderr(true)
}
