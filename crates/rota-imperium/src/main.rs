pub mod commands;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use commands::Commands;
use rota_orchestrator::Orchestrator;
use rota_orchestrator::logging;
use rota_orchestrator::logging::LogLevel;

#[derive(Parser)]
#[command(name = "rota", author, version, about, long_about = None)]
pub struct Cli
{
    /// Overrides the TRACING_LEVEL of the log file
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,
    /// Print reports as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Main function of the rota command line tool
fn main()
{
    let cli = Cli::parse();

    if let Err(error) = run(cli) {
        eprintln!("{}", format!("{:?}", error).bright_red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()>
{
    // The .env file is optional, every variable has a default.
    dotenvy::dotenv().ok();

    let (log_handles, _guard) =
        logging::setup_logging(&logging::log_dir()).context("Logging could not be set up")?;
    if let Some(log_level) = cli.log_level {
        log_handles.set_level(log_level)?;
    }

    let orchestrator = Orchestrator::from_configuration_file()?;

    let output = commands::handle_command(cli.command, &orchestrator, cli.json)?;
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests
{
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition()
    {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand()
    {
        let cli = Cli::try_parse_from(["rota", "schedule", "--json", "--log-level", "debug"]).unwrap();

        assert!(cli.json);
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert!(matches!(cli.command, Commands::Schedule { .. }));
    }
}
