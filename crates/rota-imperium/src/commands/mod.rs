pub mod generate;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use generate::GenerateArgs;
use rota_orchestrator::Orchestrator;
use tracing::Level;
use tracing::event;

#[derive(Subcommand, Debug)]
pub enum Commands
{
    /// Write random sample intervals to a CSV file
    Generate
    {
        #[command(flatten)]
        generate_args: GenerateArgs,
    },
    /// Compute a minimum worker schedule for the intervals in a CSV file
    #[command(visible_alias = "run")]
    Schedule
    {
        /// Interval file (id,start,end). Generated if it does not exist.
        #[arg(long)]
        input: Option<PathBuf>,
        /// Schedule file (interval_id,worker_id). Overwritten.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Count the distinct workers in a stored schedule
    Count
    {
        #[arg(long)]
        schedule: Option<PathBuf>,
    },
}

pub fn handle_command(command: Commands, orchestrator: &Orchestrator, json: bool) -> Result<String>
{
    event!(Level::INFO, command = ?command, "handling command");
    let data_locations = &orchestrator.system_configurations.data_locations;

    match command {
        Commands::Generate { generate_args } => {
            let sample_generation =
                generate_args.sample_generation(&orchestrator.system_configurations.sample_generation);
            let output = generate_args
                .output
                .unwrap_or_else(|| data_locations.intervals.clone());

            let intervals = orchestrator.generate_intervals(&sample_generation, &output)?;

            Ok(format!(
                "Wrote {} intervals to {}",
                intervals.len().to_string().bright_green(),
                output.display()
            ))
        }
        Commands::Schedule { input, output } => {
            let input = input.unwrap_or_else(|| data_locations.intervals.clone());
            let output = output.unwrap_or_else(|| data_locations.schedule.clone());

            let schedule_report = orchestrator.schedule(&input, &output)?;

            if json {
                Ok(serde_json::to_string_pretty(&schedule_report)?)
            } else {
                Ok(format!(
                    "{}\n{}",
                    format!(
                        "{} intervals need {} workers",
                        schedule_report.number_of_intervals,
                        schedule_report.worker_count
                    )
                    .bright_green(),
                    schedule_report
                ))
            }
        }
        Commands::Count { schedule } => {
            let schedule = schedule.unwrap_or_else(|| data_locations.schedule.clone());

            let worker_count = orchestrator.count_workers(&schedule)?;

            if json {
                Ok(serde_json::json!({ "worker_count": worker_count }).to_string())
            } else {
                Ok(format!(
                    "{} workers in {}",
                    worker_count.to_string().bright_green(),
                    schedule.display()
                ))
            }
        }
    }
}
