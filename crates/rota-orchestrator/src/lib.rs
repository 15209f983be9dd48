pub mod csv_files;
pub mod logging;
pub mod sample_data;

use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use rota_configuration::SystemConfigurations;
use rota_configuration::sample_generation::SampleGeneration;
use rota_scheduling_environment::Intervals;
use rota_sweep_scheduler::ScheduleResult;
use rota_sweep_scheduler::SweepScheduler;
use rota_sweep_scheduler::assert_functions::assert_no_conflicts;
use rota_sweep_scheduler::assert_functions::assert_optimal;
use rota_sweep_scheduler::overlap_depth;
use serde::Serialize;
use tracing::Level;
use tracing::event;
use tracing::instrument;

/// Collaborator around the sweep scheduler. It sources the intervals,
/// runs the scheduler, checks the result and persists it.
pub struct Orchestrator
{
    pub system_configurations: SystemConfigurations,
    sweep_scheduler: SweepScheduler,
}

#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct ScheduleReport
{
    pub number_of_intervals: usize,
    pub worker_count: usize,
    pub overlap_depth: usize,
    pub intervals_path: PathBuf,
    pub schedule_path: PathBuf,
}

impl fmt::Display for ScheduleReport
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        writeln!(f, "intervals:     {}", self.number_of_intervals)?;
        writeln!(f, "workers:       {}", self.worker_count)?;
        writeln!(f, "overlap depth: {}", self.overlap_depth)?;
        write!(f, "schedule:      {}", self.schedule_path.display())
    }
}

impl Orchestrator
{
    pub fn new(system_configurations: SystemConfigurations) -> Self
    {
        let sweep_scheduler = SweepScheduler::new(system_configurations.scheduling);
        Self {
            system_configurations,
            sweep_scheduler,
        }
    }

    pub fn from_configuration_file() -> Result<Self>
    {
        let system_configurations = SystemConfigurations::read_all_configs()
            .context("SystemConfigurations could not be read")?;
        Ok(Self::new(system_configurations))
    }

    /// Writes a fresh set of random intervals to `intervals_path`.
    #[instrument(level = "info", skip(self))]
    pub fn generate_intervals(
        &self,
        sample_generation: &SampleGeneration,
        intervals_path: &Path,
    ) -> Result<Intervals>
    {
        let intervals = sample_data::generate_intervals(sample_generation)?;
        csv_files::write_intervals(intervals_path, &intervals).with_context(|| {
            format!(
                "Sample intervals could not be written to {}",
                intervals_path.display()
            )
        })?;

        event!(
            Level::INFO,
            number_of_intervals = intervals.len(),
            "sample intervals written"
        );
        Ok(intervals)
    }

    /// Reads the interval file, generating it from the configured sample
    /// parameters first if it does not exist.
    #[instrument(level = "info", skip(self))]
    pub fn load_intervals(&self, intervals_path: &Path) -> Result<Intervals>
    {
        if !intervals_path.exists() {
            event!(
                Level::WARN,
                intervals_path = %intervals_path.display(),
                "interval file is missing, generating sample data"
            );
            return self.generate_intervals(
                &self.system_configurations.sample_generation,
                intervals_path,
            );
        }

        csv_files::read_intervals(intervals_path)
    }

    /// Computes and validates a schedule without touching the file system.
    #[instrument(level = "info", skip_all, fields(intervals = intervals.len()))]
    pub fn compute_schedule(&self, intervals: &Intervals) -> Result<ScheduleResult>
    {
        let schedule_result = self
            .sweep_scheduler
            .compute_schedule(intervals)
            .context("The sweep scheduler rejected the intervals")?;

        assert_no_conflicts(intervals, &schedule_result)?;
        assert_optimal(intervals, &schedule_result)?;

        event!(
            Level::INFO,
            workers = schedule_result.worker_count(),
            "schedule computed"
        );
        Ok(schedule_result)
    }

    /// Full pipeline: load intervals, schedule, store the result.
    pub fn schedule(&self, intervals_path: &Path, schedule_path: &Path) -> Result<ScheduleReport>
    {
        let intervals = self.load_intervals(intervals_path)?;

        let schedule_result = self.compute_schedule(&intervals)?;

        csv_files::write_schedule(schedule_path, &schedule_result).with_context(|| {
            format!(
                "The schedule could not be stored in {}",
                schedule_path.display()
            )
        })?;

        Ok(ScheduleReport {
            number_of_intervals: intervals.len(),
            worker_count: schedule_result.worker_count(),
            overlap_depth: overlap_depth(&intervals),
            intervals_path: intervals_path.to_path_buf(),
            schedule_path: schedule_path.to_path_buf(),
        })
    }

    /// Number of distinct workers in a stored schedule.
    #[instrument(level = "info", skip(self))]
    pub fn count_workers(&self, schedule_path: &Path) -> Result<usize>
    {
        let schedule_result = csv_files::read_schedule(schedule_path)?;
        Ok(schedule_result.worker_count())
    }
}
