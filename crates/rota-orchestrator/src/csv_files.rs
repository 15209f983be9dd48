use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use anyhow::ensure;
use rota_scheduling_environment::Interval;
use rota_scheduling_environment::IntervalId;
use rota_scheduling_environment::Intervals;
use rota_scheduling_environment::WorkerId;
use rota_sweep_scheduler::ScheduleResult;
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A row type of one of the CSV files and the collection its rows are
/// gathered into.
pub trait CsvType: DeserializeOwned
{
    type Container: Default;

    fn make_entry(container: &mut Self::Container, value: Self);
}

impl CsvType for Interval
{
    type Container = Vec<Interval>;

    fn make_entry(container: &mut Self::Container, value: Self)
    {
        container.push(value);
    }
}

/// One row of the schedule file, `interval_id,worker_id`.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScheduleCsv
{
    pub interval_id: IntervalId,
    pub worker_id: WorkerId,
}

impl CsvType for ScheduleCsv
{
    type Container = Vec<(IntervalId, WorkerId)>;

    fn make_entry(container: &mut Self::Container, value: Self)
    {
        container.push((value.interval_id, value.worker_id));
    }
}

pub fn populate_csv_structures<C>(file_path: &Path) -> Result<C::Container>
where
    C: CsvType,
{
    let mut reader = csv::Reader::from_path(file_path)
        .with_context(|| format!("Could not open {}", file_path.display()))?;
    let mut container = C::Container::default();
    for (row_number, row) in reader.deserialize().enumerate() {
        let value: C = row.with_context(|| {
            format!(
                "Row {} of {} could not be parsed as {}",
                row_number + 1,
                file_path.display(),
                std::any::type_name::<C>()
            )
        })?;
        C::make_entry(&mut container, value);
    }
    Ok(container)
}

fn write_csv_rows<R, I>(file_path: &Path, rows: I) -> Result<()>
where
    R: Serialize,
    I: IntoIterator<Item = R>,
{
    if let Some(parent) = file_path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Could not create directory {}", parent.display()))?;
    }

    let mut writer = csv::Writer::from_path(file_path)
        .with_context(|| format!("Could not create {}", file_path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .flush()
        .with_context(|| format!("Could not flush {}", file_path.display()))?;
    Ok(())
}

/// Reads an `id,start,end` file. Rows are not validated here, malformed
/// intervals are rejected by the scheduler.
pub fn read_intervals(file_path: &Path) -> Result<Intervals>
{
    Ok(Intervals::new(populate_csv_structures::<Interval>(file_path)?))
}

pub fn write_intervals(file_path: &Path, intervals: &Intervals) -> Result<()>
{
    write_csv_rows(file_path, intervals)
}

/// Reads an `interval_id,worker_id` file. Every interval may appear only once
/// and worker ids start at 1.
pub fn read_schedule(file_path: &Path) -> Result<ScheduleResult>
{
    let rows = populate_csv_structures::<ScheduleCsv>(file_path)?;

    let mut seen = HashSet::with_capacity(rows.len());
    for (row_number, (interval_id, worker_id)) in rows.iter().enumerate() {
        ensure!(
            *worker_id >= WorkerId::FIRST,
            "Row {} of {} assigns interval {} to worker {}, worker ids start at {}",
            row_number + 1,
            file_path.display(),
            interval_id,
            worker_id,
            WorkerId::FIRST
        );
        ensure!(
            seen.insert(*interval_id),
            "Row {} of {} assigns interval {} a second time",
            row_number + 1,
            file_path.display(),
            interval_id
        );
    }

    Ok(rows.into_iter().collect())
}

/// Replaces the file with one row per interval, ordered by interval id.
pub fn write_schedule(file_path: &Path, schedule_result: &ScheduleResult) -> Result<()>
{
    write_csv_rows(
        file_path,
        schedule_result
            .iter()
            .map(|(interval_id, worker_id)| ScheduleCsv {
                interval_id: *interval_id,
                worker_id: *worker_id,
            }),
    )
}
