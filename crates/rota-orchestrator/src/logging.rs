use std::fs;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use tracing::Level;
use tracing::event;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::NonBlocking;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::Registry;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::filter::Filtered;
use tracing_subscriber::fmt::Layer;
use tracing_subscriber::fmt::format::Format;
use tracing_subscriber::fmt::format::Json;
use tracing_subscriber::fmt::format::JsonFields;
use tracing_subscriber::fmt::{self};
use tracing_subscriber::prelude::*;
use tracing_subscriber::reload;
use tracing_subscriber::reload::Handle;

pub const LOG_DIR_VARIABLE: &str = "ROTA_LOG_DIR";
pub const TRACING_LEVEL_VARIABLE: &str = "TRACING_LEVEL";
pub const LOG_FILE_NAME: &str = "rota.developer.log";

type LogLayer =
    Filtered<Layer<Registry, JsonFields, Format<Json>, NonBlocking>, EnvFilter, Registry>;

#[derive(Clone, Debug)]
pub struct LogHandles
{
    pub file_handle: Handle<LogLayer, Registry>,
}

impl LogHandles
{
    pub fn set_level(&self, log_level: LogLevel) -> Result<()>
    {
        self.file_handle
            .modify(|layer| *layer.filter_mut() = EnvFilter::new(log_level.to_level_string()))
            .context("Could not reload the tracing filter")?;

        event!(Level::INFO, level = ?log_level, "log level changed");
        Ok(())
    }
}

#[derive(ValueEnum, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Debug)]
pub enum LogLevel
{
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel
{
    pub fn to_level_string(&self) -> String
    {
        match self {
            LogLevel::Trace => "trace".to_string(),
            LogLevel::Debug => "debug".to_string(),
            LogLevel::Info => "info".to_string(),
            LogLevel::Warn => "warn".to_string(),
            LogLevel::Error => "error".to_string(),
        }
    }
}

/// Log directory from `ROTA_LOG_DIR`, defaulting to `./logging/logs`.
pub fn log_dir() -> PathBuf
{
    dotenvy::var(LOG_DIR_VARIABLE)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./logging/logs"))
}

/// Installs the global subscriber: JSON lines in `<log_dir>/rota.developer.log`
/// filtered by `TRACING_LEVEL`. The log file of the previous run is removed.
///
/// The returned guard has to be kept alive for as long as events should be
/// flushed to the file.
pub fn setup_logging(log_dir: &Path) -> Result<(LogHandles, WorkerGuard)>
{
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Could not create the log directory {}", log_dir.display()))?;

    remove_previous_log_file(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var(TRACING_LEVEL_VARIABLE)
        .from_env_lossy();

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_current_span(true)
        .with_filter(env_filter);

    let (file_layer, file_handle) = reload::Layer::new(file_layer);

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .context("A global tracing subscriber was already installed")?;

    event!(Level::INFO, log_dir = %log_dir.display(), "starting logging");
    Ok((LogHandles { file_handle }, guard))
}

fn remove_previous_log_file(log_dir: &Path) -> Result<()>
{
    let previous_log_file = log_dir.join(LOG_FILE_NAME);
    if previous_log_file.is_file() {
        fs::remove_file(&previous_log_file).with_context(|| {
            format!("Could not remove old log file {}", previous_log_file.display())
        })?;
    }
    Ok(())
}
