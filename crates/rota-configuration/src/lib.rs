pub mod data_locations;
pub mod sample_generation;

use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use anyhow::ensure;
use data_locations::DataLocations;
use rota_sweep_scheduler::SchedulerOptions;
use sample_generation::SampleGeneration;
use serde::Deserialize;
use serde::Serialize;

pub const CONFIGURATION_VARIABLE: &str = "ROTA_CONFIGURATION";
pub const DEFAULT_CONFIGURATION_PATH: &str = "./configuration/rota.toml";

/// Single source of all configuration. It is read once at start up and then
/// handed to the orchestrator, which passes each part to whoever needs it.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
#[serde(default)]
pub struct SystemConfigurations
{
    pub sample_generation: SampleGeneration,
    pub data_locations: DataLocations,
    pub scheduling: SchedulerOptions,
}

impl SystemConfigurations
{
    /// Reads the file named by `ROTA_CONFIGURATION` (from the environment or
    /// the `.env` file), falling back to `./configuration/rota.toml`.
    pub fn read_all_configs() -> Result<SystemConfigurations>
    {
        let configuration_path = dotenvy::var(CONFIGURATION_VARIABLE)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIGURATION_PATH));

        Self::from_path(&configuration_path)
    }

    pub fn from_path(configuration_path: &Path) -> Result<SystemConfigurations>
    {
        let configuration_contents = std::fs::read_to_string(configuration_path)
            .with_context(|| {
                format!(
                    "Could not read the configuration file: {}",
                    configuration_path.display()
                )
            })?;

        Self::from_toml_str(&configuration_contents).with_context(|| {
            format!(
                "Invalid configuration in: {}",
                configuration_path.display()
            )
        })
    }

    pub fn from_toml_str(configuration_contents: &str) -> Result<SystemConfigurations>
    {
        let system_configurations: SystemConfigurations = toml::from_str(configuration_contents)
            .context("Could not parse the configuration TOML")?;

        system_configurations.validate()?;
        Ok(system_configurations)
    }

    pub fn validate(&self) -> Result<()>
    {
        ensure!(
            self.sample_generation.t_min < self.sample_generation.t_max,
            "sample_generation.t_min ({}) has to be smaller than sample_generation.t_max ({})",
            self.sample_generation.t_min,
            self.sample_generation.t_max
        );
        ensure!(
            self.sample_generation.number_of_entries > 0,
            "sample_generation.number_of_entries has to be positive"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_read_full_configuration()
    {
        let contents = r#"
            [sample_generation]
            t_min = 10
            t_max = 20
            number_of_entries = 5
            seed = 42

            [data_locations]
            intervals = "in.csv"
            schedule = "out.csv"

            [scheduling]
            require_non_empty = true
        "#;

        let system_configurations = SystemConfigurations::from_toml_str(contents).unwrap();

        assert_eq!(system_configurations.sample_generation.t_min, 10);
        assert_eq!(system_configurations.sample_generation.t_max, 20);
        assert_eq!(system_configurations.sample_generation.number_of_entries, 5);
        assert_eq!(system_configurations.sample_generation.seed, Some(42));
        assert_eq!(
            system_configurations.data_locations.intervals,
            PathBuf::from("in.csv")
        );
        assert!(system_configurations.scheduling.require_non_empty);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults()
    {
        let system_configurations = SystemConfigurations::from_toml_str("").unwrap();

        assert_eq!(system_configurations, SystemConfigurations::default());
        assert_eq!(system_configurations.sample_generation.t_max, 10_000);
        assert!(!system_configurations.scheduling.require_non_empty);
    }

    #[test]
    fn test_reversed_sample_bounds_are_rejected()
    {
        let contents = r#"
            [sample_generation]
            t_min = 20
            t_max = 20
        "#;

        assert!(SystemConfigurations::from_toml_str(contents).is_err());
    }

    #[test]
    fn test_shipped_configuration_is_valid()
    {
        let configuration_path =
            Path::new(env!("CARGO_MANIFEST_DIR")).join("../../configuration/rota.toml");

        let system_configurations = SystemConfigurations::from_path(&configuration_path).unwrap();

        assert_eq!(system_configurations.sample_generation.number_of_entries, 10_000);
    }
}
