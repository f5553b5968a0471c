// Configuration Module
// Handles configuration from YAML files and CLI overrides.

use crate::interval::Speed;
use crate::state::SimState;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub readings: ReadingsConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Resolve the configured starting speed
    pub fn speed(&self) -> Result<Speed, ConfigError> {
        self.simulation
            .speed
            .parse()
            .map_err(ConfigError::Validation)
    }

    /// Build the starting readings
    pub fn initial_state(&self) -> SimState {
        SimState::with_readings(
            self.readings.solar_kw,
            self.readings.wind_kw,
            self.readings.battery_pct,
            self.readings.co2_kg,
            self.readings.money_saved,
        )
    }
}

/// Simulation pacing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Starting speed: "slow", "normal" or "fast"
    #[serde(default = "default_speed")]
    pub speed: String,
}

fn default_speed() -> String {
    "normal".to_string()
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            speed: default_speed(),
        }
    }
}

/// Starting readings shown before the first tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingsConfig {
    #[serde(default = "default_solar_kw")]
    pub solar_kw: f64,
    #[serde(default = "default_wind_kw")]
    pub wind_kw: f64,
    #[serde(default = "default_battery_pct")]
    pub battery_pct: f64,
    #[serde(default = "default_co2_kg")]
    pub co2_kg: f64,
    #[serde(default = "default_money_saved")]
    pub money_saved: u64,
}

fn default_solar_kw() -> f64 {
    3.5
}

fn default_wind_kw() -> f64 {
    2.1
}

fn default_battery_pct() -> f64 {
    78.0
}

fn default_co2_kg() -> f64 {
    12.4
}

fn default_money_saved() -> u64 {
    540
}

impl Default for ReadingsConfig {
    fn default() -> Self {
        Self {
            solar_kw: default_solar_kw(),
            wind_kw: default_wind_kw(),
            battery_pct: default_battery_pct(),
            co2_kg: default_co2_kg(),
            money_saved: default_money_saved(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    Io(String),
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.simulation.speed, "normal");
        assert_eq!(config.readings.solar_kw, 3.5);
        assert_eq!(config.readings.wind_kw, 2.1);
        assert_eq!(config.readings.battery_pct, 78.0);
        assert_eq!(config.readings.money_saved, 540);
        assert_eq!(config.speed().unwrap(), Speed::Normal);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
simulation:
  speed: "fast"

readings:
  solar_kw: 5.0
  battery_pct: 40.0
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.speed().unwrap(), Speed::Fast);
        assert_eq!(config.readings.solar_kw, 5.0);
        assert_eq!(config.readings.battery_pct, 40.0);
        // Unspecified fields keep their defaults
        assert_eq!(config.readings.wind_kw, 2.1);
        assert_eq!(config.readings.co2_kg, 12.4);
    }

    #[test]
    fn test_invalid_speed_rejected() {
        let yaml = r#"
simulation:
  speed: "ludicrous"
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert!(matches!(config.speed(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_initial_state_from_readings() {
        let yaml = r#"
readings:
  solar_kw: 1.0
  wind_kw: 2.0
  battery_pct: 120.0
"#;
        let config = Config::from_yaml(yaml).unwrap();
        let state = config.initial_state();
        assert_eq!(state.solar_kw, 1.0);
        assert_eq!(state.wind_kw, 2.0);
        // Out-of-range readings are clamped on entry
        assert_eq!(state.battery_pct, 100.0);
    }
}
