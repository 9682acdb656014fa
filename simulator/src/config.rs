use std::path::Path;

use serde::{Deserialize, Serialize};
use tictactoe_engine::BotType;

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_simulator_config.yaml";

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ReportConfig {
    pub save: bool,
    pub location: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SimulatorConfig {
    pub games: u32,
    pub x_bot: BotType,
    pub o_bot: BotType,
    #[serde(default)]
    pub random_opening: bool,
    #[serde(default)]
    pub show_boards: bool,
    pub reports: ReportConfig,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            games: 10,
            x_bot: BotType::Minimax,
            o_bot: BotType::Minimax,
            random_opening: false,
            show_boards: false,
            reports: ReportConfig {
                save: false,
                location: "reports".to_string(),
            },
        }
    }
}

impl Validate for SimulatorConfig {
    fn validate(&self) -> Result<(), String> {
        if self.games < 1 {
            return Err("Game count must be at least 1".to_string());
        }
        if self.games > 10_000 {
            return Err("Game count must not exceed 10000".to_string());
        }
        if self.reports.save && self.reports.location.is_empty() {
            return Err("Report location must not be empty when saving is enabled".to_string());
        }
        Ok(())
    }
}

/// Missing config file is not an error; the defaults apply.
pub fn load_config(path: &str) -> Result<SimulatorConfig, String> {
    if !Path::new(path).exists() {
        return Ok(SimulatorConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file {}: {}", path, e))?;

    let config: SimulatorConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to parse config file {}: {}", path, e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!(
            "temp_tictactoe_simulator_config_{}.yaml",
            random_number
        ));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulatorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let config = SimulatorConfig::default();
        let serialized = serde_yaml_ng::to_string(&config).unwrap();
        let deserialized: SimulatorConfig = serde_yaml_ng::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_config("no_such_config_file.yaml").unwrap();
        assert_eq!(config, SimulatorConfig::default());
    }

    #[test]
    fn test_config_loads_from_file() {
        let file_path = get_temp_file_path();
        let config = SimulatorConfig {
            games: 25,
            x_bot: BotType::Random,
            ..SimulatorConfig::default()
        };

        std::fs::write(&file_path, serde_yaml_ng::to_string(&config).unwrap()).unwrap();
        let loaded = load_config(&file_path);
        std::fs::remove_file(&file_path).unwrap();

        assert_eq!(loaded.unwrap(), config);
    }

    #[test]
    fn test_zero_games_fails_validation() {
        let config = SimulatorConfig {
            games: 0,
            ..SimulatorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_saving_without_location_fails_validation() {
        let config = SimulatorConfig {
            reports: ReportConfig {
                save: true,
                location: String::new(),
            },
            ..SimulatorConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
