use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_common::games::tictactoe::GameMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::AiConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_client.yaml";

pub fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_logging")]
    pub logging: bool,
    #[serde(default)]
    pub default_mode: Option<GameMode>,
    #[serde(default)]
    pub ai: AiConfig,
}

fn default_logging() -> bool {
    true
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.ai.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: default_logging(),
            default_mode: None,
            ai: AiConfig::default(),
        }
    }
}
