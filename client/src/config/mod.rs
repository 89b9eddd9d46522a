mod ai_config;
mod config;

pub use ai_config::AiConfig;
pub use config::{Config, get_config_manager};
