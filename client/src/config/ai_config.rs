use tictactoe_common::config::Validate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const MAX_AI_MOVE_DELAY_MS: u64 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct AiConfig {
    pub move_delay_ms: u64,
}

impl AiConfig {
    pub fn move_delay(&self) -> Duration {
        Duration::from_millis(self.move_delay_ms)
    }
}

impl Validate for AiConfig {
    fn validate(&self) -> Result<(), String> {
        if self.move_delay_ms > MAX_AI_MOVE_DELAY_MS {
            return Err(format!(
                "ai.move_delay_ms must not exceed {} (got {})",
                MAX_AI_MOVE_DELAY_MS, self.move_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self { move_delay_ms: 500 }
    }
}
