use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize YAML config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to parse YAML config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::GameMode;

    #[test]
    fn test_game_mode_uses_snake_case() {
        let serializer = YamlConfigSerializer::new();
        let text = ConfigSerializer::<GameMode>::serialize(&serializer, &GameMode::VsAi).unwrap();
        assert_eq!(text.trim(), "vs_ai");

        let mode: GameMode = serializer.deserialize("two_player").unwrap();
        assert_eq!(mode, GameMode::TwoPlayer);
    }

    #[test]
    fn test_unknown_variant_is_an_error() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<GameMode, String> = serializer.deserialize("online");
        assert!(result.unwrap_err().starts_with("Failed to parse YAML config"));
    }
}
