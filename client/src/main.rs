mod config;
mod input;
mod runner;
mod state;
mod terminal_ui;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::{GameMode, TicTacToeSession};
use tictactoe_common::{log, logger};

use config::{AiConfig, Config, get_config_manager};
use runner::GameRunner;
use terminal_ui::TerminalRenderer;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    TwoPlayer,
    VsAi,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::TwoPlayer => GameMode::TwoPlayer,
            ModeArg::VsAi => GameMode::VsAi,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe for two players or against an unbeatable AI")]
struct Args {
    /// Skip the menu and start in this mode
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Pause before the AI replies, in milliseconds
    #[arg(long)]
    ai_delay_ms: Option<u64>,

    /// Config file (defaults to tictactoe_client.yaml next to the executable)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save the effective settings back to the config file
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn effective_config(args: &Args, loaded: Config) -> Result<Config, String> {
    let mut config = loaded;
    if let Some(mode) = args.mode {
        config.default_mode = Some(mode.into());
    }
    if let Some(delay_ms) = args.ai_delay_ms {
        config.ai = AiConfig { move_delay_ms: delay_ms };
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.clone());
    let loaded = config_manager.get_config().unwrap_or_else(|e| {
        eprintln!("{}; using default settings", e);
        Config::default()
    });
    let config = effective_config(&args, loaded)?;

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, config.logging);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved");
    }

    let mut session = TicTacToeSession::new();
    if let Some(mode) = config.default_mode {
        session.select_mode(mode);
    }

    let mut input_rx = input::spawn_stdin_reader();
    let renderer = TerminalRenderer::new(std::io::stdout());
    let runner = GameRunner::new(session, renderer, config.ai.move_delay());

    let (session, _) = runner.run(&mut input_rx).await?;
    log!("Exiting in phase {:?}", session.phase());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let args = Args::parse_from(["tictactoe", "--mode", "vs-ai", "--ai-delay-ms", "0"]);
        let config = effective_config(&args, Config::default()).unwrap();
        assert_eq!(config.default_mode, Some(GameMode::VsAi));
        assert_eq!(config.ai.move_delay_ms, 0);
    }

    #[test]
    fn test_cli_rejects_excessive_delay() {
        let args = Args::parse_from(["tictactoe", "--ai-delay-ms", "999999"]);
        assert!(effective_config(&args, Config::default()).is_err());
    }

    #[test]
    fn test_config_used_without_flags() {
        let args = Args::parse_from(["tictactoe"]);
        let loaded = Config {
            default_mode: Some(GameMode::TwoPlayer),
            ..Config::default()
        };
        let config = effective_config(&args, loaded.clone()).unwrap();
        assert_eq!(config, loaded);
    }
}
