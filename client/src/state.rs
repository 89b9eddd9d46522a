use tictactoe_common::games::tictactoe::{CELL_COUNT, GameMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    SelectMode(GameMode),
    /// Zero-based cell index.
    PlaceMark(usize),
    Reset,
    Menu,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    Menu,
    Game,
}

/// Cells are typed 1-9 in reading order; in the menu the same digits pick a mode.
pub fn parse_command(line: &str, context: InputContext) -> Result<ClientCommand, String> {
    let input = line.trim().to_ascii_lowercase();

    match input.as_str() {
        "q" | "quit" | "exit" => return Ok(ClientCommand::Quit),
        "h" | "help" | "?" => return Ok(ClientCommand::Help),
        "m" | "menu" => return Ok(ClientCommand::Menu),
        _ => {}
    }

    match context {
        InputContext::Menu => match input.as_str() {
            "1" | "two" | "pvp" => Ok(ClientCommand::SelectMode(GameMode::TwoPlayer)),
            "2" | "ai" => Ok(ClientCommand::SelectMode(GameMode::VsAi)),
            _ => Err(format!("Unknown choice '{}': enter 1 or 2", line.trim())),
        },
        InputContext::Game => match input.as_str() {
            "r" | "reset" => Ok(ClientCommand::Reset),
            _ => match input.parse::<usize>() {
                Ok(cell) if (1..=CELL_COUNT).contains(&cell) => Ok(ClientCommand::PlaceMark(cell - 1)),
                _ => Err(format!(
                    "Invalid input '{}': enter a cell between 1 and {}",
                    line.trim(),
                    CELL_COUNT
                )),
            },
        },
    }
}
