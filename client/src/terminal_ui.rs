use std::io::{self, Write};

use tictactoe_common::games::tictactoe::{BOARD_SIZE, GameMode, GameStatus, SessionPhase, TicTacToeSession};

pub const TITLE: &str = "Tic-Tac-Toe";

pub trait GameRenderer {
    fn render(&mut self, session: &TicTacToeSession) -> io::Result<()>;
    fn show_message(&mut self, message: &str) -> io::Result<()>;
}

pub fn board_text(session: &TicTacToeSession) -> String {
    let winning_line = session.winning_line();
    let rows: Vec<String> = session
        .board()
        .cells()
        .chunks(BOARD_SIZE)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, mark)| {
                    let index = row * BOARD_SIZE + col;
                    let symbol = mark
                        .symbol()
                        .unwrap_or_else(|| char::from_digit(index as u32 + 1, 10).unwrap_or('?'));
                    if winning_line.is_some_and(|line| line.contains(index)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

pub fn status_text(session: &TicTacToeSession) -> String {
    match session.phase() {
        SessionPhase::AwaitingMode => TITLE.to_string(),
        SessionPhase::AwaitingAi => "AI is thinking...".to_string(),
        SessionPhase::InProgress => {
            let mark = session.current_mark().symbol().unwrap_or('?');
            match session.mode() {
                Some(GameMode::VsAi) => format!("Your move ({})", mark),
                _ => format!("Player {}'s turn", mark),
            }
        }
        SessionPhase::Finished(GameStatus::Draw) => "It's a Draw!".to_string(),
        SessionPhase::Finished(status) => match status.winner().and_then(|mark| mark.symbol()) {
            Some(symbol) => format!("Player {} Wins!", symbol),
            None => TITLE.to_string(),
        },
    }
}

pub fn menu_text() -> String {
    format!(
        "{}\n  1) Two players\n  2) Play against the AI\nChoose a mode (q to quit):",
        TITLE
    )
}

pub fn help_text() -> String {
    [
        "1-9    place a mark on that cell",
        "r      restart the current game",
        "m      back to mode selection",
        "q      quit",
    ]
    .join("\n")
}

pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GameRenderer for TerminalRenderer<W> {
    fn render(&mut self, session: &TicTacToeSession) -> io::Result<()> {
        if session.phase() == SessionPhase::AwaitingMode {
            writeln!(self.out, "\n{}", menu_text())?;
            return self.out.flush();
        }

        writeln!(self.out, "\n{}\n", board_text(session))?;
        writeln!(self.out, "{}", status_text(session))?;
        if !session.is_active() {
            writeln!(self.out, "r to play again, m for the menu, q to quit")?;
        }
        self.out.flush()
    }

    fn show_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()
    }
}
