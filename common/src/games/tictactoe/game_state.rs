use super::board::Board;
use super::types::{GameStatus, Mark, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub winning_line: Option<WinningLine>,
    pub last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            winning_line: None,
            last_move: None,
        }
    }

    /// Places the current mark and evaluates the board. The turn passes to
    /// the other mark only while the game is still in progress.
    pub fn place_mark(&mut self, index: usize) -> Result<GameStatus, String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        self.board.place_mark(index, self.current_mark)?;
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(self.status)
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        self.status = evaluate(&self.board);
        self.winning_line = check_win_with_line(&self.board);
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        self.last_move = None;
    }
}
