mod board;
mod bot_controller;
mod game_state;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotMove, calculate_minimax_move, select_ai_move};
pub use game_state::TicTacToeGameState;
pub use session::{SessionPhase, TicTacToeSession};
pub use types::{BOARD_SIZE, CELL_COUNT, GameMode, GameStatus, Mark, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, evaluate};
