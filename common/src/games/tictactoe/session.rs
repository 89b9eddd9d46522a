use crate::log;
use super::board::Board;
use super::bot_controller::calculate_minimax_move;
use super::game_state::TicTacToeGameState;
use super::types::{GameMode, GameStatus, Mark, WinningLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingMode,
    InProgress,
    AwaitingAi,
    Finished(GameStatus),
}

/// One play-through from mode selection to a result, restartable with
/// [`TicTacToeSession::reset`]. Invalid requests are ignored rather than
/// reported, so a stray click can never break the game.
#[derive(Debug, Clone, Default)]
pub struct TicTacToeSession {
    mode: Option<GameMode>,
    game_state: TicTacToeGameState,
    awaiting_ai: bool,
    game_number: u64,
}

impl TicTacToeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_mode(&mut self, mode: GameMode) {
        self.mode = Some(mode);
        self.restart();
        log!("[game:{}] Started in {:?} mode", self.game_number, mode);
    }

    pub fn reset(&mut self) {
        if self.mode.is_none() {
            return;
        }
        self.restart();
        log!("[game:{}] Board reset", self.game_number);
    }

    fn restart(&mut self) {
        self.game_state.reset();
        self.awaiting_ai = false;
        self.game_number += 1;
    }

    /// Human move followed, in vs-AI mode, by the AI's reply.
    pub fn attempt_move(&mut self, index: usize) -> bool {
        if !self.place_human_mark(index) {
            return false;
        }
        if self.awaiting_ai {
            self.play_ai_turn();
        }
        true
    }

    /// Applies a human move only. In vs-AI mode a move that doesn't end the
    /// game leaves the session waiting for [`Self::play_ai_turn`].
    pub fn place_human_mark(&mut self, index: usize) -> bool {
        let Some(mode) = self.mode else {
            return false;
        };

        if self.awaiting_ai {
            log!("[game:{}] Ignoring move at {} while the AI is thinking", self.game_number, index);
            return false;
        }

        let mark = self.game_state.current_mark;
        match self.game_state.place_mark(index) {
            Ok(status) => {
                log!("[game:{}] {:?} placed at {}", self.game_number, mark, index);
                if status.is_terminal() {
                    self.log_result();
                } else if mode.is_vs_ai() {
                    self.awaiting_ai = true;
                }
                true
            }
            Err(e) => {
                log!("[game:{}] Rejected move at {}: {}", self.game_number, index, e);
                false
            }
        }
    }

    pub fn play_ai_turn(&mut self) -> Option<usize> {
        if !self.awaiting_ai {
            return None;
        }
        self.awaiting_ai = false;

        let Some(bot_move) = calculate_minimax_move(&self.game_state.board, Mark::O) else {
            debug_assert!(false, "AI asked to move on a finished board");
            log!("[game:{}] AI has no move available", self.game_number);
            return None;
        };

        match self.game_state.place_mark(bot_move.index) {
            Ok(status) => {
                log!(
                    "[game:{}] AI placed O at {} (score {}, {} positions searched)",
                    self.game_number, bot_move.index, bot_move.score, bot_move.nodes
                );
                if status.is_terminal() {
                    self.log_result();
                }
                Some(bot_move.index)
            }
            Err(e) => {
                log!("[game:{}] AI failed to place mark at {}: {}", self.game_number, bot_move.index, e);
                None
            }
        }
    }

    fn log_result(&self) {
        match self.game_state.status.winner() {
            Some(mark) => log!("[game:{}] {:?} wins", self.game_number, mark),
            None => log!("[game:{}] Draw", self.game_number),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.mode.is_none() {
            SessionPhase::AwaitingMode
        } else if self.game_state.is_over() {
            SessionPhase::Finished(self.game_state.status)
        } else if self.awaiting_ai {
            SessionPhase::AwaitingAi
        } else {
            SessionPhase::InProgress
        }
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn board(&self) -> &Board {
        &self.game_state.board
    }

    pub fn status(&self) -> GameStatus {
        self.game_state.status
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.game_state.winning_line
    }

    pub fn current_mark(&self) -> Mark {
        self.game_state.current_mark
    }

    pub fn last_move(&self) -> Option<usize> {
        self.game_state.last_move
    }

    pub fn is_active(&self) -> bool {
        self.mode.is_some() && !self.game_state.is_over()
    }

    pub fn is_awaiting_ai(&self) -> bool {
        self.awaiting_ai
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(mode: GameMode) -> TicTacToeSession {
        let mut session = TicTacToeSession::new();
        session.select_mode(mode);
        session
    }

    #[test]
    fn test_moves_ignored_before_mode_selection() {
        let mut session = TicTacToeSession::new();
        assert_eq!(session.phase(), SessionPhase::AwaitingMode);
        assert!(!session.is_active());
        assert!(!session.attempt_move(4));
        session.reset();
        assert_eq!(session.phase(), SessionPhase::AwaitingMode);
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn test_select_mode_starts_with_x() {
        let session = session(GameMode::TwoPlayer);
        assert_eq!(session.phase(), SessionPhase::InProgress);
        assert!(session.is_active());
        assert_eq!(session.current_mark(), Mark::X);
        assert_eq!(session.mode(), Some(GameMode::TwoPlayer));
    }

    #[test]
    fn test_two_player_alternates_and_reports_win() {
        let mut session = session(GameMode::TwoPlayer);
        for index in [0, 4, 1, 7] {
            assert!(session.attempt_move(index));
        }
        assert_eq!(session.current_mark(), Mark::X);
        assert!(session.attempt_move(2));

        assert_eq!(session.phase(), SessionPhase::Finished(GameStatus::XWon));
        assert_eq!(session.winning_line().map(|l| l.cells), Some([0, 1, 2]));
        assert!(!session.is_active());
        assert!(!session.attempt_move(8));
        assert!(session.board().is_cell_empty(8));
    }

    #[test]
    fn test_occupied_cell_is_noop() {
        let mut session = session(GameMode::TwoPlayer);
        assert!(session.attempt_move(4));
        let before = *session.board();
        assert!(!session.attempt_move(4));
        assert!(!session.attempt_move(9));
        assert_eq!(session.board(), &before);
        assert_eq!(session.current_mark(), Mark::O);
    }

    #[test]
    fn test_vs_ai_replies_immediately() {
        let mut session = session(GameMode::VsAi);
        assert!(session.attempt_move(0));

        assert_eq!(session.board().get(4), Some(Mark::O));
        assert_eq!(session.last_move(), Some(4));
        assert_eq!(session.current_mark(), Mark::X);
        assert_eq!(session.phase(), SessionPhase::InProgress);
    }

    #[test]
    fn test_vs_ai_split_turn_ignores_moves_while_waiting() {
        let mut session = session(GameMode::VsAi);
        assert!(session.place_human_mark(0));
        assert_eq!(session.phase(), SessionPhase::AwaitingAi);
        assert!(session.is_active());

        assert!(!session.place_human_mark(8));
        assert!(!session.attempt_move(8));
        assert!(session.board().is_cell_empty(8));

        assert_eq!(session.play_ai_turn(), Some(4));
        assert_eq!(session.play_ai_turn(), None);
        assert_eq!(session.board().count(Mark::O), 1);
    }

    #[test]
    fn test_ai_blocks_in_session() {
        let mut session = session(GameMode::VsAi);
        assert!(session.attempt_move(0));
        assert_eq!(session.board().get(4), Some(Mark::O));
        assert!(session.attempt_move(1));
        assert_eq!(session.board().get(2), Some(Mark::O));
    }

    #[test]
    fn test_ai_session_never_lost_by_ai() {
        let mut session = session(GameMode::VsAi);
        // X plays the lowest free cell every turn.
        while session.is_active() {
            let index = session.board().available_moves()[0];
            assert!(session.attempt_move(index));
        }
        assert_ne!(session.status(), GameStatus::XWon);
    }

    #[test]
    fn test_reset_during_ai_wait_cancels_reply() {
        let mut session = session(GameMode::VsAi);
        assert!(session.place_human_mark(0));
        session.reset();

        assert!(!session.is_awaiting_ai());
        assert_eq!(session.play_ai_turn(), None);
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        for mode in [GameMode::TwoPlayer, GameMode::VsAi] {
            let mut session = session(mode);
            for index in [0, 1, 3, 6] {
                session.attempt_move(index);
            }
            session.reset();

            assert_eq!(session.board(), &Board::new());
            assert_eq!(session.current_mark(), Mark::X);
            assert!(session.is_active());
            assert_eq!(session.winning_line(), None);
            assert_eq!(session.status(), GameStatus::InProgress);
            assert_eq!(session.mode(), Some(mode));
        }
    }
}
