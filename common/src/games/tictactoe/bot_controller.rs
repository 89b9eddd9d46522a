use super::board::Board;
use super::types::Mark;
use super::win_detector::check_win;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotMove {
    pub index: usize,
    pub score: i32,
    pub nodes: u64,
}

/// Optimal move for O, the side the AI always plays.
pub fn select_ai_move(board: &Board) -> Option<usize> {
    calculate_minimax_move(board, Mark::O).map(|bot_move| bot_move.index)
}

/// Full-depth minimax without pruning. Leaves score +1 for a `bot_mark`
/// line, -1 for an opponent line and 0 for a draw, regardless of depth.
/// Ties go to the lowest index.
pub fn calculate_minimax_move(board: &Board, bot_mark: Mark) -> Option<BotMove> {
    let opponent_mark = bot_mark.opponent()?;

    if check_win(board).is_some() {
        return None;
    }

    let mut nodes = 0u64;
    let mut best: Option<(usize, i32)> = None;

    for index in board.available_moves() {
        let next = board.with_mark(index, bot_mark);
        let score = minimax(&next, false, bot_mark, opponent_mark, &mut nodes);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    best.map(|(index, score)| BotMove {
        index,
        score,
        nodes,
    })
}

fn minimax(
    board: &Board,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if let Some(winner) = check_win(board) {
        return if winner == bot_mark { 1 } else { -1 };
    }

    if board.is_full() {
        return 0;
    }

    let mark = if is_maximizing { bot_mark } else { opponent_mark };
    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };

    for index in board.available_moves() {
        let next = board.with_mark(index, mark);
        let score = minimax(&next, !is_maximizing, bot_mark, opponent_mark, nodes);
        best_score = if is_maximizing {
            best_score.max(score)
        } else {
            best_score.min(score)
        };
    }

    best_score
}
