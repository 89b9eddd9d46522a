use super::board::Board;
use super::types::{GameStatus, Mark, WinningLine};

pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// First completed line in `WINNING_LINES` order.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    for line in WINNING_LINES {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}

pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(status) = check_win(board).and_then(GameStatus::won_by) {
        return status;
    }

    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
