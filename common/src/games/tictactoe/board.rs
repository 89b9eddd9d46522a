use super::types::{CELL_COUNT, Mark};

/// 3x3 grid stored in reading order: row = index / 3, column = index % 3.
///
/// X always moves first, so the number of X marks is equal to or one more
/// than the number of O marks. The public constructors and mutators keep that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_marks(cells: [Mark; CELL_COUNT]) -> Result<Self, String> {
        let board = Self { cells };
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);
        if x_count != o_count && x_count != o_count + 1 {
            return Err(format!(
                "Invalid position: {} X marks and {} O marks",
                x_count, o_count
            ));
        }
        Ok(board)
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_cell_empty(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// The mark whose turn it is according to the counts alone.
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::X) == self.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn place_mark(&mut self, index: usize, mark: Mark) -> Result<(), String> {
        if mark == Mark::Empty {
            return Err("Cannot place an empty mark".to_string());
        }

        if index >= CELL_COUNT {
            return Err(format!("Cell {} is out of bounds", index));
        }

        if self.cells[index] != Mark::Empty {
            return Err(format!("Cell {} is already marked", index));
        }

        if mark != self.next_mark() {
            return Err(format!("It is not {:?}'s turn", mark));
        }

        self.cells[index] = mark;
        Ok(())
    }

    /// Copy of the board with `mark` written to an empty cell, turn order
    /// unchecked. Search uses it to explore positions for either side.
    pub(crate) fn with_mark(&self, index: usize, mark: Mark) -> Board {
        debug_assert!(self.cells[index] == Mark::Empty);
        let mut next = *self;
        next.cells[index] = mark;
        next
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }
}

#[cfg(test)]
pub(crate) fn board_from_str(layout: &str) -> Board {
    let mut cells = [Mark::Empty; CELL_COUNT];
    for (cell, ch) in cells.iter_mut().zip(layout.chars().filter(|c| !c.is_whitespace())) {
        *cell = match ch {
            'X' => Mark::X,
            'O' => Mark::O,
            _ => Mark::Empty,
        };
    }
    Board::from_marks(cells).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!((0..CELL_COUNT).all(|i| board.is_cell_empty(i)));
        assert!(!board.is_full());
        assert_eq!(board.available_moves(), (0..CELL_COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn test_place_mark_fills_cell() {
        let mut board = Board::new();
        board.place_mark(4, Mark::X).unwrap();
        assert_eq!(board.get(4), Some(Mark::X));
        assert!(!board.is_cell_empty(4));
        assert_eq!(board.next_mark(), Mark::O);
    }

    #[test]
    fn test_place_mark_rejects_occupied_cell() {
        let mut board = Board::new();
        board.place_mark(0, Mark::X).unwrap();
        let before = board;
        assert!(board.place_mark(0, Mark::O).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_mark_rejects_out_of_bounds() {
        let mut board = Board::new();
        assert!(board.place_mark(9, Mark::X).is_err());
        assert!(!board.is_cell_empty(9));
        assert_eq!(board.get(9), None);
    }

    #[test]
    fn test_place_mark_rejects_out_of_turn() {
        let mut board = Board::new();
        assert!(board.place_mark(0, Mark::O).is_err());
        board.place_mark(0, Mark::X).unwrap();
        assert!(board.place_mark(1, Mark::X).is_err());
        assert!(board.place_mark(1, Mark::Empty).is_err());
        assert_eq!(board.count(Mark::X), 1);
        assert_eq!(board.count(Mark::O), 0);
    }

    #[test]
    fn test_from_marks_validates_counts() {
        let mut cells = [Mark::Empty; CELL_COUNT];
        cells[0] = Mark::O;
        assert!(Board::from_marks(cells).is_err());

        cells[0] = Mark::X;
        cells[1] = Mark::X;
        assert!(Board::from_marks(cells).is_err());

        cells[2] = Mark::O;
        assert!(Board::from_marks(cells).is_ok());
    }

    #[test]
    fn test_is_full_and_reset() {
        let mut board = board_from_str("XOX XOO OXX");
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());

        board.reset();
        assert_eq!(board, Board::new());
    }
}
