//! The 3x3 board and its line table.

use super::piece::{BoardDifficulty, BoardEncoding, Piece};
use super::{render, strategy};
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Zero-based `(row, column)` cell address.
pub type Coord = (usize, usize);

/// Three cells that win when claimed by one piece.
pub type Line = [Coord; 3];

/// Cell contents in row-major order.
pub type Matrix = [[Option<Piece>; 3]; 3];

/// All eight lines: rows top to bottom, columns left to right, then the
/// main and anti diagonals. Strategies scan in exactly this order.
pub const LINES: [Line; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Tic-tac-toe board bound to a computer difficulty.
///
/// Cells are never cleared once occupied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    matrix: Matrix,
    difficulty: BoardDifficulty,
}

impl Board {
    /// Creates an empty board whose computer plays at `difficulty`.
    #[instrument]
    pub fn empty(difficulty: BoardDifficulty) -> Self {
        Self {
            matrix: [[None; 3]; 3],
            difficulty,
        }
    }

    /// Returns the difficulty this board was created with.
    pub fn difficulty(&self) -> BoardDifficulty {
        self.difficulty
    }

    /// Returns the piece at `(row, col)`, or `None` when empty or out of range.
    pub fn get(&self, (row, col): Coord) -> Option<Piece> {
        self.matrix.get(row)?.get(col).copied().flatten()
    }

    /// Places `piece` at a chat coordinate such as `('B', 2)`.
    ///
    /// Row letters `A..=C` map to rows 0-2 and columns `1..=3` to 0-2. Returns
    /// `false` without touching the board when the coordinate is out of range
    /// or the cell is taken.
    #[instrument(skip(self))]
    pub fn insert_position(&mut self, piece: Piece, row: char, col: u32) -> bool {
        let Some(x) = (row as u32).checked_sub('A' as u32).map(|x| x as usize) else {
            return false;
        };
        let Some(y) = col.checked_sub(1).map(|y| y as usize) else {
            return false;
        };
        if x > 2 || y > 2 || self.matrix[x][y].is_some() {
            return false;
        }
        self.set((x, y), piece);
        true
    }

    /// Places `piece` on an empty cell chosen uniformly at random.
    ///
    /// Returns `false` when the board has no empty cell.
    #[instrument(skip(self, rng))]
    pub fn insert_random<R: RandomSource>(&mut self, piece: Piece, rng: &mut R) -> bool {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return false;
        }
        let (x, y) = empty[rng.gen_index(empty.len())];
        debug!(row = x, col = y, "Random placement");
        self.set((x, y), piece);
        true
    }

    /// Lets the computer play `piece` using this board's difficulty.
    ///
    /// Returns `false` only when no empty cell remains.
    #[instrument(skip(self, rng), fields(difficulty = %self.difficulty))]
    pub fn move_piece<R: RandomSource>(&mut self, piece: Piece, rng: &mut R) -> bool {
        match strategy::select(self, piece, rng) {
            Some((x, y)) => {
                debug!(row = x, col = y, "Computer placement");
                self.set((x, y), piece);
                true
            }
            None => false,
        }
    }

    /// Returns the eight lines in scan order.
    pub fn indices(&self) -> &'static [Line; 8] {
        &LINES
    }

    /// Returns every empty cell in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        (0..3)
            .flat_map(|x| (0..3).map(move |y| (x, y)))
            .filter(|&(x, y)| self.matrix[x][y].is_none())
            .collect()
    }

    /// Sums occupied cells over all eight lines.
    ///
    /// A cell counts once per line it sits on: edges weigh 2, corners 3 and
    /// the centre 4. The hard strategy's opening rule depends on these values.
    pub fn size(&self) -> usize {
        LINES
            .iter()
            .flatten()
            .filter(|&&coord| self.get(coord).is_some())
            .count()
    }

    /// True when [`Board::size`] equals 9.
    pub fn is_full(&self) -> bool {
        self.size() == 9
    }

    /// True when some line holds three identical pieces.
    pub fn is_solved(&self) -> bool {
        LINES.iter().any(|line| {
            let first = self.get(line[0]);
            first.is_some() && line.iter().all(|&coord| self.get(coord) == first)
        })
    }

    /// Renders the board with row labels `A-C` and column labels `1-3`.
    pub fn encode(&self, encoding: BoardEncoding) -> String {
        match encoding {
            BoardEncoding::Ascii => render::ascii(&self.matrix),
            BoardEncoding::Pretty => render::pretty(&self.matrix),
        }
    }

    pub(super) fn set(&mut self, (x, y): Coord, piece: Piece) {
        self.matrix[x][y] = Some(piece);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRng;

    #[test]
    fn test_empty_board() {
        let board = Board::empty(BoardDifficulty::Hard);
        assert_eq!(board.size(), 0);
        assert!(!board.is_solved());
        assert!(!board.is_full());
        assert_eq!(board.empty_cells().len(), 9);
    }

    #[test]
    fn test_insert_position_maps_letters_and_digits() {
        let mut board = Board::empty(BoardDifficulty::Easy);
        assert!(board.insert_position(Piece::X, 'B', 3));
        assert_eq!(board.get((1, 2)), Some(Piece::X));
    }

    #[test]
    fn test_insert_position_rejects_out_of_range() {
        let mut board = Board::empty(BoardDifficulty::Easy);
        assert!(!board.insert_position(Piece::X, 'D', 1));
        assert!(!board.insert_position(Piece::X, '@', 1));
        assert!(!board.insert_position(Piece::X, 'a', 1));
        assert!(!board.insert_position(Piece::X, 'A', 0));
        assert!(!board.insert_position(Piece::X, 'A', 4));
        assert_eq!(board, Board::empty(BoardDifficulty::Easy));
    }

    #[test]
    fn test_insert_position_rejects_occupied() {
        let mut board = Board::empty(BoardDifficulty::Easy);
        assert!(board.insert_position(Piece::X, 'A', 1));
        assert!(!board.insert_position(Piece::O, 'A', 1));
        assert_eq!(board.get((0, 0)), Some(Piece::X));
    }

    #[test]
    fn test_insert_random_uses_nth_empty_cell() {
        let mut board = Board::empty(BoardDifficulty::Easy);
        board.set((0, 0), Piece::O);
        let mut rng = ScriptedRng::new(vec![0]);
        assert!(board.insert_random(Piece::X, &mut rng));
        assert_eq!(board.get((0, 1)), Some(Piece::X));
    }

    #[test]
    fn test_insert_random_fails_on_packed_board() {
        let mut board = Board::empty(BoardDifficulty::Easy);
        for x in 0..3 {
            for y in 0..3 {
                board.set((x, y), if (x + y) % 2 == 0 { Piece::X } else { Piece::O });
            }
        }
        let mut rng = ScriptedRng::new(vec![]);
        assert!(!board.insert_random(Piece::X, &mut rng));
    }

    #[test]
    fn test_size_counts_per_line() {
        let mut board = Board::empty(BoardDifficulty::Normal);
        board.set((0, 1), Piece::X);
        assert_eq!(board.size(), 2);
        board.set((0, 0), Piece::O);
        assert_eq!(board.size(), 5);
        board.set((1, 1), Piece::X);
        assert_eq!(board.size(), 9);
        assert!(board.is_full());
    }

    #[test]
    fn test_packed_board_size() {
        let mut board = Board::empty(BoardDifficulty::Normal);
        for x in 0..3 {
            for y in 0..3 {
                board.set((x, y), Piece::O);
            }
        }
        assert_eq!(board.size(), 24);
    }

    #[test]
    fn test_solved_row() {
        let mut board = Board::empty(BoardDifficulty::Normal);
        for col in 1..=3 {
            assert!(board.insert_position(Piece::X, 'A', col));
        }
        assert!(board.is_solved());
    }

    #[test]
    fn test_solved_anti_diagonal() {
        let mut board = Board::empty(BoardDifficulty::Normal);
        board.set((0, 2), Piece::O);
        board.set((1, 1), Piece::O);
        board.set((2, 0), Piece::O);
        assert!(board.is_solved());
    }

    #[test]
    fn test_mixed_line_not_solved() {
        let mut board = Board::empty(BoardDifficulty::Normal);
        board.set((0, 0), Piece::X);
        board.set((0, 1), Piece::O);
        board.set((0, 2), Piece::X);
        board.set((1, 1), Piece::X);
        assert!(!board.is_solved());
    }

    #[test]
    fn test_indices_order() {
        let board = Board::empty(BoardDifficulty::Easy);
        let lines = board.indices();
        assert_eq!(lines[0], [(0, 0), (0, 1), (0, 2)]);
        assert_eq!(lines[3], [(0, 0), (1, 0), (2, 0)]);
        assert_eq!(lines[6], [(0, 0), (1, 1), (2, 2)]);
        assert_eq!(lines[7], [(0, 2), (1, 1), (2, 0)]);
    }
}
