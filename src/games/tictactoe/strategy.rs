//! Computer move selection, dispatched on [`BoardDifficulty`].
//!
//! Every tier is a pure choice over the board: it returns the cell to claim
//! and [`Board::move_piece`] performs the write.

use super::board::{Board, Coord, Line};
use super::piece::{BoardDifficulty, Piece};
use crate::random::RandomSource;
use tracing::{debug, instrument};

const CORNERS: [Coord; 4] = [(0, 0), (0, 2), (2, 0), (2, 2)];

/// Line-weighted sizes at which the hard tier opens in a corner.
const OPENING_SIZES: [usize; 3] = [0, 2, 4];

/// Picks the cell `piece` should claim, or `None` when the board is packed.
#[instrument(skip(board, rng), fields(difficulty = %board.difficulty()))]
pub fn select<R: RandomSource>(board: &Board, piece: Piece, rng: &mut R) -> Option<Coord> {
    let chosen = match board.difficulty() {
        BoardDifficulty::Easy => None,
        BoardDifficulty::Normal => threat(board, piece),
        BoardDifficulty::Hard => threat(board, piece).or_else(|| opening(board, rng)),
    };
    chosen.or_else(|| random_cell(board, rng))
}

/// Scans the lines in order and claims the first one that is a win or a block.
///
/// On each line a win is checked before a block. A block on an earlier line
/// is taken over a win on a later one.
fn threat(board: &Board, piece: Piece) -> Option<Coord> {
    let opponent = piece.opponent();
    board.indices().iter().find_map(|line| {
        if let Some(cell) = one_short(board, line, piece) {
            debug!(row = cell.0, col = cell.1, "Taking the win");
            return Some(cell);
        }
        let cell = one_short(board, line, opponent)?;
        debug!(row = cell.0, col = cell.1, "Blocking");
        Some(cell)
    })
}

/// Returns the empty cell of `line` when the rest of it is exactly two `piece`s.
fn one_short(board: &Board, line: &Line, piece: Piece) -> Option<Coord> {
    let owned = line.iter().filter(|&&c| board.get(c) == Some(piece)).count();
    let mut empty = line.iter().copied().filter(|&c| board.get(c).is_none());
    match (owned, empty.next(), empty.next()) {
        (2, Some(cell), None) => Some(cell),
        _ => None,
    }
}

/// Claims a shuffled free corner while the board is still light.
fn opening<R: RandomSource>(board: &Board, rng: &mut R) -> Option<Coord> {
    if !OPENING_SIZES.contains(&board.size()) {
        return None;
    }
    let mut corners = CORNERS;
    rng.shuffle(&mut corners);
    let cell = corners.into_iter().find(|&c| board.get(c).is_none())?;
    debug!(row = cell.0, col = cell.1, "Corner opening");
    Some(cell)
}

fn random_cell<R: RandomSource>(board: &Board, rng: &mut R) -> Option<Coord> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }
    Some(empty[rng.gen_index(empty.len())])
}
