//! Markers, difficulty tiers and render modes for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Marker placed on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Piece {
    /// The `X` marker.
    X,
    /// The `O` marker.
    O,
}

impl Piece {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Piece::X => Piece::O,
            Piece::O => Piece::X,
        }
    }

    /// Decodes a marker from its symbol, ignoring case.
    #[instrument]
    pub fn decode(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "x" => Some(Piece::X),
            "o" => Some(Piece::O),
            _ => None,
        }
    }
}

/// Which move strategy the computer plays with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BoardDifficulty {
    /// Random placement.
    Easy,
    /// Takes wins, blocks losses, otherwise random.
    #[default]
    Normal,
    /// Normal plus a corner opening.
    Hard,
}

impl BoardDifficulty {
    /// Decodes a difficulty from its label, ignoring case.
    #[instrument]
    pub fn decode(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "easy" => Some(BoardDifficulty::Easy),
            "normal" => Some(BoardDifficulty::Normal),
            "hard" => Some(BoardDifficulty::Hard),
            _ => None,
        }
    }

    /// Lowercase label shown in the settings summary.
    pub fn label(self) -> &'static str {
        match self {
            BoardDifficulty::Easy => "easy",
            BoardDifficulty::Normal => "normal",
            BoardDifficulty::Hard => "hard",
        }
    }
}

/// Text layout used by [`Board::encode`](super::Board::encode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BoardEncoding {
    /// Plain `|`, `+` and `-` characters.
    #[default]
    Ascii,
    /// Unicode box-drawing glyphs.
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involution() {
        for piece in Piece::iter() {
            assert_ne!(piece.opponent(), piece);
            assert_eq!(piece.opponent().opponent(), piece);
        }
    }

    #[test]
    fn test_piece_decode_ignores_case() {
        assert_eq!(Piece::decode("x"), Some(Piece::X));
        assert_eq!(Piece::decode("O"), Some(Piece::O));
        assert_eq!(Piece::decode("z"), None);
        assert_eq!(Piece::decode(""), None);
    }

    #[test]
    fn test_difficulty_decode_round_trips_labels() {
        for difficulty in BoardDifficulty::iter() {
            assert_eq!(BoardDifficulty::decode(difficulty.label()), Some(difficulty));
            assert_eq!(
                BoardDifficulty::decode(&difficulty.label().to_uppercase()),
                Some(difficulty)
            );
        }
        assert_eq!(BoardDifficulty::decode("impossible"), None);
    }

    #[test]
    fn test_piece_display() {
        assert_eq!(Piece::X.to_string(), "X");
        assert_eq!(Piece::O.to_string(), "O");
    }
}
