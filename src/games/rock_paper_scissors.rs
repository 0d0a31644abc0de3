//! Rock-paper-scissors moves and the fixed win table.

use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A hand played in one round.
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
#[strum(serialize_all = "lowercase")]
pub enum Hand {
    /// Beats scissors.
    Rock,
    /// Beats rock.
    Paper,
    /// Beats paper.
    Scissors,
}

impl Hand {
    /// All hands in the order they are offered.
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Paper, Hand::Scissors];

    /// Button label offered to the player.
    pub fn label(self) -> &'static str {
        match self {
            Hand::Rock => "Rock",
            Hand::Paper => "Paper",
            Hand::Scissors => "Scissors",
        }
    }

    /// Decodes a hand from its label, ignoring case.
    #[instrument]
    pub fn decode(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|hand| hand.label().eq_ignore_ascii_case(label))
    }

    /// The hand this one defeats.
    pub fn beats(self) -> Hand {
        match self {
            Hand::Rock => Hand::Scissors,
            Hand::Paper => Hand::Rock,
            Hand::Scissors => Hand::Paper,
        }
    }

    /// Draws a hand uniformly at random.
    pub fn random<R: RandomSource>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_int(0, Self::ALL.len() - 1)]
    }
}

/// How a round ended, from the bot's side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Both played the same hand.
    Tie,
    /// The bot's hand beat the player's.
    BotWins,
    /// The player's hand beat the bot's.
    PlayerWins,
}

impl RoundOutcome {
    /// Scores `bot` against `player`.
    #[instrument]
    pub fn score(bot: Hand, player: Hand) -> Self {
        if bot == player {
            RoundOutcome::Tie
        } else if bot.beats() == player {
            RoundOutcome::BotWins
        } else {
            RoundOutcome::PlayerWins
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRng;

    #[test]
    fn test_decode_ignores_case() {
        assert_eq!(Hand::decode("rock"), Some(Hand::Rock));
        assert_eq!(Hand::decode("PAPER"), Some(Hand::Paper));
        assert_eq!(Hand::decode("Scissors"), Some(Hand::Scissors));
        assert_eq!(Hand::decode("Lizard"), None);
    }

    #[test]
    fn test_win_table() {
        assert_eq!(RoundOutcome::score(Hand::Rock, Hand::Scissors), RoundOutcome::BotWins);
        assert_eq!(RoundOutcome::score(Hand::Scissors, Hand::Paper), RoundOutcome::BotWins);
        assert_eq!(RoundOutcome::score(Hand::Paper, Hand::Rock), RoundOutcome::BotWins);
        assert_eq!(RoundOutcome::score(Hand::Rock, Hand::Paper), RoundOutcome::PlayerWins);
        assert_eq!(RoundOutcome::score(Hand::Paper, Hand::Paper), RoundOutcome::Tie);
    }

    #[test]
    fn test_random_follows_script() {
        let mut rng = ScriptedRng::new(vec![2, 0]);
        assert_eq!(Hand::random(&mut rng), Hand::Scissors);
        assert_eq!(Hand::random(&mut rng), Hand::Rock);
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(Hand::Scissors.to_string(), "scissors");
    }
}
