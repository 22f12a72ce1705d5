//! Top-8 single-elimination bracket: contestants, matches, stage tag.

use crate::models::game::MatchId;
use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id + name projection of a player, carried through the bracket.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Contestant {
    pub id: PlayerId,
    pub name: String,
}

/// Which bracket round a result-recording call targets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketRound {
    Quarterfinal,
    Semifinal,
    Final,
}

/// Bracket progression tag. Downstream stages collapse back to their
/// predecessor when a required result is cleared.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketStage {
    /// Bracket not constructed (Swiss still running, or fewer than 8 qualified).
    #[default]
    None,
    Quarterfinal,
    Semifinal,
    Final,
    /// Final resolved; champion is set.
    Champion,
}

/// A bracket match. Seed numbers are only populated at the quarterfinal
/// stage. The winner, when present, is one of the two contestants.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketMatch {
    pub id: MatchId,
    pub player1: Contestant,
    pub player2: Contestant,
    pub seed1: Option<u8>,
    pub seed2: Option<u8>,
    pub winner: Option<Contestant>,
}

impl BracketMatch {
    /// Seeded quarterfinal pairing.
    pub fn seeded(player1: Contestant, seed1: u8, player2: Contestant, seed2: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            player1,
            player2,
            seed1: Some(seed1),
            seed2: Some(seed2),
            winner: None,
        }
    }

    /// Unseeded pairing (semifinal / final, built from upstream winners).
    pub fn pairing(player1: Contestant, player2: Contestant) -> Self {
        Self {
            id: Uuid::new_v4(),
            player1,
            player2,
            seed1: None,
            seed2: None,
            winner: None,
        }
    }

    /// Whether `id` is one of the two contestants.
    pub fn has_contestant(&self, id: PlayerId) -> bool {
        self.player1.id == id || self.player2.id == id
    }
}
