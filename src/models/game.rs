//! Swiss round matches.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// A single Swiss round match. `player2 == None` means a bye; a bye is
/// created already resolved in favor of `player1`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SwissMatch {
    pub id: MatchId,
    pub player1: PlayerId,
    pub player2: Option<PlayerId>,
    /// None until a result is recorded.
    pub winner_id: Option<PlayerId>,
}

impl SwissMatch {
    pub fn new(player1: PlayerId, player2: PlayerId) -> Self {
        Self {
            id: Uuid::new_v4(),
            player1,
            player2: Some(player2),
            winner_id: None,
        }
    }

    /// A bye match: no opponent, winner pre-set to the bye recipient.
    pub fn bye(player: PlayerId) -> Self {
        Self {
            id: Uuid::new_v4(),
            player1: player,
            player2: None,
            winner_id: Some(player),
        }
    }

    pub fn is_bye(&self) -> bool {
        self.player2.is_none()
    }

    /// Whether `id` plays in this match.
    pub fn has_participant(&self, id: PlayerId) -> bool {
        self.player1 == id || self.player2 == Some(id)
    }
}
