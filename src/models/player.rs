//! Player data structure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in matches and lookups).
pub type PlayerId = Uuid;

/// A player in the tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Accumulated match points (3 per win, 3 for the bye).
    pub points: u32,
    /// Ids of opponents already faced, in match order. Read by the pairing
    /// engine to avoid rematches.
    pub opponents: Vec<PlayerId>,
    /// A player gets at most one bye per tournament.
    pub has_bye: bool,
    /// Dropped players keep their points and history but are excluded from
    /// pairing and from bracket seeding.
    pub dropped: bool,
}

impl Player {
    /// Create a new player with the given name. Other fields start at zero/false.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            points: 0,
            opponents: Vec::new(),
            has_bye: false,
            dropped: false,
        }
    }

    /// Award the points for a match win.
    pub fn award_win(&mut self) {
        self.points += 3;
    }

    /// Take back a previously awarded win (result correction).
    pub fn revoke_win(&mut self) {
        self.points = self.points.saturating_sub(3);
    }

    /// Record an opponent faced this round.
    pub fn record_opponent(&mut self, opponent: PlayerId) {
        self.opponents.push(opponent);
    }

    /// Award the bye: +3 points, bye flag set.
    pub fn grant_bye(&mut self) {
        self.points += 3;
        self.has_bye = true;
    }
}
