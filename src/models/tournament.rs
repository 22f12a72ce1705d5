//! Tournament root aggregate and registration operations.

use crate::models::bracket::{BracketMatch, BracketStage, Contestant};
use crate::models::game::SwissMatch;
use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// Errors that can occur during registration operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Player name is empty after trimming.
    EmptyPlayerName,
    /// A player with this name already exists (names are unique, case-insensitive).
    DuplicatePlayerName,
    /// Player not found in the roster.
    PlayerNotFound(PlayerId),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::EmptyPlayerName => write!(f, "Player name must not be empty"),
            TournamentError::DuplicatePlayerName => {
                write!(f, "A player with this name already exists")
            }
            TournamentError::PlayerNotFound(_) => write!(f, "Player not found"),
        }
    }
}

/// Full tournament state: the one shared document replicated to the store.
///
/// `Default` is the empty initial state (round 0, nothing started).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    /// All registered players, dropped ones included.
    pub players: Vec<Player>,
    /// Current Swiss round's matches; replaced wholesale each round.
    pub matches: Vec<SwissMatch>,
    /// Current round number; 0 = not started.
    pub round: u32,
    pub started: bool,
    /// Swiss phase over; standings are final and the bracket (if any) is live.
    pub swiss_finished: bool,
    /// Seed order for the bracket, empty until the Swiss phase finishes.
    pub top8: Vec<Contestant>,
    pub qf_matches: Vec<BracketMatch>,
    pub sf_matches: Vec<BracketMatch>,
    pub final_match: Option<BracketMatch>,
    pub champion: Option<Contestant>,
    pub stage: BracketStage,
}

impl Tournament {
    /// Create an empty tournament (same as `Default`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable reference to a player by id.
    pub fn get_player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Register a player. Registration stays open for the whole tournament;
    /// late entrants simply join the next round's pairings. Names must be
    /// unique (case-insensitive).
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<(), TournamentError> {
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }
        let is_duplicate = self
            .players
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(name_trimmed));
        if is_duplicate {
            return Err(TournamentError::DuplicatePlayerName);
        }
        self.players.push(Player::new(name_trimmed));
        Ok(())
    }

    /// Toggle a player's dropped flag (withdraw / rejoin). Allowed at any
    /// time; the flag only affects future pairing and bracket seeding.
    /// Returns the new flag value.
    pub fn toggle_drop(&mut self, player_id: PlayerId) -> Result<bool, TournamentError> {
        let p = self
            .get_player_mut(player_id)
            .ok_or(TournamentError::PlayerNotFound(player_id))?;
        p.dropped = !p.dropped;
        Ok(p.dropped)
    }
}
