//! Data structures for the tournament: players, matches, bracket, aggregate state.

mod bracket;
mod game;
mod player;
mod tournament;

pub use bracket::{BracketMatch, BracketRound, BracketStage, Contestant};
pub use game::{MatchId, SwissMatch};
pub use player::{Player, PlayerId};
pub use tournament::{Tournament, TournamentError};
