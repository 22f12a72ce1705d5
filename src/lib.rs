//! Swiss tournament web app: library with models and business logic.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    advance_round, generate_pairings, generate_pairings_with, import_players,
    record_bracket_result, record_swiss_result, standings,
};
pub use models::{
    BracketMatch, BracketRound, BracketStage, Contestant, MatchId, Player, PlayerId, SwissMatch,
    Tournament, TournamentError,
};
pub use store::{JsonFileStore, StoreError};
