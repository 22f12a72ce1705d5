//! Tournament business logic: pairing, round advancement, result recording,
//! bracket progression, roster import.

mod finals;
mod pairing;
mod results;
mod roster;
mod rounds;

pub use finals::record_bracket_result;
pub use pairing::{generate_pairings, generate_pairings_with};
pub use results::record_swiss_result;
pub use roster::import_players;
pub use rounds::{advance_round, standings};
