//! Swiss result recording and correction.

use crate::models::{PlayerId, Tournament};

/// Record (or correct) the winner of the Swiss match at `match_index`.
///
/// Clicking the recorded winner again is a no-op; Swiss results do not
/// toggle off, unlike bracket results. A correction takes 3 points back from
/// the previous winner and awards 3 to the new one; no other player is
/// affected. Out-of-range indexes and non-participants are ignored.
pub fn record_swiss_result(tournament: &mut Tournament, match_index: usize, winner_id: PlayerId) {
    let (old_winner, is_participant) = match tournament.matches.get(match_index) {
        Some(m) => (m.winner_id, m.has_participant(winner_id)),
        None => return,
    };
    if !is_participant || old_winner == Some(winner_id) {
        return;
    }

    if let Some(old_id) = old_winner {
        if let Some(p) = tournament.get_player_mut(old_id) {
            p.revoke_win();
        }
    }
    if let Some(p) = tournament.get_player_mut(winner_id) {
        p.award_win();
    }
    tournament.matches[match_index].winner_id = Some(winner_id);
}
