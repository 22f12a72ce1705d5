//! Bracket progression: winner toggles and the stage cascade.

use crate::models::{BracketMatch, BracketRound, BracketStage, Contestant, Tournament};

/// Record (or toggle off) a bracket result, then cascade.
///
/// Clicking the current winner clears the result. Completing a stage builds
/// the next one from its winners in array order; un-resolving any upstream
/// match unconditionally wipes all downstream progress (manual correction
/// flow, no confirmation). Missing matches, bad indexes, and candidates that
/// are not contestants of the targeted match are ignored.
pub fn record_bracket_result(
    tournament: &mut Tournament,
    round: BracketRound,
    match_index: usize,
    winner: Contestant,
) {
    match round {
        BracketRound::Quarterfinal => {
            if !toggle_winner(tournament.qf_matches.get_mut(match_index), winner) {
                return;
            }
            let winners: Vec<Contestant> = tournament
                .qf_matches
                .iter()
                .filter_map(|m| m.winner.clone())
                .collect();
            if winners.len() == 4 {
                tournament.sf_matches = vec![
                    BracketMatch::pairing(winners[0].clone(), winners[1].clone()),
                    BracketMatch::pairing(winners[2].clone(), winners[3].clone()),
                ];
                tournament.stage = BracketStage::Semifinal;
            } else {
                tournament.stage = BracketStage::Quarterfinal;
                tournament.sf_matches.clear();
                tournament.final_match = None;
                tournament.champion = None;
            }
        }
        BracketRound::Semifinal => {
            if !toggle_winner(tournament.sf_matches.get_mut(match_index), winner) {
                return;
            }
            let winners: Vec<Contestant> = tournament
                .sf_matches
                .iter()
                .filter_map(|m| m.winner.clone())
                .collect();
            if winners.len() == 2 {
                tournament.final_match = Some(BracketMatch::pairing(
                    winners[0].clone(),
                    winners[1].clone(),
                ));
                tournament.stage = BracketStage::Final;
            } else {
                tournament.final_match = None;
                tournament.champion = None;
                tournament.stage = BracketStage::Semifinal;
            }
        }
        BracketRound::Final => {
            if !toggle_winner(tournament.final_match.as_mut(), winner) {
                return;
            }
            tournament.champion = tournament
                .final_match
                .as_ref()
                .and_then(|m| m.winner.clone());
            tournament.stage = if tournament.champion.is_some() {
                BracketStage::Champion
            } else {
                BracketStage::Final
            };
        }
    }
}

/// Toggle semantics: the same winner again clears the result. Returns false
/// when there is no such match or the candidate is not one of its
/// contestants.
fn toggle_winner(slot: Option<&mut BracketMatch>, winner: Contestant) -> bool {
    let m = match slot {
        Some(m) => m,
        None => return false,
    };
    if !m.has_contestant(winner.id) {
        return false;
    }
    m.winner = match &m.winner {
        Some(w) if w.id == winner.id => None,
        _ => Some(winner),
    };
    true
}
