//! Round advancement: start, next-round generation, Swiss termination,
//! standings, and top-8 seeding.

use crate::logic::pairing::generate_pairings;
use crate::models::{BracketMatch, BracketStage, Contestant, Player, SwissMatch, Tournament};

/// All players ranked by points descending (stable). Dropped players stay in
/// the table for historical display.
pub fn standings(tournament: &Tournament) -> Vec<Player> {
    let mut ranked = tournament.players.clone();
    ranked.sort_by(|a, b| b.points.cmp(&a.points));
    ranked
}

/// Start the tournament or advance it one step.
///
/// - Round 0: generate round 1 (requires at least 2 active players).
/// - Round > 0: the Swiss phase ends when exactly one active player is still
///   undefeated (`points == round * 3`) or at most 8 players remain active;
///   otherwise the next round's pairings are generated.
///
/// The terminating call seeds the top 8 into quarterfinals and leaves the
/// round number and the current Swiss match list untouched. Once the Swiss
/// phase has finished, further calls are no-ops.
pub fn advance_round(tournament: &mut Tournament) {
    if tournament.swiss_finished {
        return;
    }

    if tournament.round == 0 {
        if tournament.players.iter().filter(|p| !p.dropped).count() < 2 {
            return;
        }
        start_next_round(tournament);
        return;
    }

    let max_points = tournament.round * 3;
    let active: Vec<&Player> = tournament.players.iter().filter(|p| !p.dropped).collect();
    let undefeated = active.iter().filter(|p| p.points == max_points).count();

    if undefeated == 1 || active.len() <= 8 {
        finish_swiss(tournament);
        return;
    }

    start_next_round(tournament);
}

/// Generate the next round and apply its immediate effects: opponent history
/// for both sides of every pairing, and the bye point award.
fn start_next_round(tournament: &mut Tournament) {
    let matches = generate_pairings(&tournament.players);
    apply_pairings(tournament, &matches);
    tournament.matches = matches;
    tournament.round += 1;
    tournament.started = true;
}

fn apply_pairings(tournament: &mut Tournament, matches: &[SwissMatch]) {
    for m in matches {
        match m.player2 {
            Some(p2) => {
                if let Some(p) = tournament.get_player_mut(m.player1) {
                    p.record_opponent(p2);
                }
                if let Some(p) = tournament.get_player_mut(p2) {
                    p.record_opponent(m.player1);
                }
            }
            None => {
                // One bye award per tournament, active players only. The
                // all-byes-exhausted fallback re-selects a player who already
                // had one; that player gets the match but no second award.
                if let Some(p) = tournament.get_player_mut(m.player1) {
                    if !p.has_bye && !p.dropped {
                        p.grant_bye();
                    }
                }
            }
        }
    }
}

/// Close the Swiss phase: rank everyone, filter dropped, take the top 8, and
/// build the quarterfinals when at least 8 qualify.
fn finish_swiss(tournament: &mut Tournament) {
    let top8: Vec<Contestant> = standings(tournament)
        .into_iter()
        .filter(|p| !p.dropped)
        .take(8)
        .map(|p| Contestant {
            id: p.id,
            name: p.name,
        })
        .collect();

    if top8.len() >= 8 {
        tournament.qf_matches = seed_quarterfinals(&top8);
        tournament.stage = BracketStage::Quarterfinal;
    } else {
        tournament.stage = BracketStage::None;
    }
    tournament.top8 = top8;
    tournament.swiss_finished = true;
}

/// Standard bracket seeding: (1 v 8), (4 v 5), (3 v 6), (2 v 7).
fn seed_quarterfinals(top8: &[Contestant]) -> Vec<BracketMatch> {
    vec![
        BracketMatch::seeded(top8[0].clone(), 1, top8[7].clone(), 8),
        BracketMatch::seeded(top8[3].clone(), 4, top8[4].clone(), 5),
        BracketMatch::seeded(top8[2].clone(), 3, top8[5].clone(), 6),
        BracketMatch::seeded(top8[1].clone(), 2, top8[6].clone(), 7),
    ]
}
