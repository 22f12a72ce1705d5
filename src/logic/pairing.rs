//! Swiss pairing: one round's match list from the current player pool.

use crate::models::{Player, SwissMatch};
use rand::Rng;
use std::cmp::Reverse;

/// Generate one Swiss round's matches.
///
/// 1. Filter out dropped players.
/// 2. Sort by points (descending); ties broken by a random key, so the same
///    standings do not always produce the same table order.
/// 3. Odd pool: the bye goes to the bottom-most player without one (bottom
///    player regardless if everyone already had a bye). The bye match comes
///    first in the output, pre-resolved.
/// 4. Greedy top-down pairing, skipping prior opponents; when a player has
///    already faced every remaining candidate, a rematch is allowed.
///
/// A lone active player cannot be paired and gets no match this round.
pub fn generate_pairings(players: &[Player]) -> Vec<SwissMatch> {
    generate_pairings_with(players, &mut rand::thread_rng())
}

/// Same as [`generate_pairings`] with a caller-supplied RNG (seedable in tests).
pub fn generate_pairings_with(players: &[Player], rng: &mut impl Rng) -> Vec<SwissMatch> {
    let mut active: Vec<&Player> = players.iter().filter(|p| !p.dropped).collect();
    if active.len() < 2 {
        return Vec::new();
    }

    let mut with_tiebreak: Vec<(&Player, u32)> =
        active.drain(..).map(|p| (p, rng.gen::<u32>())).collect();
    with_tiebreak.sort_by_key(|(p, t)| (Reverse(p.points), *t));
    let mut active: Vec<&Player> = with_tiebreak.into_iter().map(|(p, _)| p).collect();

    let mut matches = Vec::new();

    if active.len() % 2 != 0 {
        let bye_idx = active
            .iter()
            .rposition(|p| !p.has_bye)
            .unwrap_or(active.len() - 1);
        let bye_player = active.remove(bye_idx);
        matches.push(SwissMatch::bye(bye_player.id));
    }

    let mut paired = vec![false; active.len()];
    for i in 0..active.len() {
        if paired[i] {
            continue;
        }
        let fresh = (i + 1..active.len())
            .find(|&j| !paired[j] && !active[i].opponents.contains(&active[j].id));
        // No fresh opponent left: relax the constraint and allow a rematch.
        let partner = fresh.or_else(|| (i + 1..active.len()).find(|&j| !paired[j]));
        if let Some(j) = partner {
            paired[i] = true;
            paired[j] = true;
            matches.push(SwissMatch::new(active[i].id, active[j].id));
        }
    }

    matches
}
