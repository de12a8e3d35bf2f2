// Expected future value of empty slots, and the pre-round repack that
// maximizes it.
//
// The estimator quantifies the value of NOT filling a slot yet, so the
// search is not myopically biased toward always grabbing high-connectivity
// cells. For every empty slot it looks at the remaining pool (catalog minus
// seen identities, filtered to the slot's accepted positions), takes the
// odds-weighted expected talent of a draw, and adds an expected chemistry
// term from the occupied neighbors' attribute sets. The dot part of that
// term (green_prob*6 + yellow_prob*2) is a deliberate approximation of the
// exact dot thresholds and must stay as-is; reconciling it would change the
// ranking behavior the advisor is tuned for.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, Player, Position, Rarity, SeenSet};
use crate::config::{DraftOdds, FINAL_ROUND};
use crate::engine::search::enumerate_assignments;
use crate::grid::slot::{neighbors, SLOTS, SLOT_COUNT};
use crate::grid::Board;

// ---------------------------------------------------------------------------
// Future value
// ---------------------------------------------------------------------------

/// Expected additional score obtainable from the board's empty slots in the
/// given round. The game picks one empty slot uniformly at random before
/// rolling rarity, so each slot's contribution is weighted by
/// 1 / empty-slot count. Rounds past 9 clamp to round 9's odds.
pub fn future_value(
    board: &Board,
    round: u32,
    seen: &SeenSet,
    catalog: &Catalog,
    odds: &DraftOdds,
) -> f64 {
    let empty_slots = board.empty_slots();
    if empty_slots.is_empty() {
        return 0.0;
    }

    let round = round.min(FINAL_ROUND);
    let slot_prob = 1.0 / empty_slots.len() as f64;
    empty_slots
        .iter()
        .map(|&slot_id| slot_value(board, slot_id, round, seen, catalog, odds) * slot_prob)
        .sum()
}

/// Expected (talent + chemistry) of a future draw landing on one empty slot.
fn slot_value(
    board: &Board,
    slot_id: usize,
    round: u32,
    seen: &SeenSet,
    catalog: &Catalog,
    odds: &DraftOdds,
) -> f64 {
    let slot = &SLOTS[slot_id];
    let pool: Vec<&Player> = catalog
        .players()
        .iter()
        .filter(|p| !seen.contains(&p.base_key()) && slot.accepts(p.position))
        .collect();
    if pool.is_empty() {
        return 0.0;
    }
    let pool_len = pool.len() as f64;

    // Expected talent: draw odds per tier, weighted by the pool's tier mix.
    let mut tier_counts = [0usize; 5];
    for p in &pool {
        tier_counts[(p.rarity.tier() - 1) as usize] += 1;
    }
    let expected_talent: f64 = Rarity::ALL
        .iter()
        .map(|&r| {
            let fraction = tier_counts[(r.tier() - 1) as usize] as f64 / pool_len;
            odds.probability(round, r) * r.talent() as f64 * fraction
        })
        .sum();

    // Expected chemistry against the occupied neighbors' attribute sets.
    let occupied_neighbors: Vec<usize> = neighbors(slot_id)
        .into_iter()
        .filter(|&n| board.get(n).is_some())
        .collect();
    let expected_chemistry = if occupied_neighbors.is_empty() {
        0.0
    } else {
        let mut teams = HashSet::new();
        let mut divisions = HashSet::new();
        let mut years = HashSet::new();
        for &n in &occupied_neighbors {
            if let Some(p) = board.get(n) {
                teams.insert(p.team.as_str());
                divisions.insert(p.division.as_str());
                years.insert(p.draft_year);
            }
        }

        let mut green_matches = 0usize;
        let mut yellow_matches = 0usize;
        for p in &pool {
            let same_team = teams.contains(p.team.as_str());
            let same_division = divisions.contains(p.division.as_str());
            let same_year = years.contains(&p.draft_year);
            if same_team || (same_division && same_year) {
                green_matches += 1;
            } else if same_division || same_year {
                yellow_matches += 1;
            }
        }

        let green_prob = green_matches as f64 / pool_len;
        let yellow_prob = yellow_matches as f64 / pool_len;

        // Connection points per neighbor (green 2, yellow 1), plus the dot
        // approximation.
        (green_prob * 2.0 + yellow_prob) * occupied_neighbors.len() as f64
            + green_prob * 6.0
            + yellow_prob * 2.0
    };

    expected_talent + expected_chemistry
}

// ---------------------------------------------------------------------------
// Pre-round optimizer
// ---------------------------------------------------------------------------

/// A recommended between-rounds arrangement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreRoundPlan {
    pub board: Board,
    /// Position categories the re-arranged board's empty slots can draw.
    pub offered_positions: Vec<Position>,
    /// The forward-looking score of the chosen arrangement.
    pub score: f64,
}

/// Exhaustively re-seat the current occupants to maximize the expected
/// value of the NEXT draw: same backtracking bijection as the arrangement
/// search, but scored by `future_value` at the current (not yet advanced)
/// round instead of the immediate total. Empty and full boards are returned
/// unchanged with score 0.
pub fn suggest_pre_round_arrangement(
    board: &Board,
    round: u32,
    seen: &SeenSet,
    catalog: &Catalog,
    odds: &DraftOdds,
) -> PreRoundPlan {
    let players: Vec<Player> = board.players().cloned().collect();
    if players.is_empty() || players.len() >= SLOT_COUNT {
        return PreRoundPlan {
            board: board.clone(),
            offered_positions: board.offered_positions(),
            score: 0.0,
        };
    }

    let mut best_score = f64::NEG_INFINITY;
    let mut best_board = board.clone();
    enumerate_assignments(&players, |assigned, _| {
        let score = future_value(assigned, round, seen, catalog, odds);
        if score > best_score {
            best_score = score;
            best_board = assigned.clone();
        }
    });

    debug!(round, score = best_score, "pre-round arrangement chosen");
    PreRoundPlan {
        offered_positions: best_board.offered_positions(),
        board: best_board,
        score: best_score,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
