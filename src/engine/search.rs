// Arrangement search: where to seat a newly offered candidate.
//
// Four placement strategies are explored and their UNION forms the result
// set — direct placement, single swap, depth-2 chain swap, and (for rosters
// of six or fewer including the candidate) a full backtracking assignment of
// every player to every accepting slot. The best legal board by immediate
// score plus estimated future value wins. Above six players the heuristic
// strategies are the only coverage and optimality is not guaranteed; that is
// an accepted gap.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, Player, SeenSet};
use crate::config::{DraftOdds, FINAL_ROUND};
use crate::engine::expectation::future_value;
use crate::engine::scoring::{total_score, ScoreBreakdown};
use crate::grid::slot::SLOT_COUNT;
use crate::grid::Board;

/// Roster-size ceiling (including the candidate) for the exhaustive
/// assignment strategy.
const EXHAUSTIVE_LIMIT: usize = 6;

// ---------------------------------------------------------------------------
// Candidate arrangements
// ---------------------------------------------------------------------------

/// One legal way of seating the candidate: the resulting board and the slot
/// the candidate ended up in.
#[derive(Debug, Clone)]
struct Arrangement {
    board: Board,
    new_slot: usize,
}

/// Enumerate every arrangement the four strategies can produce. Results may
/// repeat boards; the caller keeps the best.
fn generate_arrangements(board: &Board, candidate: &Player) -> Vec<Arrangement> {
    let mut results = Vec::new();
    let empty_slots = board.empty_slots();
    let occupied = board.occupied_slots();

    // 1. Direct placement into an accepting empty slot.
    for &slot in &empty_slots {
        if !Board::can_place(slot, candidate) {
            continue;
        }
        results.push(Arrangement {
            board: board.place(slot, candidate.clone()),
            new_slot: slot,
        });
    }

    // 2. Single swap: the candidate takes an occupied slot and the displaced
    // occupant moves to any accepting empty slot. Explored independently of
    // whether the candidate also fits an empty slot directly.
    for &occ_slot in &occupied {
        if !Board::can_place(occ_slot, candidate) {
            continue;
        }
        let Some(displaced) = board.get(occ_slot) else {
            continue;
        };
        for &empty_slot in &empty_slots {
            if !Board::can_place(empty_slot, displaced) {
                continue;
            }
            let swapped = board
                .place(occ_slot, candidate.clone())
                .place(empty_slot, displaced.clone());
            results.push(Arrangement { board: swapped, new_slot: occ_slot });
        }
    }

    // 3. Chain swap (depth 2): candidate takes slot T, T's occupant moves to
    // occupied slot M, M's occupant moves to an empty slot. The tentative
    // board must be fully legal.
    for &target_slot in &occupied {
        if !Board::can_place(target_slot, candidate) {
            continue;
        }
        let Some(first) = board.get(target_slot) else {
            continue;
        };
        for &mid_slot in &occupied {
            if mid_slot == target_slot || !Board::can_place(mid_slot, first) {
                continue;
            }
            let Some(second) = board.get(mid_slot) else {
                continue;
            };
            for &empty_slot in &empty_slots {
                if !Board::can_place(empty_slot, second) {
                    continue;
                }
                let chained = board
                    .place(target_slot, candidate.clone())
                    .place(mid_slot, first.clone())
                    .place(empty_slot, second.clone());
                if chained.is_valid() {
                    results.push(Arrangement { board: chained, new_slot: target_slot });
                }
            }
        }
    }

    // 4. Full exhaustive assignment for small rosters (catches every
    // rearrangement the heuristics above cannot reach).
    let mut players: Vec<Player> = board.players().cloned().collect();
    players.push(candidate.clone());
    if players.len() <= EXHAUSTIVE_LIMIT {
        if let Some(best) = brute_force_arrange(&players) {
            results.push(best);
        }
    }

    results
}

// ---------------------------------------------------------------------------
// Exhaustive assignment
// ---------------------------------------------------------------------------

/// Depth-first enumeration of every complete legal assignment of `players`
/// (in their given order) to accepting slots. Calls `visit` with the
/// resulting board and the per-player slot assignment.
pub(crate) fn enumerate_assignments(
    players: &[Player],
    mut visit: impl FnMut(&Board, &[usize]),
) {
    fn recurse(
        players: &[Player],
        idx: usize,
        assignment: &mut [usize],
        visit: &mut dyn FnMut(&Board, &[usize]),
    ) {
        if idx == players.len() {
            let mut board = Board::new();
            for (i, &slot) in assignment.iter().enumerate() {
                board = board.place(slot, players[i].clone());
            }
            visit(&board, assignment);
            return;
        }
        for slot in 0..SLOT_COUNT {
            if !Board::can_place(slot, &players[idx]) {
                continue;
            }
            if assignment[..idx].contains(&slot) {
                continue;
            }
            assignment[idx] = slot;
            recurse(players, idx + 1, assignment, visit);
        }
    }

    let mut assignment = vec![usize::MAX; players.len()];
    recurse(players, 0, &mut assignment, &mut visit);
}

/// Best-scoring complete assignment of the given players (candidate last),
/// or None when no legal bijection exists.
fn brute_force_arrange(players: &[Player]) -> Option<Arrangement> {
    let mut best_score = i32::MIN;
    let mut best: Option<Arrangement> = None;
    enumerate_assignments(players, |board, assignment| {
        let score = total_score(board).total;
        if score > best_score {
            best_score = score;
            best = Some(Arrangement {
                board: board.clone(),
                new_slot: assignment[players.len() - 1],
            });
        }
    });
    best
}

// ---------------------------------------------------------------------------
// Candidate evaluation
// ---------------------------------------------------------------------------

/// A ranked recommendation for one offered candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateEvaluation {
    pub candidate: Player,
    /// The board after the best arrangement for this candidate.
    pub board: Board,
    /// The slot the candidate occupies in that board.
    pub new_slot: usize,
    pub immediate: ScoreBreakdown,
    /// Expected additional score from the remaining empty slots in later
    /// rounds. Zero in the final round.
    pub future_ev: f64,
    /// immediate.total + future_ev — the ranking key.
    pub ev: f64,
}

/// Evaluate 1-3 offered candidates against the current board.
///
/// Each candidate's best arrangement is found independently; the result is
/// sorted descending by `ev` (stable — exact ties keep input order). A
/// candidate with no legal arrangement is silently absent from the output.
pub fn evaluate_candidates(
    board: &Board,
    candidates: &[Player],
    round: u32,
    seen: &SeenSet,
    catalog: &Catalog,
    odds: &DraftOdds,
) -> Vec<CandidateEvaluation> {
    let mut results = Vec::new();

    for candidate in candidates {
        let arrangements = generate_arrangements(board, candidate);
        debug!(
            candidate = %candidate.display_name(),
            arrangements = arrangements.len(),
            "explored placements"
        );

        let mut best: Option<CandidateEvaluation> = None;
        for arr in arrangements {
            let immediate = total_score(&arr.board);
            let future_ev = if round < FINAL_ROUND {
                future_value(&arr.board, round + 1, seen, catalog, odds)
            } else {
                0.0
            };
            let ev = immediate.total as f64 + future_ev;
            if best.as_ref().map_or(true, |b| ev > b.ev) {
                best = Some(CandidateEvaluation {
                    candidate: candidate.clone(),
                    board: arr.board,
                    new_slot: arr.new_slot,
                    immediate,
                    future_ev,
                    ev,
                });
            }
        }

        if let Some(evaluation) = best {
            results.push(evaluation);
        }
    }

    results.sort_by(|a, b| b.ev.partial_cmp(&a.ev).unwrap_or(Ordering::Equal));
    results
}

// ---------------------------------------------------------------------------
// Roster repack
// ---------------------------------------------------------------------------

/// Result of an exhaustive repack of the existing roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizedArrangement {
    pub board: Board,
    pub score: ScoreBreakdown,
}

/// Exhaustively re-seat the current occupants for the best immediate score.
/// No new candidate, no round constraint; an empty board is returned
/// unchanged.
pub fn optimize_arrangement(board: &Board) -> OptimizedArrangement {
    let players: Vec<Player> = board.players().cloned().collect();
    if players.is_empty() {
        return OptimizedArrangement {
            board: board.clone(),
            score: total_score(board),
        };
    }

    let mut best_score = i32::MIN;
    let mut best_board = board.clone();
    enumerate_assignments(&players, |assigned, _| {
        let score = total_score(assigned).total;
        if score > best_score {
            best_score = score;
            best_board = assigned.clone();
        }
    });

    OptimizedArrangement {
        score: total_score(&best_board),
        board: best_board,
    }
}

// ---------------------------------------------------------------------------
// Feasibility probe
// ---------------------------------------------------------------------------

/// Whether the player can be seated via direct placement, a single swap, or
/// a one-hop chain swap. Deliberately cheaper and shallower than the full
/// search (no exhaustive fallback), so it can disagree with
/// `evaluate_candidates` for rosters of 7-9 players; that divergence is an
/// accepted heuristic gap.
pub fn can_fit_with_rearrangement(board: &Board, player: &Player) -> bool {
    // Direct placement.
    if !board.valid_slots(player).is_empty() {
        return true;
    }

    let empty_slots = board.empty_slots();
    for target_slot in 0..SLOT_COUNT {
        if !Board::can_place(target_slot, player) {
            continue;
        }
        let Some(occupant) = board.get(target_slot) else {
            continue;
        };

        // Can the displaced occupant move to any empty slot?
        for &empty_slot in &empty_slots {
            if Board::can_place(empty_slot, occupant) {
                return true;
            }
        }

        // One-hop chain: occupant to another occupied slot, that occupant to
        // an empty slot.
        for mid_slot in 0..SLOT_COUNT {
            if mid_slot == target_slot || !Board::can_place(mid_slot, occupant) {
                continue;
            }
            let Some(mid_occupant) = board.get(mid_slot) else {
                continue;
            };
            for &empty_slot in &empty_slots {
                if Board::can_place(empty_slot, mid_occupant) {
                    return true;
                }
            }
        }
    }

    false
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
