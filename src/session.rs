// Draft session state: board, round counter, seen-set, pick history.
//
// The session is an explicit value owned by the caller — the engine itself
// is stateless and re-entrant. Methods here are thin: they filter inputs,
// delegate to the engine, and apply results the caller has accepted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{Catalog, Player, SeenSet};
use crate::config::{DraftOdds, FINAL_ROUND};
use crate::engine::expectation::{suggest_pre_round_arrangement, PreRoundPlan};
use crate::engine::scoring::{total_score, ScoreBreakdown};
use crate::engine::search::{evaluate_candidates, CandidateEvaluation};
use crate::grid::Board;

/// One confirmed pick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickRecord {
    pub round: u32,
    /// Slot the player was seated in when picked.
    pub slot: usize,
    pub player: Player,
    pub picked_at: DateTime<Utc>,
}

/// The running state of one draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftSession {
    pub board: Board,
    /// Current round, 1-based. Past `FINAL_ROUND` the draft is complete.
    pub round: u32,
    /// Base keys of every identity offered or picked so far. Never shrinks.
    pub seen: SeenSet,
    pub picks: Vec<PickRecord>,
    pub started_at: DateTime<Utc>,
}

impl Default for DraftSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftSession {
    pub fn new() -> Self {
        DraftSession {
            board: Board::new(),
            round: 1,
            seen: SeenSet::new(),
            picks: Vec::new(),
            started_at: Utc::now(),
        }
    }

    /// Discard all progress and start over.
    pub fn reset(&mut self) {
        *self = DraftSession::new();
    }

    pub fn is_complete(&self) -> bool {
        self.round > FINAL_ROUND
    }

    /// Current board score.
    pub fn score(&self) -> ScoreBreakdown {
        total_score(&self.board)
    }

    /// Rank this round's offered candidates. Candidates whose base identity
    /// is already on the board are filtered out before evaluation; a
    /// candidate with no legal arrangement is absent from the result.
    pub fn evaluate(
        &self,
        candidates: &[Player],
        catalog: &Catalog,
        odds: &DraftOdds,
    ) -> Vec<CandidateEvaluation> {
        let board_keys: SeenSet = self.board.players().map(|p| p.base_key()).collect();
        let valid: Vec<Player> = candidates
            .iter()
            .filter(|c| !board_keys.contains(&c.base_key()))
            .cloned()
            .collect();
        evaluate_candidates(&self.board, &valid, self.round, &self.seen, catalog, odds)
    }

    /// Apply an accepted recommendation: adopt its board, record the pick,
    /// mark every offered candidate (picked or not) as seen, and advance
    /// the round.
    pub fn confirm_pick(&mut self, recommendation: &CandidateEvaluation, offered: &[Player]) {
        self.board = recommendation.board.clone();
        self.picks.push(PickRecord {
            round: self.round,
            slot: recommendation.new_slot,
            player: recommendation.candidate.clone(),
            picked_at: Utc::now(),
        });
        self.mark_seen(offered);
        info!(
            round = self.round,
            player = %recommendation.candidate.display_name(),
            slot = recommendation.new_slot,
            total = recommendation.immediate.total,
            "pick confirmed"
        );
        self.round += 1;
    }

    /// Compute the best between-rounds arrangement for the current round's
    /// offerings.
    pub fn pre_round_plan(&self, catalog: &Catalog, odds: &DraftOdds) -> PreRoundPlan {
        suggest_pre_round_arrangement(&self.board, self.round, &self.seen, catalog, odds)
    }

    /// Accept a pre-round arrangement in place of this round's pick: adopt
    /// the re-arranged board, mark any offered candidates as seen, and
    /// advance the round.
    pub fn accept_pre_round_plan(&mut self, plan: &PreRoundPlan, offered: &[Player]) {
        self.board = plan.board.clone();
        self.mark_seen(offered);
        info!(round = self.round, score = plan.score, "roster re-arranged, round skipped");
        self.round += 1;
    }

    /// Add every given player's base identity to the seen-set.
    pub fn mark_seen(&mut self, players: &[Player]) {
        for player in players {
            self.seen.insert(player.base_key());
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
