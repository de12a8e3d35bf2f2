// Composite board scoring: raw talent plus chemistry.
//
// `total_score` is the single objective every search routine maximizes;
// there is no other weighting scheme.

use serde::{Deserialize, Serialize};

use crate::engine::chemistry::chemistry_score;
use crate::grid::Board;

/// Full score breakdown for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Sum of occupants' talent values.
    pub talent: i32,
    /// Chemistry total (connections + dots).
    pub chemistry: i32,
    pub chem_connections: i32,
    pub chem_dots: i32,
    /// talent + chemistry.
    pub total: i32,
}

/// Sum of talent over every occupied slot.
pub fn talent_score(board: &Board) -> i32 {
    board.players().map(|p| p.talent()).sum()
}

/// The composite objective: talent plus chemistry.
pub fn total_score(board: &Board) -> ScoreBreakdown {
    let talent = talent_score(board);
    let chem = chemistry_score(board);
    ScoreBreakdown {
        talent,
        chemistry: chem.total,
        chem_connections: chem.connection_score,
        chem_dots: chem.dot_score,
        total: talent + chem.total,
    }
}
