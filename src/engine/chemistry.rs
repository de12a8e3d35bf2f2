// Chemistry classification and scoring.
//
// Two players on adjacent slots form a "connection" colored by shared
// attributes; each occupied slot gets a "dot" colored by the mix of its
// neighbor connections. Both classifications are recomputed from board
// contents on every query — boards are small and stale caches would be a
// correctness hazard.

use serde::{Deserialize, Serialize};

use crate::catalog::Player;
use crate::grid::slot::{neighbors, ADJACENCY, SLOT_COUNT};
use crate::grid::Board;

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Connection / dot classification. Contexts with no classification (empty
/// slot, edge with an empty endpoint) are `Option::None` in detail records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkColor {
    Green,
    Yellow,
    Red,
}

impl LinkColor {
    /// Points a connection of this color contributes.
    pub fn connection_points(&self) -> i32 {
        match self {
            LinkColor::Green => 2,
            LinkColor::Yellow => 1,
            LinkColor::Red => 0,
        }
    }

    /// Points a dot of this color contributes.
    pub fn dot_points(&self) -> i32 {
        match self {
            LinkColor::Green => 11,
            LinkColor::Yellow => 6,
            LinkColor::Red => 0,
        }
    }
}

/// Classify the connection between two players.
///
/// Green: same team, or same division AND same draft year.
/// Yellow: same division OR same draft year.
/// Red: otherwise. Symmetric in its arguments.
pub fn connection_color(a: &Player, b: &Player) -> LinkColor {
    let same_team = a.team == b.team;
    let same_division = a.division == b.division;
    let same_year = a.draft_year == b.draft_year;

    if same_team || (same_division && same_year) {
        LinkColor::Green
    } else if same_division || same_year {
        LinkColor::Yellow
    } else {
        LinkColor::Red
    }
}

/// Classify the dot of an occupied slot from its connections to occupied
/// neighbors. `None` for an empty slot.
///
/// Green: 4+ yellow, or 2+ green, or (2+ yellow and 1+ green).
/// Yellow: 2+ yellow, or 1+ green.
/// Red: otherwise. Exact game-scoring thresholds.
pub fn dot_color(board: &Board, slot_id: usize) -> Option<LinkColor> {
    let player = board.get(slot_id)?;

    let mut green_count = 0;
    let mut yellow_count = 0;
    for neighbor_id in neighbors(slot_id) {
        let Some(neighbor) = board.get(neighbor_id) else {
            continue;
        };
        match connection_color(player, neighbor) {
            LinkColor::Green => green_count += 1,
            LinkColor::Yellow => yellow_count += 1,
            LinkColor::Red => {}
        }
    }

    if yellow_count >= 4 || green_count >= 2 || (yellow_count >= 2 && green_count >= 1) {
        Some(LinkColor::Green)
    } else if yellow_count >= 2 || green_count >= 1 {
        Some(LinkColor::Yellow)
    } else {
        Some(LinkColor::Red)
    }
}

// ---------------------------------------------------------------------------
// Aggregate score
// ---------------------------------------------------------------------------

/// Chemistry totals for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChemistryScore {
    /// Sum of connection points over edges with both endpoints occupied.
    pub connection_score: i32,
    /// Sum of dot points over occupied slots.
    pub dot_score: i32,
    pub total: i32,
}

/// Score a board's chemistry: each adjacency edge counted once, plus every
/// occupied slot's dot.
pub fn chemistry_score(board: &Board) -> ChemistryScore {
    let mut connection_score = 0;
    for &(a, b) in &ADJACENCY {
        if let (Some(pa), Some(pb)) = (board.get(a), board.get(b)) {
            connection_score += connection_color(pa, pb).connection_points();
        }
    }

    let mut dot_score = 0;
    for slot_id in 0..SLOT_COUNT {
        if let Some(color) = dot_color(board, slot_id) {
            dot_score += color.dot_points();
        }
    }

    ChemistryScore {
        connection_score,
        dot_score,
        total: connection_score + dot_score,
    }
}

// ---------------------------------------------------------------------------
// Display details
// ---------------------------------------------------------------------------

/// One adjacency edge's classification, for rendering. `color` is `None`
/// when either endpoint is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDetail {
    pub slot_a: usize,
    pub slot_b: usize,
    pub color: Option<LinkColor>,
}

/// One slot's dot classification, for rendering. `color` is `None` for an
/// empty slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotDetail {
    pub slot: usize,
    pub color: Option<LinkColor>,
}

/// Classification of every adjacency edge, in edge-list order.
pub fn connection_details(board: &Board) -> Vec<ConnectionDetail> {
    ADJACENCY
        .iter()
        .map(|&(a, b)| {
            let color = match (board.get(a), board.get(b)) {
                (Some(pa), Some(pb)) => Some(connection_color(pa, pb)),
                _ => None,
            };
            ConnectionDetail { slot_a: a, slot_b: b, color }
        })
        .collect()
}

/// Classification of every slot's dot, in slot order.
pub fn dot_details(board: &Board) -> Vec<DotDetail> {
    (0..SLOT_COUNT)
        .map(|slot| DotDetail { slot, color: dot_color(board, slot) })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
