// Grid slot definitions and the fixed adjacency graph.
//
// Layout:
//   Row 1: [1][1] RB   [1][2] WR
//   Row 2: [2][1] FLX  [2][2] QB  [2][3] QB  [2][4] FLX
//   Row 3: [3][1] WR   [3][2] TE  [3][3] RB
//
// Slot ids, acceptance sets, and the 15-edge adjacency list are game
// constants fixed at process start.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Position;

/// Number of cells in the grid.
pub const SLOT_COUNT: usize = 9;

// ---------------------------------------------------------------------------
// Slot kinds
// ---------------------------------------------------------------------------

/// The label printed on a grid cell. FLX cells accept several positions;
/// every other kind accepts exactly its own position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKind {
    RunningBack,
    WideReceiver,
    Flex,
    Quarterback,
    TightEnd,
}

impl SlotKind {
    pub fn label(&self) -> &'static str {
        match self {
            SlotKind::RunningBack => "RB",
            SlotKind::WideReceiver => "WR",
            SlotKind::Flex => "FLX",
            SlotKind::Quarterback => "QB",
            SlotKind::TightEnd => "TE",
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Slot table
// ---------------------------------------------------------------------------

/// One grid cell: id, display coordinates, kind, and the positions it
/// accepts.
#[derive(Debug, Clone, Copy)]
pub struct Slot {
    pub id: usize,
    pub row: u8,
    pub col: u8,
    pub kind: SlotKind,
    accepted: &'static [Position],
}

impl Slot {
    /// Whether a player of the given position may occupy this slot.
    pub fn accepts(&self, position: Position) -> bool {
        self.accepted.contains(&position)
    }

    /// The positions this slot accepts.
    pub fn accepted_positions(&self) -> &'static [Position] {
        self.accepted
    }
}

const RB_ONLY: &[Position] = &[Position::RunningBack];
const WR_ONLY: &[Position] = &[Position::WideReceiver];
const QB_ONLY: &[Position] = &[Position::Quarterback];
const TE_ONLY: &[Position] = &[Position::TightEnd];
const FLEX: &[Position] = &[
    Position::WideReceiver,
    Position::RunningBack,
    Position::TightEnd,
];

/// The nine cells, indexed by slot id.
pub const SLOTS: [Slot; SLOT_COUNT] = [
    Slot { id: 0, row: 1, col: 1, kind: SlotKind::RunningBack, accepted: RB_ONLY },
    Slot { id: 1, row: 1, col: 2, kind: SlotKind::WideReceiver, accepted: WR_ONLY },
    Slot { id: 2, row: 2, col: 1, kind: SlotKind::Flex, accepted: FLEX },
    Slot { id: 3, row: 2, col: 2, kind: SlotKind::Quarterback, accepted: QB_ONLY },
    Slot { id: 4, row: 2, col: 3, kind: SlotKind::Quarterback, accepted: QB_ONLY },
    Slot { id: 5, row: 2, col: 4, kind: SlotKind::Flex, accepted: FLEX },
    Slot { id: 6, row: 3, col: 1, kind: SlotKind::WideReceiver, accepted: WR_ONLY },
    Slot { id: 7, row: 3, col: 2, kind: SlotKind::TightEnd, accepted: TE_ONLY },
    Slot { id: 8, row: 3, col: 3, kind: SlotKind::RunningBack, accepted: RB_ONLY },
];

// ---------------------------------------------------------------------------
// Adjacency
// ---------------------------------------------------------------------------

/// Undirected slot-id pairs connected for chemistry scoring. Each edge
/// appears exactly once.
pub const ADJACENCY: [(usize, usize); 15] = [
    (0, 1),
    (0, 2),
    (0, 3),
    (1, 4),
    (1, 5),
    (2, 3),
    (2, 6),
    (3, 6),
    (3, 7),
    (4, 5),
    (4, 7),
    (4, 8),
    (5, 8),
    (6, 7),
    (7, 8),
];

/// All slots adjacent to the given slot, each listed once.
pub fn neighbors(slot_id: usize) -> Vec<usize> {
    let mut out = Vec::new();
    for &(a, b) in &ADJACENCY {
        if a == slot_id {
            out.push(b);
        }
        if b == slot_id {
            out.push(a);
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_ids_match_indices() {
        for (i, slot) in SLOTS.iter().enumerate() {
            assert_eq!(slot.id, i);
        }
    }

    #[test]
    fn acceptance_sets() {
        assert!(SLOTS[0].accepts(Position::RunningBack));
        assert!(!SLOTS[0].accepts(Position::Quarterback));
        assert!(SLOTS[3].accepts(Position::Quarterback));
        assert!(!SLOTS[3].accepts(Position::TightEnd));

        // FLX takes WR, RB, and TE but never QB.
        for flex in [2, 5] {
            assert!(SLOTS[flex].accepts(Position::WideReceiver));
            assert!(SLOTS[flex].accepts(Position::RunningBack));
            assert!(SLOTS[flex].accepts(Position::TightEnd));
            assert!(!SLOTS[flex].accepts(Position::Quarterback));
        }
    }

    #[test]
    fn adjacency_is_fifteen_unique_undirected_edges() {
        use std::collections::HashSet;
        let mut seen = HashSet::new();
        for &(a, b) in &ADJACENCY {
            assert!(a < SLOT_COUNT && b < SLOT_COUNT);
            assert_ne!(a, b);
            let key = (a.min(b), a.max(b));
            assert!(seen.insert(key), "duplicate edge ({a}, {b})");
        }
        assert_eq!(seen.len(), 15);
    }

    #[test]
    fn neighbors_lists_each_neighbor_once() {
        // Slot 3 (center-left QB) touches 0, 2, 6, 7.
        let mut n = neighbors(3);
        n.sort_unstable();
        assert_eq!(n, vec![0, 2, 6, 7]);

        // Slot 7 (TE) touches 3, 4, 6, 8.
        let mut n = neighbors(7);
        n.sort_unstable();
        assert_eq!(n, vec![3, 4, 6, 8]);
    }

    #[test]
    fn neighbors_symmetric() {
        for a in 0..SLOT_COUNT {
            for &b in &neighbors(a) {
                assert!(
                    neighbors(b).contains(&a),
                    "edge {a}-{b} is not symmetric"
                );
            }
        }
    }
}
