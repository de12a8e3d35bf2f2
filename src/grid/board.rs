// The board value: nine optional occupants, one per slot.
//
// The engine never mutates a board in place. Every transformation (place,
// swap) returns a new value; the caller owns the current board and decides
// which result to keep. Slot ids are pre-validated by callers; an
// out-of-range id is a programming error and panics.

use serde::{Deserialize, Serialize};

use crate::catalog::{Player, Position};
use crate::grid::slot::{SLOTS, SLOT_COUNT};

/// A 9-slot board. Cheap to clone; all search exploration works on copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    slots: [Option<Player>; SLOT_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Board {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// The occupant of a slot, if any.
    pub fn get(&self, slot_id: usize) -> Option<&Player> {
        self.slots[slot_id].as_ref()
    }

    /// Whether a player's position is accepted by the slot. Occupancy is not
    /// considered; callers combine this with `get` as needed.
    pub fn can_place(slot_id: usize, player: &Player) -> bool {
        SLOTS[slot_id].accepts(player.position)
    }

    /// A new board with the player seated at the slot (replacing any
    /// previous occupant).
    pub fn place(&self, slot_id: usize, player: Player) -> Board {
        let mut next = self.clone();
        next.slots[slot_id] = Some(player);
        next
    }

    /// A new board with the occupants of two slots exchanged.
    pub fn swap(&self, slot_a: usize, slot_b: usize) -> Board {
        let mut next = self.clone();
        next.slots.swap(slot_a, slot_b);
        next
    }

    /// A new board with a slot vacated.
    pub fn remove(&self, slot_id: usize) -> Board {
        let mut next = self.clone();
        next.slots[slot_id] = None;
        next
    }

    /// Ids of unoccupied slots, ascending. Search tie-breaking relies on
    /// this ordering being stable.
    pub fn empty_slots(&self) -> Vec<usize> {
        (0..SLOT_COUNT).filter(|&i| self.slots[i].is_none()).collect()
    }

    /// Ids of occupied slots, ascending.
    pub fn occupied_slots(&self) -> Vec<usize> {
        (0..SLOT_COUNT).filter(|&i| self.slots[i].is_some()).collect()
    }

    /// Empty slots that accept the given player, ascending.
    pub fn valid_slots(&self, player: &Player) -> Vec<usize> {
        (0..SLOT_COUNT)
            .filter(|&i| self.slots[i].is_none() && Self::can_place(i, player))
            .collect()
    }

    /// Occupants in slot order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.slots.iter().filter_map(|s| s.as_ref())
    }

    pub fn occupant_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.occupant_count() == SLOT_COUNT
    }

    /// Whether every occupant sits in a slot that accepts its position.
    /// Chain-swap exploration builds tentative boards and rejects the ones
    /// that fail this check.
    pub fn is_valid(&self) -> bool {
        (0..SLOT_COUNT).all(|i| match &self.slots[i] {
            Some(p) => Self::can_place(i, p),
            None => true,
        })
    }

    /// The union of accepted positions over all currently empty slots: the
    /// position categories the game can offer candidates for. Deduplicated,
    /// in first-encountered slot order.
    pub fn offered_positions(&self) -> Vec<Position> {
        let mut offered = Vec::new();
        for &slot_id in &self.empty_slots() {
            for &pos in SLOTS[slot_id].accepted_positions() {
                if !offered.contains(&pos) {
                    offered.push(pos);
                }
            }
        }
        offered
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Rarity;

    fn make_player(position: Position, name: &str) -> Player {
        Player {
            position,
            rarity: Rarity::Gold,
            initial: "T".into(),
            name: name.into(),
            division: "AE".into(),
            team: "BUF".into(),
            draft_year: 20,
        }
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_slots(), (0..SLOT_COUNT).collect::<Vec<_>>());
        assert!(board.occupied_slots().is_empty());
        assert_eq!(board.occupant_count(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn place_returns_new_value() {
        let board = Board::new();
        let qb = make_player(Position::Quarterback, "allen");
        let placed = board.place(3, qb.clone());

        // The source board is untouched.
        assert!(board.get(3).is_none());
        assert_eq!(placed.get(3), Some(&qb));
        assert_eq!(placed.occupied_slots(), vec![3]);
    }

    #[test]
    fn can_place_checks_acceptance() {
        let qb = make_player(Position::Quarterback, "allen");
        let te = make_player(Position::TightEnd, "kelce");
        assert!(Board::can_place(3, &qb));
        assert!(!Board::can_place(0, &qb));
        // TE fits its own slot and both FLX cells.
        assert!(Board::can_place(7, &te));
        assert!(Board::can_place(2, &te));
        assert!(Board::can_place(5, &te));
        assert!(!Board::can_place(1, &te));
    }

    #[test]
    #[should_panic]
    fn out_of_range_slot_panics() {
        let qb = make_player(Position::Quarterback, "allen");
        let _ = Board::new().place(9, qb);
    }

    #[test]
    fn valid_slots_skips_occupied() {
        let te = make_player(Position::TightEnd, "kelce");
        let board = Board::new().place(7, te.clone());
        let other_te = make_player(Position::TightEnd, "kittle");
        // Slot 7 taken, so only the FLX cells remain.
        assert_eq!(board.valid_slots(&other_te), vec![2, 5]);
    }

    #[test]
    fn swap_exchanges_occupants() {
        let rb_a = make_player(Position::RunningBack, "henry");
        let rb_b = make_player(Position::RunningBack, "barkley");
        let board = Board::new().place(0, rb_a.clone()).place(8, rb_b.clone());
        let swapped = board.swap(0, 8);
        assert_eq!(swapped.get(0), Some(&rb_b));
        assert_eq!(swapped.get(8), Some(&rb_a));
        // Source unchanged.
        assert_eq!(board.get(0), Some(&rb_a));
    }

    #[test]
    fn is_valid_detects_misplaced_occupant() {
        let qb = make_player(Position::Quarterback, "allen");
        // Force a QB into the RB slot by swapping through a legal seat.
        let board = Board::new().place(3, qb).swap(3, 0);
        assert!(!board.is_valid());
    }

    #[test]
    fn offered_positions_union_of_empty_slots() {
        let board = Board::new();
        let offered = board.offered_positions();
        // Empty board offers everything; slot order puts RB first, then WR
        // (slot 1), then FLX's TE contribution, then QB.
        assert_eq!(offered.len(), 4);
        assert_eq!(offered[0], Position::RunningBack);

        // Fill both QB cells: QB no longer offered.
        let qb_a = make_player(Position::Quarterback, "allen");
        let qb_b = make_player(Position::Quarterback, "mahomes");
        let board = board.place(3, qb_a).place(4, qb_b);
        assert!(!board.offered_positions().contains(&Position::Quarterback));
    }
}
