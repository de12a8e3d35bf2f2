// Board model: the fixed 9-cell grid and the immutable board value.

pub mod board;
pub mod slot;

pub use board::Board;
pub use slot::{neighbors, Slot, SlotKind, ADJACENCY, SLOTS, SLOT_COUNT};
