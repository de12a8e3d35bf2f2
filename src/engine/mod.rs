// The advisor core: chemistry and talent scoring, arrangement search, and
// expected-value estimation. Everything here is stateless and synchronous;
// callers own the board, round counter, and seen-set.

pub mod chemistry;
pub mod expectation;
pub mod scoring;
pub mod search;
