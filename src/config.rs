// Draft odds configuration (rarity draw probabilities per round).
//
// The table is a fixed game constant, compiled in as the default, but it can
// be overridden from a TOML document for rule changes between game seasons.
// Every row must hold five probabilities (Hero, Platinum, Gold, Silver,
// Bronze) summing to 1.0.

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::Rarity;

/// Number of draft rounds in a full game.
pub const FINAL_ROUND: u32 = 9;

/// Tolerance for the per-round probability-sum check.
const SUM_TOLERANCE: f64 = 1e-6;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse odds config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation error for field `{field}`: {message}")]
    Validation { field: String, message: String },
}

// ---------------------------------------------------------------------------
// TOML structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for an odds override document.
#[derive(Debug, Deserialize)]
struct OddsFile {
    odds: OddsSection,
}

#[derive(Debug, Deserialize)]
struct OddsSection {
    rounds: Vec<[f64; 5]>,
}

// ---------------------------------------------------------------------------
// DraftOdds
// ---------------------------------------------------------------------------

/// Default draw odds per round. Columns are Hero, Platinum, Gold, Silver,
/// Bronze; row index 0 is round 1.
const DEFAULT_ROUND_ODDS: [[f64; 5]; 9] = [
    [0.02, 0.80, 0.18, 0.00, 0.00],
    [0.02, 0.50, 0.45, 0.03, 0.00],
    [0.02, 0.10, 0.65, 0.23, 0.00],
    [0.02, 0.08, 0.45, 0.40, 0.05],
    [0.02, 0.08, 0.25, 0.60, 0.05],
    [0.02, 0.07, 0.10, 0.50, 0.31],
    [0.02, 0.07, 0.10, 0.41, 0.40],
    [0.02, 0.05, 0.07, 0.21, 0.65],
    [0.02, 0.04, 0.06, 0.18, 0.70],
];

/// Round-indexed rarity draw probabilities for rounds 1 through 9.
#[derive(Debug, Clone)]
pub struct DraftOdds {
    rounds: [[f64; 5]; 9],
}

impl Default for DraftOdds {
    fn default() -> Self {
        DraftOdds {
            rounds: DEFAULT_ROUND_ODDS,
        }
    }
}

impl DraftOdds {
    /// Parse an odds override from a TOML document:
    ///
    /// ```toml
    /// [odds]
    /// rounds = [
    ///     [0.02, 0.80, 0.18, 0.00, 0.00],
    ///     # ... nine rows total
    /// ]
    /// ```
    pub fn from_toml_str(doc: &str) -> Result<Self, ConfigError> {
        let file: OddsFile = toml::from_str(doc)?;
        if file.odds.rounds.len() != FINAL_ROUND as usize {
            return Err(ConfigError::Validation {
                field: "odds.rounds".into(),
                message: format!(
                    "expected {} rounds, got {}",
                    FINAL_ROUND,
                    file.odds.rounds.len()
                ),
            });
        }
        let mut rounds = [[0.0; 5]; 9];
        for (i, row) in file.odds.rounds.iter().enumerate() {
            let sum: f64 = row.iter().sum();
            if (sum - 1.0).abs() > SUM_TOLERANCE {
                return Err(ConfigError::Validation {
                    field: format!("odds.rounds[{i}]"),
                    message: format!("probabilities sum to {sum}, expected 1.0"),
                });
            }
            rounds[i] = *row;
        }
        Ok(DraftOdds { rounds })
    }

    /// The five probabilities (Hero..Bronze) for a round, or None when the
    /// round has no odds defined (outside 1-9).
    pub fn for_round(&self, round: u32) -> Option<&[f64; 5]> {
        if (1..=FINAL_ROUND).contains(&round) {
            Some(&self.rounds[(round - 1) as usize])
        } else {
            None
        }
    }

    /// Probability of drawing a card of the given rarity in a round. Zero
    /// for rounds outside 1-9.
    pub fn probability(&self, round: u32, rarity: Rarity) -> f64 {
        match self.for_round(round) {
            Some(row) => row[(5 - rarity.tier()) as usize],
            None => 0.0,
        }
    }

    /// Expected talent of a single random draw in the given round (the
    /// odds-weighted sum of tier talent values). Zero outside rounds 1-9.
    pub fn expected_talent(&self, round: u32) -> f64 {
        Rarity::ALL
            .iter()
            .map(|&r| self.probability(round, r) * r.talent() as f64)
            .sum()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
