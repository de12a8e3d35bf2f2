// Static player catalog: the read-only reference dataset the advisor draws
// from. Every draftable card is a (position, rarity, identity) record; all
// rarity variants of the same base identity are interchangeable for the
// "already seen" rule, so the catalog exposes base-key grouping alongside
// plain lookups.

use std::collections::HashSet;
use std::fmt;
use std::io::Read;

use serde::{Deserialize, Serialize};

/// Base keys of every player identity already offered or picked. Monotonic:
/// entries are only ever added for the life of a draft.
pub type SeenSet = HashSet<String>;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("CSV error in player data: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown position label `{0}`")]
    UnknownPosition(String),

    #[error("rarity tier {0} out of range (expected 1-5)")]
    InvalidRarity(u8),
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// Roster positions used by the grid's acceptance filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Quarterback,
    RunningBack,
    WideReceiver,
    TightEnd,
}

impl Position {
    /// Parse a position label ("QB", "RB", "WR", "TE") into a Position.
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "QB" => Some(Position::Quarterback),
            "RB" => Some(Position::RunningBack),
            "WR" => Some(Position::WideReceiver),
            "TE" => Some(Position::TightEnd),
            _ => None,
        }
    }

    /// Return the display string for this position.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::Quarterback => "QB",
            Position::RunningBack => "RB",
            Position::WideReceiver => "WR",
            Position::TightEnd => "TE",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

// ---------------------------------------------------------------------------
// Rarity
// ---------------------------------------------------------------------------

/// Card rarity tier. Talent value is a pure function of the tier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Rarity {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Hero,
}

impl Rarity {
    /// All tiers, lowest first. Iteration order is relied on by the
    /// expectation estimator's per-tier pool breakdown.
    pub const ALL: [Rarity; 5] = [
        Rarity::Bronze,
        Rarity::Silver,
        Rarity::Gold,
        Rarity::Platinum,
        Rarity::Hero,
    ];

    /// Numeric tier, 1 (Bronze) through 5 (Hero).
    pub fn tier(&self) -> u8 {
        match self {
            Rarity::Bronze => 1,
            Rarity::Silver => 2,
            Rarity::Gold => 3,
            Rarity::Platinum => 4,
            Rarity::Hero => 5,
        }
    }

    /// Parse a numeric tier back into a Rarity.
    pub fn from_tier(tier: u8) -> Option<Self> {
        match tier {
            1 => Some(Rarity::Bronze),
            2 => Some(Rarity::Silver),
            3 => Some(Rarity::Gold),
            4 => Some(Rarity::Platinum),
            5 => Some(Rarity::Hero),
            _ => None,
        }
    }

    /// Talent points contributed by a card of this tier.
    pub fn talent(&self) -> i32 {
        match self {
            Rarity::Bronze => 3,
            Rarity::Silver => 5,
            Rarity::Gold => 8,
            Rarity::Platinum => 11,
            Rarity::Hero => 15,
        }
    }

    /// Human-readable tier name.
    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Bronze => "Bronze",
            Rarity::Silver => "Silver",
            Rarity::Gold => "Gold",
            Rarity::Platinum => "Platinum",
            Rarity::Hero => "Hero",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// One draftable card. Immutable value record; constructed only by the
/// catalog loader, never by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,
    pub rarity: Rarity,
    /// First-name initial, uppercase.
    pub initial: String,
    /// Lowercase surname as it appears in the dataset.
    pub name: String,
    /// Division code, e.g. "AE" for AFC East.
    pub division: String,
    /// Team code, e.g. "KC".
    pub team: String,
    /// Draft-class year (two-digit, e.g. 18 for 2018).
    pub draft_year: u16,
}

impl Player {
    /// Talent points for this card (pure function of rarity).
    pub fn talent(&self) -> i32 {
        self.rarity.talent()
    }

    /// Base identity key shared by every rarity variant of the same player.
    /// Once any variant is offered or picked, all variants are out of the
    /// pool.
    pub fn base_key(&self) -> String {
        format!("{}_{}_{}", self.position.display_str(), self.initial, self.name)
    }

    /// Display name, e.g. "P. Mahomes".
    pub fn display_name(&self) -> String {
        format!("{}. {}", self.initial, capitalize(&self.name))
    }

    /// Display name with rarity, e.g. "P. Mahomes (Hero)" — the string the
    /// search helper matches against.
    pub fn search_name(&self) -> String {
        format!("{} ({})", self.display_name(), self.rarity.label())
    }
}

/// Uppercase the first letter of each whitespace-separated word.
fn capitalize(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Raw CSV serde struct (private)
// ---------------------------------------------------------------------------

/// One row of the embedded player dataset.
#[derive(Debug, Deserialize)]
struct RawPlayerRow {
    pos: String,
    rarity: u8,
    initial: String,
    name: String,
    div: String,
    team: String,
    draft_year: u16,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The full, order-stable player dataset.
#[derive(Debug, Clone)]
pub struct Catalog {
    players: Vec<Player>,
}

impl Catalog {
    /// Load the dataset compiled into the binary.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        Self::from_csv_reader(include_str!("../data/players.csv").as_bytes())
    }

    /// Load a catalog from any CSV source with the standard column layout
    /// (pos, rarity, initial, name, div, team, draft_year).
    pub fn from_csv_reader<R: Read>(rdr: R) -> Result<Self, CatalogError> {
        let mut reader = csv::Reader::from_reader(rdr);
        let mut players = Vec::new();
        for result in reader.deserialize::<RawPlayerRow>() {
            let raw = result?;
            let position = Position::from_str_pos(&raw.pos)
                .ok_or_else(|| CatalogError::UnknownPosition(raw.pos.clone()))?;
            let rarity =
                Rarity::from_tier(raw.rarity).ok_or(CatalogError::InvalidRarity(raw.rarity))?;
            players.push(Player {
                position,
                rarity,
                initial: raw.initial.trim().to_uppercase(),
                name: raw.name.trim().to_string(),
                division: raw.div.trim().to_string(),
                team: raw.team.trim().to_string(),
                draft_year: raw.draft_year,
            });
        }
        Ok(Catalog { players })
    }

    /// All players, in dataset order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// All players at a given position, in dataset order.
    pub fn by_position(&self, position: Position) -> Vec<&Player> {
        self.players.iter().filter(|p| p.position == position).collect()
    }

    /// Every rarity variant sharing the given base key.
    pub fn variants(&self, base_key: &str) -> Vec<&Player> {
        self.players.iter().filter(|p| p.base_key() == base_key).collect()
    }

    /// Case-insensitive search over display name, team code, and rarity
    /// label. Capped at 20 results for dropdown-style consumers.
    pub fn search(&self, query: &str) -> Vec<&Player> {
        let q = query.to_lowercase();
        let q = q.trim();
        if q.is_empty() {
            return Vec::new();
        }
        self.players
            .iter()
            .filter(|p| {
                p.search_name().to_lowercase().contains(q)
                    || p.team.to_lowercase().contains(q)
                    || p.rarity.label().to_lowercase().contains(q)
            })
            .take(20)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Display-name lookups
// ---------------------------------------------------------------------------

/// Full division name for a division code.
pub fn division_name(code: &str) -> Option<&'static str> {
    match code {
        "AE" => Some("AFC East"),
        "AN" => Some("AFC North"),
        "AS" => Some("AFC South"),
        "AW" => Some("AFC West"),
        "NE" => Some("NFC East"),
        "NN" => Some("NFC North"),
        "NS" => Some("NFC South"),
        "NW" => Some("NFC West"),
        _ => None,
    }
}

/// Full team name for a team code.
pub fn team_name(code: &str) -> Option<&'static str> {
    match code {
        "ARI" => Some("Cardinals"),
        "ATL" => Some("Falcons"),
        "BAL" => Some("Ravens"),
        "BUF" => Some("Bills"),
        "CAR" => Some("Panthers"),
        "CHI" => Some("Bears"),
        "CIN" => Some("Bengals"),
        "CLE" => Some("Browns"),
        "DAL" => Some("Cowboys"),
        "DEN" => Some("Broncos"),
        "DET" => Some("Lions"),
        "GB" => Some("Packers"),
        "HOU" => Some("Texans"),
        "IND" => Some("Colts"),
        "JAX" => Some("Jaguars"),
        "KC" => Some("Chiefs"),
        "LAC" => Some("Chargers"),
        "LAR" => Some("Rams"),
        "LV" => Some("Raiders"),
        "MIA" => Some("Dolphins"),
        "MIN" => Some("Vikings"),
        "NE" => Some("Patriots"),
        "NO" => Some("Saints"),
        "NYG" => Some("Giants"),
        "NYJ" => Some("Jets"),
        "PHI" => Some("Eagles"),
        "PIT" => Some("Steelers"),
        "SEA" => Some("Seahawks"),
        "SF" => Some("49ers"),
        "TB" => Some("Buccaneers"),
        "TEN" => Some("Titans"),
        "WAS" => Some("Commanders"),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
