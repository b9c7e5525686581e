//! Seating tables.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Physical table shape. Cosmetic only; the seating engine ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableShape {
    /// Round banquet table.
    Round,
    /// Rectangular table.
    Rectangular,
    /// Oval table.
    Oval,
}

impl TableShape {
    /// Returns the wire discriminator string for this shape.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Round => "round",
            Self::Rectangular => "rectangular",
            Self::Oval => "oval",
        }
    }
}

/// Table category used for seating preference.
///
/// Families with a VIP member prefer `Vip` tables; families with an
/// elderly member prefer `Family` tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableCategory {
    /// Head tables reserved for VIP families.
    Vip,
    /// Tables close to the stage for immediate family.
    Family,
    /// Tables for friends of the couple.
    Friends,
    /// Unreserved seating.
    General,
}

impl TableCategory {
    /// Returns the wire discriminator string for this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vip => "vip",
            Self::Family => "family",
            Self::Friends => "friends",
            Self::General => "general",
        }
    }
}

/// A capacity-bounded seating table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatingTable {
    /// Unique table identifier.
    pub id: Uuid,
    /// Table display name (e.g. `"T1"`).
    pub name: String,
    /// Number of seats. Validated `> 0` at the API boundary.
    pub capacity: u32,
    /// Physical shape.
    pub shape: TableShape,
    /// Seating preference category.
    pub category: TableCategory,
}
