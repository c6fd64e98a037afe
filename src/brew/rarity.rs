//! Rarity classification
//!
//! Curated combo tables first (legendary, then rare), then a fingerprint
//! modulo fallback that makes roughly one in five other recipes Uncommon.

use serde::{Deserialize, Serialize};

use super::fingerprint::fingerprint;

/// Rarity tier. Serialized as its tier number (0-3) to match saved bestiaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Legendary = 3,
}

impl Rarity {
    pub const ALL: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Legendary,
    ];

    pub fn tier(self) -> u8 {
        self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Badge color for the reveal panel
    pub fn color(&self) -> &'static str {
        match self {
            Rarity::Common => "#aaa",
            Rarity::Uncommon => "#4ac3ff",
            Rarity::Rare => "#b44aff",
            Rarity::Legendary => "#ffd700",
        }
    }

    /// Rare and Legendary creatures always wear an accessory
    pub fn guarantees_accessory(self) -> bool {
        self >= Rarity::Rare
    }
}

impl From<Rarity> for u8 {
    fn from(rarity: Rarity) -> u8 {
        rarity.tier()
    }
}

impl TryFrom<u8> for Rarity {
    type Error = String;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        Rarity::ALL
            .get(usize::from(tier))
            .copied()
            .ok_or_else(|| format!("invalid rarity tier {}", tier))
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comma-joined combo key, e.g. `"fire,moon,thunder"`
pub type Combo = &'static str;

/// Curated combo tables.
///
/// A recipe matches an entry when its sorted, comma-joined ids equal the key
/// exactly. Keys that are not themselves sorted never match.
#[derive(Debug, Clone, Copy)]
pub struct RarityTable<'a> {
    pub legendary: &'a [Combo],
    pub rare: &'a [Combo],
}

/// Every fifth fallback fingerprint is Uncommon
pub const UNCOMMON_MODULUS: u32 = 5;

impl RarityTable<'static> {
    /// The shipped combo tables
    pub const STANDARD: RarityTable<'static> = RarityTable {
        legendary: &[
            "fire,moon,thunder",
            "forest,ocean,star",
            "fire,forest,ocean",
            "moon,star,thunder",
        ],
        rare: &[
            "fire,fire,star",
            "moon,moon,ocean",
            "forest,forest,thunder",
            "fire,ocean,star",
            "moon,forest,thunder",
        ],
    };
}

impl RarityTable<'_> {
    /// Classify a list of ids. Order never matters; multiplicity does.
    pub fn classify<S: AsRef<str>>(&self, ids: &[S]) -> Rarity {
        let key = sorted_key(ids);
        let listed = |table: &[Combo]| table.iter().any(|combo| *combo == key);

        if listed(self.legendary) {
            Rarity::Legendary
        } else if listed(self.rare) {
            Rarity::Rare
        } else if fingerprint(ids) % UNCOMMON_MODULUS == 0 {
            Rarity::Uncommon
        } else {
            Rarity::Common
        }
    }
}

/// Classify against the standard tables
pub fn rarity<S: AsRef<str>>(ids: &[S]) -> Rarity {
    RarityTable::STANDARD.classify(ids)
}

fn sorted_key<S: AsRef<str>>(ids: &[S]) -> String {
    let mut sorted: Vec<&str> = ids.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();
    sorted.join(",")
}
