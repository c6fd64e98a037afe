//! Deterministic creature generation ("brewing")
//!
//! Everything a recipe turns into lives here. This module must stay pure:
//! - No shared or global RNG, each call seeds its own `Sequence`
//! - No platform, storage or rendering dependencies
//! - Same ingredients in, bit-identical creature out

pub mod creature;
pub mod fingerprint;
pub mod markings;
pub mod name;
pub mod rarity;
pub mod recipe;
pub mod sequence;

pub use creature::{Creature, build_creature};
pub use fingerprint::{Fingerprint, fingerprint};
pub use markings::{Markings, Spot};
pub use name::synthesize_name;
pub use rarity::{Combo, Rarity, RarityTable, rarity};
pub use recipe::{MIN_RECIPE_SIZE, RECIPE_SIZE, Recipe};
pub use sequence::Sequence;
