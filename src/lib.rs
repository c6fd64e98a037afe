//! Critter Kitchen - mix ingredients, reveal a critter
//!
//! Core modules:
//! - `brew`: Deterministic creature generation (fingerprint, sequence, rarity, names)
//! - `catalog`: Static ingredient and creature part tables
//! - `bestiary`: Collected critters, deduplicated and persisted
//! - `session`: Recipe slots and the mix/reveal flow
//! - `cauldron`: Cosmetic liquid color and particle effects
//! - `audio`: Procedural sound effects
//! - `settings`: Player preferences

pub mod audio;
pub mod bestiary;
pub mod brew;
pub mod catalog;
pub mod cauldron;
pub mod error;
pub mod session;
pub mod settings;

pub use bestiary::{Bestiary, Collected, GridCell};
pub use brew::{Creature, Rarity, Recipe, build_creature, fingerprint, rarity, synthesize_name};
pub use error::{BestiaryError, RecipeError, SessionError};
pub use session::{MixPhase, MixSession};
pub use settings::{QualityPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Frame interval the cauldron effects are tuned for (~60 Hz)
    pub const FRAME_MS: u32 = 16;
}

/// Every distinct recipe (multiset of three catalog ids), in catalog order
pub fn all_recipes() -> Vec<[&'static str; brew::RECIPE_SIZE]> {
    let ids: Vec<&str> = catalog::INGREDIENTS.iter().map(|i| i.id).collect();
    let mut recipes = Vec::new();
    for a in 0..ids.len() {
        for b in a..ids.len() {
            for c in b..ids.len() {
                recipes.push([ids[a], ids[b], ids[c]]);
            }
        }
    }
    recipes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_recipes_unique_fingerprints() {
        let recipes = all_recipes();
        assert_eq!(recipes.len(), 56);
        let mut fps: Vec<u32> = recipes.iter().map(|r| fingerprint(r)).collect();
        fps.sort_unstable();
        fps.dedup();
        assert_eq!(fps.len(), 56);
    }
}
