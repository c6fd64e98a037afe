//! Creature assembly
//!
//! Trait draws come from one sequence seeded with the fingerprint, in this
//! fixed order: body, eyes, appendage, accessory. Changing the order changes
//! every creature already in a player's bestiary.

use serde::{Deserialize, Serialize};

use super::fingerprint::{Fingerprint, fingerprint};
use super::markings::Markings;
use super::name::synthesize_name;
use super::rarity::{Rarity, rarity};
use super::recipe::Recipe;
use super::sequence::Sequence;
use crate::catalog::{self, Accessory, Appendage, BodyShape, DESCRIPTIONS, EyeStyle, Ingredient};

/// A generated creature. Field names follow the saved bestiary format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creature {
    /// Ingredient ids in the order they were added
    pub ids: Vec<String>,
    pub name: String,
    pub rarity: Rarity,
    pub body_shape: BodyShape,
    pub eye_style: EyeStyle,
    pub appendage: Appendage,
    pub accessory: Accessory,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    #[serde(rename = "hash")]
    pub fingerprint: Fingerprint,
    #[serde(rename = "desc")]
    pub description: String,
}

impl Creature {
    /// Spot layout for drawing, derived from the fingerprint
    pub fn markings(&self) -> Markings {
        Markings::generate(self.fingerprint)
    }

    /// Catalog entries for the recipe, in the order added. Ids the catalog
    /// no longer knows are skipped.
    pub fn ingredients(&self) -> impl Iterator<Item = &'static Ingredient> + '_ {
        self.ids.iter().filter_map(|id| catalog::lookup(id))
    }
}

/// Build the creature a recipe produces. Same recipe, same creature.
pub fn build_creature(recipe: &Recipe) -> Creature {
    let ids = recipe.ids();
    let fingerprint = fingerprint(&ids);
    let rarity = rarity(&ids);
    let name = synthesize_name(recipe);

    let mut seq = Sequence::new(fingerprint.into());
    let body_shape = *seq.pick(BodyShape::ALL);
    let eye_style = *seq.pick(EyeStyle::ALL);
    let appendage = *seq.pick(Appendage::ALL);
    let accessory = if rarity.guarantees_accessory() {
        *seq.pick(&Accessory::ALL[1..])
    } else {
        *seq.pick(Accessory::ALL)
    };

    let ingredients = recipe.ingredients();
    let primary = ingredients[0].color;
    let secondary = ingredients[1].color;
    let accent = ingredients.get(2).map_or(primary, |ing| ing.color);

    let description = DESCRIPTIONS[fingerprint as usize % DESCRIPTIONS.len()];

    log::debug!(
        "Brewed {} ({}) from {:?} [fingerprint {}]",
        name,
        rarity,
        ids,
        fingerprint
    );

    Creature {
        ids: ids.iter().map(|id| id.to_string()).collect(),
        name,
        rarity,
        body_shape,
        eye_style,
        appendage,
        accessory,
        primary_color: primary.to_string(),
        secondary_color: secondary.to_string(),
        accent_color: accent.to_string(),
        fingerprint,
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::INGREDIENTS;
    use proptest::prelude::*;

    fn brew(ids: &[&str]) -> Creature {
        build_creature(&Recipe::new(ids).unwrap())
    }

    #[test]
    fn test_legendary_creature() {
        let c = brew(&["fire", "moon", "thunder"]);
        assert_eq!(c.name, "Flamnyxza");
        assert_eq!(c.rarity, Rarity::Legendary);
        assert_eq!(c.body_shape, BodyShape::Squid);
        assert_eq!(c.eye_style, EyeStyle::Multi);
        assert_eq!(c.appendage, Appendage::Wings);
        assert_eq!(c.accessory, Accessory::Glasses);
        assert_eq!(c.fingerprint, 915_608_337);
        assert_eq!(c.description, DESCRIPTIONS[7]);
        assert_eq!(c.primary_color, "#ff4a4a");
        assert_eq!(c.secondary_color, "#c4b5fd");
        assert_eq!(c.accent_color, "#ffe44a");
    }

    #[test]
    fn test_common_creature() {
        let c = brew(&["ocean", "ocean", "ocean"]);
        assert_eq!(c.rarity, Rarity::Common);
        assert_eq!(c.body_shape, BodyShape::Winged);
        assert_eq!(c.eye_style, EyeStyle::Cat);
        assert_eq!(c.appendage, Appendage::Tentacles);
        assert_eq!(c.accessory, Accessory::Crown);
        assert_eq!(c.description, DESCRIPTIONS[6]);
    }

    #[test]
    fn test_rare_creature() {
        let c = brew(&["fire", "fire", "star"]);
        assert_eq!(c.rarity, Rarity::Rare);
        assert_eq!(c.body_shape, BodyShape::Winged);
        assert_eq!(c.accessory, Accessory::Horns);
        assert_eq!(c.accent_color, "#ffd700");
    }

    #[test]
    fn test_traits_ignore_order_but_name_does_not() {
        let a = brew(&["fire", "moon", "thunder"]);
        let b = brew(&["moon", "fire", "thunder"]);
        assert_eq!(a.fingerprint, b.fingerprint);
        assert_eq!(a.rarity, b.rarity);
        assert_eq!(a.body_shape, b.body_shape);
        assert_eq!(a.accessory, b.accessory);
        assert_ne!(a.name, b.name);
        assert_eq!(b.ids, vec!["moon", "fire", "thunder"]);
        // Colors follow the order added
        assert_eq!(b.primary_color, "#c4b5fd");
    }

    #[test]
    fn test_accent_falls_back_to_primary() {
        let c = brew(&["forest", "ocean"]);
        assert_eq!(c.primary_color, "#4aff91");
        assert_eq!(c.secondary_color, "#4ac3ff");
        assert_eq!(c.accent_color, "#4aff91");
    }

    #[test]
    fn test_saved_format() {
        let c = brew(&["fire", "moon", "thunder"]);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["hash"], 915_608_337);
        assert_eq!(json["rarity"], 3);
        assert_eq!(json["bodyShape"], "squid");
        assert_eq!(json["accentColor"], "#ffe44a");
        assert_eq!(json["desc"], DESCRIPTIONS[7]);
        let back: Creature = serde_json::from_value(json).unwrap();
        assert_eq!(back, c);
    }

    fn ingredient_ids() -> impl Strategy<Value = Vec<&'static str>> {
        prop::collection::vec(0usize..INGREDIENTS.len(), 3)
            .prop_map(|idx| idx.into_iter().map(|i| INGREDIENTS[i].id).collect())
    }

    #[test]
    fn test_ingredients_follow_ids() {
        let c = brew(&["thunder", "moon", "thunder"]);
        let emoji: Vec<&str> = c.ingredients().map(|ing| ing.emoji).collect();
        assert_eq!(emoji, ["⚡", "🟣", "⚡"]);

        let mut stale = c.clone();
        stale.ids.push("slime".into());
        assert_eq!(stale.ingredients().count(), 3);
    }

    proptest! {
        #[test]
        fn prop_build_is_deterministic(ids in ingredient_ids()) {
            prop_assert_eq!(brew(&ids), brew(&ids));
        }

        #[test]
        fn prop_rare_always_accessorized(ids in ingredient_ids()) {
            let c = brew(&ids);
            if c.rarity >= Rarity::Rare {
                prop_assert_ne!(c.accessory, Accessory::None);
            }
        }

        #[test]
        fn prop_description_indexed_by_fingerprint(ids in ingredient_ids()) {
            let c = brew(&ids);
            prop_assert_eq!(
                c.description.as_str(),
                DESCRIPTIONS[c.fingerprint as usize % DESCRIPTIONS.len()]
            );
        }
    }
}
