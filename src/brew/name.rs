//! Creature name synthesis
//!
//! Unlike rarity, names depend on the order ingredients went in: the
//! syllable draws walk the recipe in the order it was added.

use super::fingerprint::fingerprint;
use super::recipe::Recipe;
use super::sequence::Sequence;

/// Characters of the third syllable appended as a suffix
const SUFFIX_LEN: usize = 2;

/// Build a pronounceable name for a recipe.
///
/// One syllable is drawn per ingredient, then one more draw decides whether
/// the third syllable contributes a short suffix.
pub fn synthesize_name(recipe: &Recipe) -> String {
    let mut seq = Sequence::new(fingerprint(&recipe.ids()).into());

    let parts: Vec<&str> = recipe
        .ingredients()
        .iter()
        .map(|ing| *seq.pick(ing.syllables))
        .collect();

    let mut name = format!("{}{}", parts[0], parts[1].to_lowercase());
    if seq.next_f64() > 0.5 {
        if let Some(third) = parts.get(2) {
            name.extend(third.to_lowercase().chars().take(SUFFIX_LEN));
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_of(ids: &[&str]) -> String {
        synthesize_name(&Recipe::new(ids).unwrap())
    }

    #[test]
    fn test_known_names() {
        assert_eq!(name_of(&["fire", "moon", "thunder"]), "Flamnyxza");
        assert_eq!(name_of(&["fire", "fire", "star"]), "Ignblazeno");
        assert_eq!(name_of(&["ocean", "ocean", "ocean"]), "Martidal");
        assert_eq!(name_of(&["star", "star", "star"]), "Novanovaas");
    }

    #[test]
    fn test_order_dependent() {
        assert_eq!(name_of(&["moon", "fire", "thunder"]), "Lumpyrza");
        assert_eq!(name_of(&["thunder", "moon", "fire"]), "Stormnyxpy");
    }

    #[test]
    fn test_repeatable() {
        let ids = ["forest", "star", "moon"];
        assert_eq!(name_of(&ids), "Leafastlu");
        assert_eq!(name_of(&ids), name_of(&ids));
    }

    #[test]
    fn test_two_ingredient_name_has_no_suffix_source() {
        let name = name_of(&["moon", "star"]);
        let moon = crate::catalog::lookup("moon").unwrap();
        assert!(moon.syllables.iter().any(|s| name.starts_with(s)));
        assert!(name[1..].chars().all(|c| c.is_lowercase()));
    }
}
