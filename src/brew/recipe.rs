//! Validated ingredient recipe

use crate::catalog::{self, Ingredient};
use crate::error::RecipeError;

/// Ingredients per full recipe
pub const RECIPE_SIZE: usize = 3;

/// Fewest ingredients a creature can be built from
pub const MIN_RECIPE_SIZE: usize = 2;

/// Catalog ingredients in the order the player added them.
///
/// Holding one proves the ids are known and there are enough of them for
/// name synthesis and color assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    ingredients: Vec<&'static Ingredient>,
}

impl Recipe {
    /// Validate a list of ids (2 or 3, duplicates allowed)
    pub fn new<S: AsRef<str>>(ids: &[S]) -> Result<Self, RecipeError> {
        if !(MIN_RECIPE_SIZE..=RECIPE_SIZE).contains(&ids.len()) {
            return Err(RecipeError::WrongLength(ids.len()));
        }
        let ingredients = ids
            .iter()
            .map(|id| {
                let id = id.as_ref();
                catalog::lookup(id).ok_or_else(|| RecipeError::UnknownIngredient(id.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { ingredients })
    }

    pub fn ingredients(&self) -> &[&'static Ingredient] {
        &self.ingredients
    }

    /// Ids in the order they were added
    pub fn ids(&self) -> Vec<&'static str> {
        self.ingredients.iter().map(|ing| ing.id).collect()
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}
