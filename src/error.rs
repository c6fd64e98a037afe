//! Error types for the fallible edges around the generation core

use thiserror::Error;

/// A list of ids that cannot be brewed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipeError {
    #[error("a recipe needs 2 or 3 ingredients, got {0}")]
    WrongLength(usize),

    #[error("unknown ingredient \"{0}\"")]
    UnknownIngredient(String),
}

/// A session action that is not allowed in the current phase
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("all recipe slots are filled")]
    RecipeFull,

    #[error("the cauldron is busy")]
    Busy,

    #[error("recipe needs {needed} ingredients, has {filled}")]
    NotReady { filled: usize, needed: usize },

    #[error("no creature is waiting to be collected")]
    NothingRevealed,

    #[error(transparent)]
    Recipe(#[from] RecipeError),
}

/// Bestiary (de)serialization failure
#[derive(Debug, Error)]
pub enum BestiaryError {
    #[error("malformed bestiary data: {0}")]
    Json(#[from] serde_json::Error),
}
