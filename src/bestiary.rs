//! Bestiary: the player's collection of discovered critters
//!
//! Append-only and keyed by fingerprint. Persisted to LocalStorage as a bare
//! JSON array of creatures, the same shape older saves used.

use serde::Serialize;

use crate::brew::{Creature, Fingerprint};
use crate::error::BestiaryError;

/// Outcome of offering a creature to the bestiary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collected {
    /// New entry appended at this index
    New(usize),
    /// Fingerprint already present at this index; nothing changed
    AlreadyKnown(usize),
}

/// One card of the bestiary grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell<'a> {
    Discovered(&'a Creature),
    /// Placeholder for a critter not found yet
    Undiscovered,
}

/// Ordered, deduplicated creature collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Bestiary {
    entries: Vec<Creature>,
}

impl Bestiary {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "critterKitchen_bestiary";

    /// Create an empty bestiary
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Rebuild from a previously stored list, dropping later duplicates
    pub fn from_entries(creatures: impl IntoIterator<Item = Creature>) -> Self {
        let mut bestiary = Self::new();
        for creature in creatures {
            bestiary.collect(creature);
        }
        bestiary
    }

    /// Add a creature unless one with the same fingerprint is already known
    pub fn collect(&mut self, creature: Creature) -> Collected {
        if let Some(index) = self.position(creature.fingerprint) {
            return Collected::AlreadyKnown(index);
        }
        log::info!(
            "Collected {} ({}), {} discovered",
            creature.name,
            creature.rarity,
            self.entries.len() + 1
        );
        self.entries.push(creature);
        Collected::New(self.entries.len() - 1)
    }

    pub fn contains(&self, fingerprint: Fingerprint) -> bool {
        self.position(fingerprint).is_some()
    }

    pub fn get(&self, fingerprint: Fingerprint) -> Option<&Creature> {
        self.position(fingerprint).map(|i| &self.entries[i])
    }

    fn position(&self, fingerprint: Fingerprint) -> Option<usize> {
        self.entries
            .iter()
            .position(|c| c.fingerprint == fingerprint)
    }

    /// Creatures in discovery order
    pub fn entries(&self) -> &[Creature] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Grid cards: every collected creature, then placeholders up to `goal`
    pub fn grid(&self, goal: usize) -> impl Iterator<Item = GridCell<'_>> {
        let missing = goal.saturating_sub(self.entries.len());
        self.entries
            .iter()
            .map(GridCell::Discovered)
            .chain(std::iter::repeat_n(GridCell::Undiscovered, missing))
    }

    /// Fraction of `goal` discovered, clamped to 1.0
    pub fn progress(&self, goal: usize) -> f32 {
        if goal == 0 {
            return 1.0;
        }
        (self.entries.len() as f32 / goal as f32).min(1.0)
    }

    /// Parse a stored bestiary
    pub fn from_json(json: &str) -> Result<Self, BestiaryError> {
        let creatures: Vec<Creature> = serde_json::from_str(json)?;
        Ok(Self::from_entries(creatures))
    }

    /// Serialize for storage
    pub fn to_json(&self) -> Result<String, BestiaryError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Load the bestiary from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(bestiary) => {
                        log::info!("Loaded bestiary ({} creatures)", bestiary.len());
                        return bestiary;
                    }
                    Err(e) => log::warn!("Ignoring stored bestiary: {}", e),
                }
            }
        }

        log::info!("No bestiary found, starting fresh");
        Self::new()
    }

    /// Save the bestiary to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Bestiary saved ({} creatures)", self.len());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
