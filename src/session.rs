//! Mixing session: recipe slots and the gather → mix → reveal flow
//!
//! Owns the transient per-brew state the UI needs. Brewing itself stays in
//! `brew`; the session only decides when it is allowed to happen.

use crate::bestiary::{Bestiary, Collected};
use crate::brew::{Creature, RECIPE_SIZE, Recipe, build_creature};
use crate::catalog::{self, Ingredient};
use crate::cauldron::Rgb;
use crate::error::{RecipeError, SessionError};

/// Where the session is in the brewing flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixPhase {
    /// Filling recipe slots
    Gathering,
    /// Cauldron churning, reveal once the timer runs out
    Mixing { remaining_ms: u32 },
    /// Creature shown, waiting for collect or discard
    Revealing,
}

/// One brewing session
#[derive(Debug, Clone)]
pub struct MixSession {
    slots: [Option<&'static Ingredient>; RECIPE_SIZE],
    phase: MixPhase,
    revealed: Option<Creature>,
    tint: Rgb,
    mix_duration_ms: u32,
}

impl MixSession {
    pub fn new(mix_duration_ms: u32) -> Self {
        Self {
            slots: [None; RECIPE_SIZE],
            phase: MixPhase::Gathering,
            revealed: None,
            tint: Rgb::RESTING,
            mix_duration_ms,
        }
    }

    pub fn phase(&self) -> MixPhase {
        self.phase
    }

    pub fn is_mixing(&self) -> bool {
        matches!(self.phase, MixPhase::Mixing { .. })
    }

    pub fn slots(&self) -> &[Option<&'static Ingredient>; RECIPE_SIZE] {
        &self.slots
    }

    pub fn filled(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// All slots filled and nothing in progress
    pub fn is_ready(&self) -> bool {
        self.phase == MixPhase::Gathering && self.filled() == RECIPE_SIZE
    }

    /// Liquid color the cauldron should ease toward
    pub fn tint(&self) -> Rgb {
        self.tint
    }

    pub fn revealed(&self) -> Option<&Creature> {
        self.revealed.as_ref()
    }

    pub fn set_mix_duration(&mut self, ms: u32) {
        self.mix_duration_ms = ms;
    }

    /// Drop an ingredient into the first free slot, returning the slot index
    pub fn add_ingredient(&mut self, id: &str) -> Result<usize, SessionError> {
        if self.phase != MixPhase::Gathering {
            log::warn!("Ignoring {} while the cauldron is busy", id);
            return Err(SessionError::Busy);
        }
        let ingredient = catalog::lookup(id)
            .ok_or_else(|| RecipeError::UnknownIngredient(id.to_string()))?;
        let slot = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(SessionError::RecipeFull)?;

        self.slots[slot] = Some(ingredient);
        if let Some(color) = Rgb::from_hex(ingredient.color) {
            self.tint = self.tint.blend(color);
        }
        log::debug!("Added {} to slot {}", ingredient.id, slot);
        Ok(slot)
    }

    /// Start churning. Requires a full recipe.
    pub fn start_mix(&mut self) -> Result<(), SessionError> {
        if self.phase != MixPhase::Gathering {
            return Err(SessionError::Busy);
        }
        let filled = self.filled();
        if filled < RECIPE_SIZE {
            return Err(SessionError::NotReady {
                filled,
                needed: RECIPE_SIZE,
            });
        }
        self.phase = MixPhase::Mixing {
            remaining_ms: self.mix_duration_ms,
        };
        log::info!("Mixing started");
        Ok(())
    }

    /// Advance the mix timer. Returns the creature on the update it appears.
    pub fn advance(&mut self, dt_ms: u32) -> Result<Option<&Creature>, SessionError> {
        let MixPhase::Mixing { remaining_ms } = self.phase else {
            return Ok(None);
        };
        let remaining_ms = remaining_ms.saturating_sub(dt_ms);
        if remaining_ms > 0 {
            self.phase = MixPhase::Mixing { remaining_ms };
            return Ok(None);
        }

        let ids: Vec<&str> = self.slots.iter().flatten().map(|ing| ing.id).collect();
        let creature = build_creature(&Recipe::new(&ids)?);
        log::info!("Revealed {} ({})", creature.name, creature.rarity);
        self.phase = MixPhase::Revealing;
        Ok(Some(&*self.revealed.insert(creature)))
    }

    /// Keep the revealed creature and start over
    pub fn collect(&mut self, bestiary: &mut Bestiary) -> Result<Collected, SessionError> {
        let creature = self.take_revealed()?;
        let outcome = bestiary.collect(creature);
        if let Collected::AlreadyKnown(_) = outcome {
            log::info!("Already in the bestiary");
        }
        Ok(outcome)
    }

    /// Let the revealed creature go and start over
    pub fn discard(&mut self) -> Result<Creature, SessionError> {
        self.take_revealed()
    }

    fn take_revealed(&mut self) -> Result<Creature, SessionError> {
        if self.phase != MixPhase::Revealing {
            return Err(SessionError::NothingRevealed);
        }
        let creature = self.revealed.take().ok_or(SessionError::NothingRevealed)?;
        self.reset();
        Ok(creature)
    }

    /// Empty the slots and settle the liquid
    pub fn reset(&mut self) {
        self.slots = [None; RECIPE_SIZE];
        self.phase = MixPhase::Gathering;
        self.revealed = None;
        self.tint = Rgb::RESTING;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brew::Rarity;

    fn ready(ids: [&str; 3]) -> MixSession {
        let mut session = MixSession::new(2000);
        for id in ids {
            session.add_ingredient(id).unwrap();
        }
        session
    }

    #[test]
    fn test_slots_fill_in_order() {
        let mut session = MixSession::new(2000);
        assert_eq!(session.add_ingredient("fire"), Ok(0));
        assert_eq!(session.add_ingredient("fire"), Ok(1));
        assert_eq!(session.add_ingredient("star"), Ok(2));
        assert_eq!(session.add_ingredient("moon"), Err(SessionError::RecipeFull));
        assert!(session.is_ready());
    }

    #[test]
    fn test_unknown_ingredient_rejected() {
        let mut session = MixSession::new(2000);
        assert_eq!(
            session.add_ingredient("slime"),
            Err(SessionError::Recipe(RecipeError::UnknownIngredient("slime".into())))
        );
        assert_eq!(session.filled(), 0);
    }

    #[test]
    fn test_tint_follows_ingredients() {
        let mut session = MixSession::new(2000);
        session.add_ingredient("fire").unwrap();
        assert_eq!(session.tint(), Rgb::new(133, 87, 92));
        session.reset();
        assert_eq!(session.tint(), Rgb::RESTING);
    }

    #[test]
    fn test_cannot_mix_early() {
        let mut session = MixSession::new(2000);
        session.add_ingredient("moon").unwrap();
        assert_eq!(
            session.start_mix(),
            Err(SessionError::NotReady {
                filled: 1,
                needed: 3
            })
        );
    }

    #[test]
    fn test_full_flow() {
        let mut session = ready(["moon", "fire", "thunder"]);
        session.start_mix().unwrap();
        assert_eq!(session.add_ingredient("star"), Err(SessionError::Busy));
        assert_eq!(session.start_mix(), Err(SessionError::Busy));

        assert!(session.advance(1500).unwrap().is_none());
        let creature = session.advance(600).unwrap().cloned().unwrap();
        assert_eq!(creature.name, "Lumpyrza");
        assert_eq!(creature.rarity, Rarity::Legendary);
        assert_eq!(session.phase(), MixPhase::Revealing);

        let mut bestiary = Bestiary::new();
        assert_eq!(session.collect(&mut bestiary), Ok(Collected::New(0)));
        assert_eq!(session.phase(), MixPhase::Gathering);
        assert_eq!(session.filled(), 0);
        assert!(session.revealed().is_none());
    }

    #[test]
    fn test_collecting_twice_keeps_one_entry() {
        let mut bestiary = Bestiary::new();
        for ids in [["fire", "moon", "thunder"], ["thunder", "moon", "fire"]] {
            let mut session = ready(ids);
            session.start_mix().unwrap();
            session.advance(2000).unwrap();
            session.collect(&mut bestiary).unwrap();
        }
        assert_eq!(bestiary.len(), 1);
    }

    #[test]
    fn test_zero_duration_reveals_on_first_advance() {
        let mut session = ready(["ocean", "ocean", "ocean"]);
        session.set_mix_duration(0);
        session.start_mix().unwrap();
        assert!(session.advance(0).unwrap().is_some());
    }

    #[test]
    fn test_discard() {
        let mut session = ready(["star", "star", "star"]);
        assert_eq!(session.discard(), Err(SessionError::NothingRevealed));
        session.start_mix().unwrap();
        session.advance(5000).unwrap();
        assert_eq!(session.discard().unwrap().name, "Novanovaas");
        assert_eq!(session.phase(), MixPhase::Gathering);
    }

    #[test]
    fn test_advance_outside_mixing_is_noop() {
        let mut session = MixSession::new(10);
        assert!(session.advance(100).unwrap().is_none());
        assert_eq!(session.phase(), MixPhase::Gathering);
    }
}
