//! Card instances and identity
//!
//! A `Card` is the battle-time instance of a catalog entry. The base color and
//! base effects are fixed at materialization; the current color and current
//! effect list mutate during a battle and reset between battles.

use crate::core::{Color, Effect};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Unique ID for a card instance within one battle
///
/// IDs are assigned sequentially when a deck is materialized and stay stable
/// for the whole battle; cards in the tomb keep their id for inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(u32);

impl CardId {
    pub fn new(id: u32) -> Self {
        CardId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A card during gameplay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Unique ID for this card instance
    pub id: CardId,

    /// Display name from the catalog
    pub name: String,

    /// Color fixed at creation
    pub base_color: Color,

    /// Color as of the last combat or stacking mutation
    pub current_color: Color,

    /// Effect tags fixed at creation
    pub base_effects: SmallVec<[Effect; 2]>,

    /// Effect tags including any gained while stacked
    pub current_effects: SmallVec<[Effect; 2]>,
}

impl Card {
    pub fn new(id: CardId, name: impl Into<String>, color: Color, effects: &[Effect]) -> Self {
        let base_effects: SmallVec<[Effect; 2]> = effects.iter().copied().collect();
        Card {
            id,
            name: name.into(),
            base_color: color,
            current_color: color,
            base_effects: base_effects.clone(),
            current_effects: base_effects,
        }
    }

    /// Reset mutable battle state back to the base definition
    pub fn reset(&mut self) {
        self.current_color = self.base_color;
        self.current_effects = self.base_effects.clone();
    }

    /// Fresh id-preserving copy with reset state, for instantiating a deck
    /// into a new battle
    pub fn battle_copy(&self) -> Card {
        let mut copy = self.clone();
        copy.reset();
        copy
    }

    pub fn update_color(&mut self, color: Color) {
        self.current_color = color;
    }

    /// Gain an effect from a stacked card (cumulative, never removed while
    /// stacked)
    pub fn add_effect(&mut self, effect: Effect) {
        self.current_effects.push(effect);
    }

    /// Does this card carry any effect tag other than NONE?
    pub fn has_real_effect(&self) -> bool {
        self.current_effects.iter().any(|e| *e != Effect::None)
    }

    /// Combat value of this card right now (0..=7)
    pub fn combat_value(&self) -> i8 {
        self.current_color.value()
    }
}
