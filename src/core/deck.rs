//! Battle decks
//!
//! A deck is an ordered, shuffleable sequence of exactly [`DECK_SIZE`] cards.
//! Drawing removes from the top (the end of the Vec). The size invariant is
//! checked when a deck enters a battle; drawing from an empty deck is a plain
//! `None`, never an error.

use crate::core::Card;
use crate::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Every battle-eligible deck holds exactly this many cards
pub const DECK_SIZE: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck, enforcing the size invariant up front
    pub fn new(name: impl Into<String>, cards: Vec<Card>) -> Result<Self> {
        if cards.len() != DECK_SIZE {
            return Err(EngineError::InvalidDeck(format!(
                "deck must contain exactly {} cards, got {}",
                DECK_SIZE,
                cards.len()
            )));
        }
        Ok(Deck {
            name: name.into(),
            cards,
        })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Uniform random permutation using the battle RNG
    pub fn shuffle(&mut self, rng: &mut impl rand::Rng) {
        use rand::seq::SliceRandom;
        self.cards.shuffle(rng);
    }

    /// Remove and return the top card; empty deck yields no card
    pub fn draw_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Independent battle-scoped copy with every card reset to base state
    ///
    /// The persisted deck composition stays untouched; battles mutate only
    /// their own copy.
    pub fn battle_copy(&self) -> Deck {
        Deck {
            name: self.name.clone(),
            cards: self.cards.iter().map(|c| c.battle_copy()).collect(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
