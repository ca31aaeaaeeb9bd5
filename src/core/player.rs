//! Player state
//!
//! A player owns a life total, a battle deck, a hand, a champion zone, and a
//! tomb pile. Nothing outside the engine mutates these except through the
//! operations here; the two players of a battle never share objects.

use crate::core::color::{COLOR_MAX, COLOR_MIN};
use crate::core::{Card, CardId, Deck};
use crate::zones::{ChampionZone, TombPile};
use crate::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Life totals run on the same [0,7] scale as the color wheel
pub const STARTING_LIFE: i8 = 7;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,

    /// Opaque avatar reference for the presentation layer
    pub avatar: String,

    /// Clamped to [0,7]; 0 is a loss
    pub life: i8,

    pub deck: Deck,

    pub hand: Vec<Card>,

    pub champion: ChampionZone,

    pub tomb: TombPile,
}

impl Player {
    /// Create a player around a battle-scoped copy of the given deck
    pub fn new(name: impl Into<String>, avatar: impl Into<String>, deck: &Deck) -> Self {
        Player {
            name: name.into(),
            avatar: avatar.into(),
            life: STARTING_LIFE,
            deck: deck.battle_copy(),
            hand: Vec::new(),
            champion: ChampionZone::new(),
            tomb: TombPile::new(),
        }
    }

    /// Draw one card into the hand; an empty deck is a no-op
    pub fn draw_card(&mut self) -> Option<&Card> {
        let card = self.deck.draw_top()?;
        self.hand.push(card);
        self.hand.last()
    }

    /// Take a card out of the hand by id
    pub fn remove_from_hand(&mut self, card_id: CardId) -> Result<Card> {
        let pos = self
            .hand
            .iter()
            .position(|c| c.id == card_id)
            .ok_or(EngineError::CardNotFound(card_id.as_u32()))?;
        Ok(self.hand.remove(pos))
    }

    /// Play a card from hand into the champion zone
    ///
    /// Returns true if the card stacked onto an existing champion.
    pub fn play_card(&mut self, card_id: CardId) -> Result<bool> {
        let card = self.remove_from_hand(card_id)?;
        Ok(self.champion.play(card))
    }

    /// Move the active champion and its whole stack to the tomb
    pub fn bury_champion(&mut self) {
        let stack = self.champion.take_all();
        self.tomb.bury_all(stack);
    }

    /// Apply a life change, clamped to [0,7]. Returns the new total.
    pub fn change_life(&mut self, delta: i8) -> i8 {
        self.life = (self.life + delta).clamp(COLOR_MIN, COLOR_MAX);
        self.life
    }

    pub fn has_lost(&self) -> bool {
        self.life <= COLOR_MIN
    }

    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    pub fn tomb_size(&self) -> usize {
        self.tomb.len()
    }

    pub fn hand_card(&self, card_id: CardId) -> Option<&Card> {
        self.hand.iter().find(|c| c.id == card_id)
    }
}
