//! Per-player card zones (champion slot and tomb pile)
//!
//! Each player exclusively owns one champion zone and one tomb pile. The
//! champion zone is either empty or occupied by a single active champion plus
//! the stack of cards played onto it; the tomb pile is append-only.

use crate::core::{Card, CardId, Color, Effect};
use serde::{Deserialize, Serialize};

/// The champion slot with its stack
///
/// The first card played becomes the active champion. Cards played while the
/// slot is occupied are stacked beneath it: the active champion takes on the
/// new card's current color and gains its effects, cumulatively. Only the
/// active champion attacks or is attacked; stacked cards have no independent
/// combat role.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChampionZone {
    /// Active champion first, then stacked cards in play order
    cards: Vec<Card>,
}

impl ChampionZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Total cards in the zone (active champion included)
    pub fn stack_size(&self) -> usize {
        self.cards.len()
    }

    /// The active champion, if the zone is occupied
    pub fn active(&self) -> Option<&Card> {
        self.cards.first()
    }

    pub fn active_mut(&mut self) -> Option<&mut Card> {
        self.cards.first_mut()
    }

    /// Play a card into the zone
    ///
    /// Returns true if the card was stacked onto an existing champion.
    pub fn play(&mut self, card: Card) -> bool {
        if let Some(active) = self.cards.first_mut() {
            active.update_color(card.current_color);
            for effect in &card.current_effects {
                if *effect != Effect::None {
                    active.add_effect(*effect);
                }
            }
            self.cards.push(card);
            true
        } else {
            self.cards.push(card);
            false
        }
    }

    /// Update the active champion's color after surviving combat
    pub fn set_active_color(&mut self, color: Color) {
        if let Some(active) = self.cards.first_mut() {
            active.update_color(color);
        }
    }

    /// Remove every card in the zone at once (active champion and stack),
    /// returning them in play order. The zone is EMPTY afterwards.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}

/// Append-only discard area for defeated champions and their stacks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TombPile {
    cards: Vec<Card>,
}

impl TombPile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Bury a defeated champion together with its whole stack
    pub fn bury_all(&mut self, cards: Vec<Card>) {
        self.cards.extend(cards);
    }

    /// Most recently buried card, for display
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn contains(&self, card_id: CardId) -> bool {
        self.cards.iter().any(|c| c.id == card_id)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
