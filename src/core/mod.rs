//! Core game types: colors, effects, cards, decks, players

pub mod card;
pub mod color;
pub mod deck;
pub mod effect;
pub mod player;

pub use card::{Card, CardId};
pub use color::{clamp, is_out_of_bounds, Color, ALL_COLORS, COLOR_MAX, COLOR_MIN};
pub use deck::{Deck, DECK_SIZE};
pub use effect::Effect;
pub use player::{Player, STARTING_LIFE};
