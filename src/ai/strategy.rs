//! Strategy tiers and dispatch
//!
//! The three difficulty tiers are a closed tag dispatched through free
//! functions; all shared helpers take explicit arguments (see `tables`).
//! Strategies are pure apart from the RNG handed in for random picks, so one
//! decision never leaves partial state behind.

use crate::ai::{easy, hard, intermediate};
use crate::core::Card;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// AI difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Intermediate,
    Hard,
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "intermediate" => Ok(Difficulty::Intermediate),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("unknown difficulty '{s}' (expected: easy, medium, hard)")),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Intermediate => write!(f, "Intermediate"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Everything a strategy may look at when choosing a card
///
/// Borrowed views only; strategies cannot mutate the battle.
pub struct DecisionContext<'a> {
    pub hand: &'a [Card],
    pub opponent_champion: Option<&'a Card>,
    pub own_champion: Option<&'a Card>,
    pub opponent_life: i8,
    pub own_life: i8,
    pub first_turn: bool,
}

/// Pick a hand index to play this turn, or `None` to hold
pub fn select_card_to_play(
    difficulty: Difficulty,
    ctx: &DecisionContext,
    rng: &mut impl Rng,
) -> Option<usize> {
    if ctx.hand.is_empty() {
        return None;
    }
    match difficulty {
        Difficulty::Easy => easy::select_card(ctx, rng),
        Difficulty::Intermediate => intermediate::select_card(ctx, rng),
        Difficulty::Hard => hard::select_card(ctx),
    }
}

/// Should the active champion attack this turn?
pub fn should_attack(
    difficulty: Difficulty,
    own_champion: &Card,
    opponent_champion: Option<&Card>,
) -> bool {
    match difficulty {
        Difficulty::Easy => easy::should_attack(),
        Difficulty::Intermediate => intermediate::should_attack(),
        Difficulty::Hard => hard::should_attack(own_champion, opponent_champion),
    }
}
