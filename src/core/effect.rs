//! Fixed card effect vocabulary
//!
//! Effects are data tags carried by cards. The engine consults them for AI
//! scoring and merges them when champions stack; gameplay consequences beyond
//! color and life arithmetic live outside this core.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    None,
    Shield,
    Draw,
    Heal,
    Boost,
    Peek,
    Rage,
    Stealth,
    DivineShield,
    SpellMaster,
    Tsunami,
}

impl Effect {
    /// Human-readable description shown on card tooltips
    pub fn description(&self) -> &'static str {
        match self {
            Effect::None => "No effect",
            Effect::Shield => "Prevents 1 damage when attacked",
            Effect::Draw => "Draw a card when played",
            Effect::Heal => "Heal 1 life point when played",
            Effect::Boost => "+1 to color value when attacking",
            Effect::Peek => "Look at top card of deck when played",
            Effect::Rage => "Double damage when attacking",
            Effect::Stealth => "Cannot be blocked on first attack",
            Effect::DivineShield => "Prevents all damage when first attacked",
            Effect::SpellMaster => "Copy the effect of the last card played",
            Effect::Tsunami => "Return all other cards to their owners hands",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Effect::None => "NONE",
            Effect::Shield => "SHIELD",
            Effect::Draw => "DRAW",
            Effect::Heal => "HEAL",
            Effect::Boost => "BOOST",
            Effect::Peek => "PEEK",
            Effect::Rage => "RAGE",
            Effect::Stealth => "STEALTH",
            Effect::DivineShield => "DIVINE_SHIELD",
            Effect::SpellMaster => "SPELL_MASTER",
            Effect::Tsunami => "TSUNAMI",
        };
        write!(f, "{tag}")
    }
}
