//! Color combat resolution
//!
//! Pure arithmetic over the color wheel. Champion combat pushes the defender
//! away from the attacker's side of the wheel by the color difference; equal
//! colors trade. Direct attacks convert the attacker's current color straight
//! into life damage.
//!
//! The pushed ordinal may overshoot the wheel bounds arbitrarily far. Only
//! boundedness matters: the raw value is classified against the terminal
//! bounds first and clamped only for the surviving defender's new color.
//! Clamping before the defeat check would mask the overshoot.

use crate::core::{is_out_of_bounds, Color};
use serde::{Deserialize, Serialize};

/// Outcome of one champion-vs-champion attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatOutcome {
    pub attacker_defeated: bool,
    pub defender_defeated: bool,

    /// The defender's color after the attack, present only when the defender
    /// survives
    pub new_defender_color: Option<Color>,
}

/// Resolve a champion attack
///
/// - Equal colors: mutual defeat, no new color.
/// - Attacker above the defender: defender is pushed toward BLACK by the
///   difference.
/// - Attacker below: defender is pushed toward WHITE by the difference.
///
/// The attacker's own color never changes; it is only defeated in the
/// equal-color trade.
pub fn resolve_champion_combat(attacker: Color, defender: Color) -> CombatOutcome {
    let a = attacker.value();
    let d = defender.value();

    if a == d {
        return CombatOutcome {
            attacker_defeated: true,
            defender_defeated: true,
            new_defender_color: None,
        };
    }

    let diff = (a - d).abs();
    let pushed = if a > d { d - diff } else { d + diff };

    if is_out_of_bounds(pushed) {
        CombatOutcome {
            attacker_defeated: false,
            defender_defeated: true,
            new_defender_color: None,
        }
    } else {
        CombatOutcome {
            attacker_defeated: false,
            defender_defeated: false,
            new_defender_color: Some(Color::from_value(pushed)),
        }
    }
}

/// Damage dealt by a direct attack with the given champion color
pub fn direct_damage(attacker: Color) -> i8 {
    attacker.value()
}

/// Would a direct attack with this color reduce the given life total to 0?
pub fn is_lethal(attacker: Color, defender_life: i8) -> bool {
    direct_damage(attacker) >= defender_life
}
