//! Hand-authored color priority tables and shared AI helpers
//!
//! A counter table lists, for one opponent champion color, all 8 colors from
//! most to least favorable as an answer. The orderings are data, not derived
//! at runtime: kills first (a color that pushes the defender past a terminal
//! bound), then advantageous pushes, then the trade, then losing matchups,
//! with BLACK almost always last.
//!
//! Kill condition for an attacker `c` against a defender `p`: `c >= 2p`
//! (pushes to or past BLACK) or `c <= 2p - 7` (pushes to or past WHITE).

use crate::core::{Card, Color};
use Color::*;

/// Best-to-worst answers, indexed by the opponent champion's color value
pub const COUNTER_PRIORITY: [[Color; 8]; 8] = [
    // vs BLACK(0): terminal, any attack ends it; raw damage order
    [White, Purple, Blue, Green, Yellow, Orange, Red, Black],
    // vs RED(1): anything ORANGE and up kills; cheap kills first
    [Orange, Yellow, Green, Blue, Purple, White, Red, Black],
    // vs ORANGE(2): GREEN and up kill, YELLOW still pushes it down
    [Green, Blue, Purple, White, Yellow, Orange, Red, Black],
    // vs YELLOW(3): only PURPLE/WHITE kill; BLUE pushes harder than GREEN
    [Purple, White, Blue, Green, Yellow, Orange, Red, Black],
    // vs GREEN(4): RED and BLACK push it past WHITE; high colors grind it down
    [Red, Black, White, Purple, Blue, Green, Yellow, Orange],
    // vs BLUE(5): low colors push it past WHITE, YELLOW with least exposure
    [Yellow, Orange, Red, Black, White, Purple, Blue, Green],
    // vs PURPLE(6): everything up to BLUE kills; WHITE still outranks it
    [Blue, Green, Yellow, Orange, Red, Black, White, Purple],
    // vs WHITE(7): terminal, any lower color ends it
    [Purple, Blue, Green, Yellow, Orange, Red, Black, White],
];

/// Opening table: no champion on either side, first turn, no attack allowed
/// yet; inner-ring colors keep the widest set of answers available
pub const OPENING_PRIORITY: [Color; 8] =
    [Green, Yellow, Blue, Orange, Purple, Red, White, Black];

/// Aggressive table for an open lane at healthy life: raw damage order
pub const AGGRO_PRIORITY: [Color; 8] =
    [White, Purple, Blue, Green, Yellow, Orange, Red, Black];

/// Defensive table at low life: inner-ring colors are hardest to push out
pub const DEFENSIVE_PRIORITY: [Color; 8] =
    [Green, Yellow, Blue, Orange, Red, Purple, White, Black];

/// Own life at or below this counts as "low" for table selection
pub const LOW_LIFE_THRESHOLD: i8 = 3;

/// Rank of a candidate color in a table (0 = best)
pub fn rank_in(table: &[Color; 8], candidate: Color) -> usize {
    table
        .iter()
        .position(|c| *c == candidate)
        .unwrap_or(table.len())
}

/// Rank of a candidate as an answer to the given opponent champion color
pub fn counter_rank(opponent: Color, candidate: Color) -> usize {
    rank_in(&COUNTER_PRIORITY[opponent.value() as usize], candidate)
}

/// Is this color ranked in the bottom two answers against the opponent?
pub fn is_bottom_ranked(opponent: Color, candidate: Color) -> bool {
    counter_rank(opponent, candidate) >= 6
}

/// Table to use when the opponent has no champion
pub fn no_champion_table(first_turn: bool, own_life: i8) -> &'static [Color; 8] {
    if first_turn {
        &OPENING_PRIORITY
    } else if own_life <= LOW_LIFE_THRESHOLD {
        &DEFENSIVE_PRIORITY
    } else {
        &AGGRO_PRIORITY
    }
}

/// Colors preferred for survival at low life
pub fn is_inner_ring(color: Color) -> bool {
    matches!(color, Green | Yellow)
}

/// Lethal scan: index of the first hand card whose color value would reduce
/// the opponent's life to 0 with a direct attack. Only meaningful when the
/// opponent's champion zone is empty, since that is when direct attacks are
/// legal; callers gate on that.
pub fn find_lethal(hand: &[Card], opponent_life: i8) -> Option<usize> {
    hand.iter()
        .position(|card| card.combat_value() >= opponent_life)
}
