//! Easy tier: lethal scan, then a random card; always attacks

use crate::ai::strategy::DecisionContext;
use crate::ai::tables;
use rand::Rng;

pub fn select_card(ctx: &DecisionContext, rng: &mut impl Rng) -> Option<usize> {
    // Take the instant kill when the lane is open and attacking is legal
    if ctx.opponent_champion.is_none() && !ctx.first_turn {
        if let Some(idx) = tables::find_lethal(ctx.hand, ctx.opponent_life) {
            return Some(idx);
        }
    }
    Some(rng.gen_range(0..ctx.hand.len()))
}

pub fn should_attack() -> bool {
    true
}
