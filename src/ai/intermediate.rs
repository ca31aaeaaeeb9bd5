//! Intermediate tier: lethal scan, color-counter tables, same-color upgrades
//!
//! Plays reactively off the priority tables: counter the opponent's champion
//! when one exists, otherwise pick from the situational no-champion table.
//! Holds its champion unless it can upgrade out of a same-color standoff.

use crate::ai::strategy::DecisionContext;
use crate::ai::tables;
use rand::Rng;

pub fn select_card(ctx: &DecisionContext, rng: &mut impl Rng) -> Option<usize> {
    // An instant kill needs an open lane and a legal attack this turn
    if ctx.opponent_champion.is_none() && !ctx.first_turn {
        if let Some(idx) = tables::find_lethal(ctx.hand, ctx.opponent_life) {
            return Some(idx);
        }
    }

    if let Some(own) = ctx.own_champion {
        // A same-color standoff trades both champions on any attack; break it
        // by stacking a strictly stronger card if the hand has one.
        if let Some(opponent) = ctx.opponent_champion {
            if own.current_color == opponent.current_color {
                return strongest_above(ctx, own.combat_value());
            }
        }
        return None;
    }

    match ctx.opponent_champion {
        Some(opponent) => best_counter(ctx, opponent.current_color, rng),
        None => best_from_table(ctx, tables::no_champion_table(ctx.first_turn, ctx.own_life)),
    }
}

pub fn should_attack() -> bool {
    true
}

/// Hand index of the strongest card strictly above the given value
fn strongest_above(ctx: &DecisionContext, value: i8) -> Option<usize> {
    ctx.hand
        .iter()
        .enumerate()
        .filter(|(_, c)| c.combat_value() > value)
        .max_by_key(|(_, c)| c.combat_value())
        .map(|(idx, _)| idx)
}

/// Best-ranked answer to the opponent's color; random fallback keeps the tier
/// playing a card even if ranking ever fails to produce one
fn best_counter(
    ctx: &DecisionContext,
    opponent_color: crate::core::Color,
    rng: &mut impl Rng,
) -> Option<usize> {
    let best = ctx
        .hand
        .iter()
        .enumerate()
        .min_by_key(|(_, c)| tables::counter_rank(opponent_color, c.current_color))
        .map(|(idx, _)| idx);
    best.or_else(|| Some(rng.gen_range(0..ctx.hand.len())))
}

fn best_from_table(ctx: &DecisionContext, table: &[crate::core::Color; 8]) -> Option<usize> {
    ctx.hand
        .iter()
        .enumerate()
        .min_by_key(|(_, c)| tables::rank_in(table, c.current_color))
        .map(|(idx, _)| idx)
}
