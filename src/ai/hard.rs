//! Hard tier: numeric scoring over priority rank, effects, and board context
//!
//! Scores every hand card instead of taking the table's first answer, and is
//! the only tier willing to replace a live champion. Attacks into anything
//! except an exact-color mirror, where the trade is value-neutral by
//! construction.

use crate::ai::strategy::DecisionContext;
use crate::ai::tables;
use crate::core::{Card, Color};

/// Weight applied to a card's priority-table rank
const PRIORITY_WEIGHT: i32 = 3;
/// Flat bonus for any effect tag other than NONE
const EFFECT_BONUS: i32 = 3;
/// Bonus for holding another card of the same color as a follow-up
const DUPLICATE_BONUS: i32 = 2;
/// Damage weight for an open lane at healthy life
const DAMAGE_WEIGHT: i32 = 2;
/// Bonus steering toward inner-ring colors at low life
const INNER_RING_BONUS: i32 = 6;

pub fn select_card(ctx: &DecisionContext) -> Option<usize> {
    // Guaranteed lethal outranks everything, including a live champion
    if ctx.opponent_champion.is_none() && !ctx.first_turn {
        if let Some(idx) = tables::find_lethal(ctx.hand, ctx.opponent_life) {
            return Some(idx);
        }
    }

    if let Some(own) = ctx.own_champion {
        if !should_replace_champion(own, ctx.opponent_champion, ctx.hand) {
            return None;
        }
    }

    let best = match ctx.opponent_champion {
        Some(opponent) => ctx
            .hand
            .iter()
            .enumerate()
            .max_by_key(|(idx, card)| {
                (score_vs_champion(card, opponent.current_color, ctx.hand), usize::MAX - idx)
            })
            .map(|(idx, _)| idx),
        None => ctx
            .hand
            .iter()
            .enumerate()
            .max_by_key(|(idx, card)| (score_open_lane(card, ctx), usize::MAX - idx))
            .map(|(idx, _)| idx),
    };
    best
}

/// Refuse only the exact-color mirror; attack every other matchup
pub fn should_attack(own_champion: &Card, opponent_champion: Option<&Card>) -> bool {
    match opponent_champion {
        Some(opponent) => opponent.current_color != own_champion.current_color,
        None => true,
    }
}

/// Replace the current champion when a hand card clearly beats keeping it:
/// stuck in a same-color standoff with a stronger card available, or ranked
/// among the two worst answers to the opponent while a better answer is held
fn should_replace_champion(own: &Card, opponent: Option<&Card>, hand: &[Card]) -> bool {
    let Some(opponent) = opponent else {
        return false;
    };
    let opp_color = opponent.current_color;

    if own.current_color == opp_color
        && hand.iter().any(|c| c.combat_value() > own.combat_value())
    {
        return true;
    }

    let own_rank = tables::counter_rank(opp_color, own.current_color);
    tables::is_bottom_ranked(opp_color, own.current_color)
        && hand
            .iter()
            .any(|c| tables::counter_rank(opp_color, c.current_color) < own_rank)
}

/// Score a card as an answer to the opponent's champion
fn score_vs_champion(card: &Card, opponent_color: Color, hand: &[Card]) -> i32 {
    let rank = tables::counter_rank(opponent_color, card.current_color) as i32;
    let mut score = (8 - rank) * PRIORITY_WEIGHT;

    if card.has_real_effect() {
        score += EFFECT_BONUS;
    }

    // Color advantage over the defender, zero when out-colored
    score += i32::from((card.combat_value() - opponent_color.value()).max(0));

    let duplicates = hand
        .iter()
        .filter(|c| c.id != card.id && c.current_color == card.current_color)
        .count();
    if duplicates > 0 {
        score += DUPLICATE_BONUS;
    }

    score
}

/// Score a card for an empty opposing lane
fn score_open_lane(card: &Card, ctx: &DecisionContext) -> i32 {
    let table = tables::no_champion_table(ctx.first_turn, ctx.own_life);
    let rank = tables::rank_in(table, card.current_color) as i32;
    let mut score = (8 - rank) * PRIORITY_WEIGHT;

    let low_life = ctx.own_life <= tables::LOW_LIFE_THRESHOLD;
    if !ctx.first_turn && !low_life {
        score += i32::from(card.combat_value()) * DAMAGE_WEIGHT;
    }
    if low_life && tables::is_inner_ring(card.current_color) {
        score += INNER_RING_BONUS;
    }

    score
}
