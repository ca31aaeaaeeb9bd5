//! Battle state and public snapshots

use crate::core::{CardId, Color, Deck, Effect, Player};
use crate::game::phase::{Phase, Seat, TurnStructure};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// Terminal result of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleResult {
    PlayerWin,
    AiWin,
    /// Both lives hit 0 in the same transition; structurally rare but checked
    Draw,
}

/// Starting hand drawn by each seat when a battle begins
pub const STARTING_HAND_SIZE: usize = 3;

/// Complete state of one battle
///
/// Pure data: the notification sink and catalog live on the engine, so the
/// state itself serializes cleanly for snapshots and deterministic replay.
/// Each seat's zones are owned exclusively by that seat's `Player`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleState {
    pub human: Player,
    pub ai: Player,

    pub turn: TurnStructure,

    /// True once the active seat has played a card this turn (one play max)
    pub card_played_this_turn: bool,

    /// True once the active seat has attacked this turn (one attack max)
    pub attacked_this_turn: bool,

    /// Set exactly once, when a life total reaches 0
    pub result: Option<BattleResult>,

    /// Battle RNG (shuffles, AI tie-breaking). Serialized so a resumed battle
    /// replays identically. RefCell so read-only views can still draw
    /// randomness, as in deterministic-replay engines.
    pub rng: RefCell<ChaCha12Rng>,
}

impl BattleState {
    /// Set up a battle: shuffle battle copies of both decks, draw starting
    /// hands, and pick the starting seat from the RNG (or use the override).
    pub fn new(
        human: Player,
        ai: Player,
        seed: u64,
        starting_seat: Option<Seat>,
    ) -> Self {
        let mut rng = ChaCha12Rng::seed_from_u64(seed);

        let mut human = human;
        let mut ai = ai;
        human.deck.shuffle(&mut rng);
        ai.deck.shuffle(&mut rng);
        for _ in 0..STARTING_HAND_SIZE {
            human.draw_card();
            ai.draw_card();
        }

        let starting = starting_seat.unwrap_or_else(|| {
            if rng.gen_bool(0.5) {
                Seat::Human
            } else {
                Seat::Ai
            }
        });

        BattleState {
            human,
            ai,
            turn: TurnStructure::new(starting),
            card_played_this_turn: false,
            attacked_this_turn: false,
            result: None,
            rng: RefCell::new(rng),
        }
    }

    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::Human => &self.human,
            Seat::Ai => &self.ai,
        }
    }

    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        match seat {
            Seat::Human => &mut self.human,
            Seat::Ai => &mut self.ai,
        }
    }

    pub fn active_seat(&self) -> Seat {
        self.turn.active
    }

    pub fn phase(&self) -> Phase {
        self.turn.phase
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Check both life totals and record the result if the battle just ended.
    /// Called after every life change, within the same state transition.
    pub fn check_game_end(&mut self) -> Option<BattleResult> {
        if self.result.is_some() {
            return self.result;
        }
        let result = match (self.human.has_lost(), self.ai.has_lost()) {
            (true, true) => Some(BattleResult::Draw),
            (true, false) => Some(BattleResult::AiWin),
            (false, true) => Some(BattleResult::PlayerWin),
            (false, false) => None,
        };
        self.result = result;
        result
    }

    /// Public state snapshot for the presentation layer
    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            phase: self.turn.phase,
            active: self.turn.active,
            turn_number: self.turn.turn_number,
            first_turn: self.turn.first_turn,
            result: self.result,
            human: SeatSummary::of(&self.human),
            ai: SeatSummary::of(&self.ai),
        }
    }
}

/// Read-only view of one seat, safe to hand to any observer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSummary {
    pub name: String,
    pub life: i8,
    pub hand_size: usize,
    pub deck_size: usize,
    pub tomb_size: usize,
    pub champion: Option<ChampionSummary>,
}

impl SeatSummary {
    fn of(player: &Player) -> Self {
        SeatSummary {
            name: player.name.clone(),
            life: player.life,
            hand_size: player.hand_size(),
            deck_size: player.deck_size(),
            tomb_size: player.tomb_size(),
            champion: player.champion.active().map(|card| ChampionSummary {
                card_id: card.id,
                name: card.name.clone(),
                color: card.current_color,
                stack_size: player.champion.stack_size(),
                effects: card.current_effects.to_vec(),
            }),
        }
    }
}

/// The active champion as visible to both seats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionSummary {
    pub card_id: CardId,
    pub name: String,
    pub color: Color,
    pub stack_size: usize,
    pub effects: Vec<Effect>,
}

/// Full public snapshot returned from every intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub phase: Phase,
    pub active: Seat,
    pub turn_number: u32,
    pub first_turn: bool,
    pub result: Option<BattleResult>,
    pub human: SeatSummary,
    pub ai: SeatSummary,
}
