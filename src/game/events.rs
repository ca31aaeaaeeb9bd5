//! State-change notifications for the presentation layer
//!
//! The engine owns no ambient event bus: a sink is injected at construction
//! and every committed transition is published to it. Presentation timing
//! (animation delays and so on) is the sink's business; by the time an event
//! is published the transition has already happened.

use crate::core::{CardId, Color};
use crate::game::phase::{Phase, Seat};
use crate::game::state::BattleResult;
use serde::{Deserialize, Serialize};

/// How an attack came out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackOutcome {
    /// Equal colors: both champions defeated
    MutualDefeat,
    /// Defender pushed past a terminal bound
    DefenderDefeated,
    /// Defender survived with a new color
    DefenderPushed { new_color: Color },
    /// Direct attack against the opponent's life
    Direct { damage: i8 },
}

/// Everything the engine reports to its observer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    TurnStarted { seat: Seat, turn_number: u32 },
    CardDrawn { seat: Seat, card_id: CardId, card_name: String },
    CardPlayed { seat: Seat, card_id: CardId, card_name: String, color: Color, stacked: bool },
    PhaseChanged { seat: Seat, phase: Phase },
    LifeChanged { seat: Seat, life: i8 },
    AttackResolved { attacker: Seat, outcome: AttackOutcome },
    ChampionDefeated { seat: Seat },
    TurnEnded { seat: Seat },
    GameOver { result: BattleResult },
}

/// Observer interface injected into the engine
pub trait EventSink {
    fn publish(&mut self, event: &GameEvent);
}

/// Sink that drops everything (headless simulations)
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn publish(&mut self, _event: &GameEvent) {}
}

/// Sink that records every event, for tests and replay inspection
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<GameEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count_matching(&self, pred: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for RecordingSink {
    fn publish(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
