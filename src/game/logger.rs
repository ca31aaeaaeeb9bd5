//! Verbosity-gated logging sink
//!
//! The CLI attaches this sink to watch battles. Tests and headless callers
//! use `NullSink`/`RecordingSink` instead; the engine is indifferent.

use crate::game::events::{AttackOutcome, EventSink, GameEvent};
use serde::{Deserialize, Serialize};

/// How much of the battle to narrate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum VerbosityLevel {
    /// No output at all
    Silent,
    /// Turn starts and the final result
    Minimal,
    /// Plays, attacks, and life changes
    #[default]
    Normal,
    /// Every event, including draws and phase changes
    Verbose,
}

impl std::str::FromStr for VerbosityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityLevel::Silent),
            "minimal" | "1" => Ok(VerbosityLevel::Minimal),
            "normal" | "2" => Ok(VerbosityLevel::Normal),
            "verbose" | "3" => Ok(VerbosityLevel::Verbose),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

/// Sink that prints events to stdout at the configured verbosity
#[derive(Debug, Default)]
pub struct BattleLogger {
    verbosity: VerbosityLevel,
}

impl BattleLogger {
    pub fn new(verbosity: VerbosityLevel) -> Self {
        BattleLogger { verbosity }
    }

    fn level_of(event: &GameEvent) -> VerbosityLevel {
        match event {
            GameEvent::TurnStarted { .. } | GameEvent::GameOver { .. } => VerbosityLevel::Minimal,
            GameEvent::CardPlayed { .. }
            | GameEvent::AttackResolved { .. }
            | GameEvent::LifeChanged { .. }
            | GameEvent::ChampionDefeated { .. } => VerbosityLevel::Normal,
            GameEvent::CardDrawn { .. }
            | GameEvent::PhaseChanged { .. }
            | GameEvent::TurnEnded { .. } => VerbosityLevel::Verbose,
        }
    }

    fn render(event: &GameEvent) -> String {
        match event {
            GameEvent::TurnStarted { seat, turn_number } => {
                format!("=== Turn {turn_number}: {seat} ===")
            }
            GameEvent::CardDrawn { seat, card_name, .. } => {
                format!("[{seat}] draws {card_name}")
            }
            GameEvent::CardPlayed {
                seat,
                card_name,
                color,
                stacked,
                ..
            } => {
                if *stacked {
                    format!("[{seat}] stacks {card_name} ({color}) onto their champion")
                } else {
                    format!("[{seat}] plays champion {card_name} ({color})")
                }
            }
            GameEvent::PhaseChanged { seat, phase } => format!("[{seat}] {phase} phase"),
            GameEvent::LifeChanged { seat, life } => format!("[{seat}] life is now {life}"),
            GameEvent::AttackResolved { attacker, outcome } => match outcome {
                AttackOutcome::MutualDefeat => {
                    format!("[{attacker}] attacks: equal colors, both champions fall")
                }
                AttackOutcome::DefenderDefeated => {
                    format!("[{attacker}] attacks: defender pushed out of bounds")
                }
                AttackOutcome::DefenderPushed { new_color } => {
                    format!("[{attacker}] attacks: defender shifts to {new_color}")
                }
                AttackOutcome::Direct { damage } => {
                    format!("[{attacker}] attacks directly for {damage}")
                }
            },
            GameEvent::ChampionDefeated { seat } => format!("[{seat}] champion goes to the tomb"),
            GameEvent::TurnEnded { seat } => format!("[{seat}] ends their turn"),
            GameEvent::GameOver { result } => format!("*** Game over: {result:?} ***"),
        }
    }
}

impl EventSink for BattleLogger {
    fn publish(&mut self, event: &GameEvent) {
        if self.verbosity >= Self::level_of(event) && self.verbosity != VerbosityLevel::Silent {
            println!("{}", Self::render(event));
        }
    }
}
