//! Turn phases and turn structure
//!
//! Phases run in a strict cycle: DRAW -> CHAMPION -> COMBAT -> END, then DRAW
//! for the other seat. The very first turn of the starting seat carries a
//! first-turn flag that forbids attacking; it clears at the first END.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two seats of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Human,
    Ai,
}

impl Seat {
    pub fn opponent(&self) -> Seat {
        match self {
            Seat::Human => Seat::Ai,
            Seat::Ai => Seat::Human,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Human => write!(f, "Player"),
            Seat::Ai => write!(f, "AI"),
        }
    }
}

/// Phases of a turn, in cycle order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Draw,
    Champion,
    Combat,
    End,
}

impl Phase {
    /// Next phase in the cycle; END wraps to DRAW (of the next turn)
    pub fn next(&self) -> Phase {
        match self {
            Phase::Draw => Phase::Champion,
            Phase::Champion => Phase::Combat,
            Phase::Combat => Phase::End,
            Phase::End => Phase::Draw,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Phase::Draw => "Draw Phase - Draw a card from your deck",
            Phase::Champion => "Champion Phase - Play a card from your hand",
            Phase::Combat => "Combat Phase - Attack with your champion",
            Phase::End => "End Phase - End your turn",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Draw => "DRAW",
            Phase::Champion => "CHAMPION",
            Phase::Combat => "COMBAT",
            Phase::End => "END",
        };
        write!(f, "{name}")
    }
}

/// Whose turn it is, where in the turn we are, and the first-turn restriction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnStructure {
    /// Current turn number (starts at 1)
    pub turn_number: u32,

    pub phase: Phase,

    /// Seat currently taking its turn
    pub active: Seat,

    /// True only during the starting seat's very first turn; attacks are
    /// disallowed while set
    pub first_turn: bool,
}

impl TurnStructure {
    pub fn new(starting: Seat) -> Self {
        TurnStructure {
            turn_number: 1,
            phase: Phase::Draw,
            active: starting,
            first_turn: true,
        }
    }

    /// Move to the next phase within the current turn
    pub fn advance_phase(&mut self) {
        debug_assert!(self.phase != Phase::End, "END advances via next_turn");
        self.phase = self.phase.next();
    }

    /// Close out END: swap the active seat, bump the counter, clear the
    /// first-turn flag, reset to DRAW
    pub fn next_turn(&mut self) {
        self.turn_number += 1;
        self.active = self.active.opponent();
        self.first_turn = false;
        self.phase = Phase::Draw;
    }

    /// Is attacking forbidden right now by the first-turn restriction?
    pub fn attack_restricted(&self) -> bool {
        self.first_turn
    }
}
