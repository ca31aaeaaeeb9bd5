//! Battle engine: turn structure, combat resolution, events, and intents

pub mod combat;
pub mod engine;
pub mod events;
pub mod logger;
pub mod phase;
pub mod state;

pub use engine::{AttackTarget, BattleEngine};
pub use events::{EventSink, GameEvent, NullSink, RecordingSink};
pub use logger::{BattleLogger, VerbosityLevel};
pub use phase::{Phase, Seat, TurnStructure};
pub use state::{BattleResult, BattleSnapshot, BattleState, STARTING_HAND_SIZE};
