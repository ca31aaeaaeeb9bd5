//! Color Clash - a two-seat card battle engine on an eight-color wheel
//!
//! Champions carry one of eight ordered colors; combat pushes the defender
//! around the wheel and defeat happens at the terminal bounds. The engine is
//! headless and event-driven: a presentation layer issues intents and observes
//! the resulting state transitions through an injected sink.

pub mod ai;
pub mod catalog;
pub mod core;
pub mod error;
pub mod game;
pub mod zones;

pub use error::{EngineError, Result};
