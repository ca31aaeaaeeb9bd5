//! Tiered AI decision engine

pub mod easy;
pub mod hard;
pub mod intermediate;
pub mod strategy;
pub mod tables;

pub use strategy::{select_card_to_play, should_attack, DecisionContext, Difficulty};
