//! Error types for the battle engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// An intent arrived in the wrong phase, from the wrong seat, or with an
    /// illegal target. Recoverable: the engine state is unchanged.
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// A deck failed the 10-card invariant or referenced an unknown catalog id.
    /// Contract violations by the caller, not in-game situations.
    #[error("Invalid deck: {0}")]
    InvalidDeck(String),

    #[error("Unknown catalog card: {0}")]
    UnknownCard(String),

    #[error("Card not found: {0}")]
    CardNotFound(u32),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
