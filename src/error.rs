//! Error types for the Six Nations Fantasy engine

use thiserror::Error;


pub type Result<T> = std::result::Result<T, FantasyError>;

#[derive(Error, Debug)]
pub enum FantasyError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid player {id}: {reason}")]
    InvalidPlayer { id: String, reason: String },

    #[error("Invalid match {id}: {reason}")]
    InvalidMatch { id: String, reason: String },

    #[error("Invalid country: {country}")]
    InvalidCountry { country: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid rules: {reason}")]
    InvalidRules { reason: String },

    #[error("Player {id} already in squad")]
    DuplicatePlayer { id: String },

    #[error("Player {id} not in squad")]
    PlayerNotFound { id: String },

    #[error("Unknown player {id}: not in the player pool")]
    UnknownPlayer { id: String },

    #[error("Captain cannot also be supersub ({id})")]
    RoleConflict { id: String },
}
