//! Error types for the isolation core.

use thiserror::Error;

use crate::types::Coord;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The move is off the board, blocked, or not reachable from the mover's cell.
    #[error("illegal move {mv}: not in the active player's legal moves")]
    IllegalMove { mv: Coord },

    #[error("no legal moves available: position is terminal")]
    NoLegalMoves,

    #[error("invalid board configuration: {message}")]
    InvalidConfig { message: String },

    #[error("failed to parse board configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
