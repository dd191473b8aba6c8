//! Error types for the game core

use thiserror::Error;

/// Faults raised by the game core.
///
/// Clicks on occupied cells or on a concluded game are not faults; those come
/// back as [`crate::game::PlayOutcome::Rejected`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("cell index {index} is out of range (expected 0..=8)")]
    CellOutOfRange { index: usize },

    #[error("move #{position} is out of range (history has {len} entries)")]
    MoveOutOfRange { position: usize, len: usize },

    #[error("invalid game options: {0}")]
    Options(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
