//! Error taxonomy for engine actions.

use thiserror::Error;

/// Errors surfaced by resolver and persistence operations.
///
/// A `Validation` rejection leaves the player unmodified; the embedded reason
/// is safe to show to the player verbatim.
#[derive(Debug, Error)]
pub enum GameError {
    /// The action's preconditions were not met (insufficient gold, wrong
    /// state, cooldown active, ...). No partial mutation was applied.
    #[error("{0}")]
    Validation(String),

    /// Another mutation of the same player landed first. The caller should
    /// reload and retry the whole action.
    #[error("state conflict for player {player_id}: expected revision {expected}, found {found}")]
    StateConflict {
        player_id: String,
        expected: u64,
        found: u64,
    },

    /// The player record could not be read or written. The in-memory
    /// mutation may not have been durably saved.
    #[error("persistence error: {0}")]
    Persistence(#[from] std::io::Error),

    /// A referenced id is missing from the catalog and the registry is
    /// configured to fail loud instead of substituting.
    #[error("missing catalog id: {0}")]
    MissingCatalogId(String),
}

impl GameError {
    pub fn validation(reason: impl Into<String>) -> Self {
        GameError::Validation(reason.into())
    }
}

pub type GameResult<T> = Result<T, GameError>;
