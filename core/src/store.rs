use alloc::string::String;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::*;

/// Everything needed to pick a game back up after a reload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedGame {
    pub minefield: Minefield,
    pub status: GameStatus,
    pub time: u32,
}

impl SavedGame {
    /// Only running games with an actual board are picked back up.
    pub fn is_resumable(&self) -> bool {
        matches!(self.status, GameStatus::Initial) && self.minefield.total_cells() > 0
    }

    pub fn to_json(&self) -> core::result::Result<String, StoreError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> core::result::Result<Self, StoreError> {
        let saved: Self = serde_json::from_str(json)?;
        saved.minefield.validate()?;
        Ok(saved)
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Malformed saved game: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Saved game rejected: {0}")]
    Game(#[from] GameError),
}

/// Where a host keeps the last game between page loads.
pub trait GameStore {
    type Error: core::fmt::Debug;

    /// The last saved game, `None` when nothing was stored yet.
    fn load(&self) -> core::result::Result<Option<SavedGame>, Self::Error>;

    fn save(&mut self, game: &SavedGame) -> core::result::Result<(), Self::Error>;
}

/// Keeps the encoded game in memory, the same way a browser keeps it under a storage key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStore {
    raw: Option<String>,
}

impl MemoryStore {
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl GameStore for MemoryStore {
    type Error = StoreError;

    fn load(&self) -> core::result::Result<Option<SavedGame>, Self::Error> {
        self.raw.as_deref().map(SavedGame::from_json).transpose()
    }

    fn save(&mut self, game: &SavedGame) -> core::result::Result<(), Self::Error> {
        self.raw = Some(game.to_json()?);
        Ok(())
    }
}
