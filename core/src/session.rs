use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Game in progress, commands are accepted.
    #[default]
    Initial,
    GameOver,
    Victory,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::GameOver | Self::Victory)
    }

    /// Status emoji for a finished game, `None` while it runs.
    pub const fn face(self) -> Option<&'static str> {
        match self {
            Self::Initial => None,
            Self::GameOver => Some("🤯"),
            Self::Victory => Some("🥳"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Reveal,
    ToggleFlag,
}

/// A single player input aimed at one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub action: Action,
    pub cell: CellIndex,
}

impl Command {
    pub const fn reveal(cell: CellIndex) -> Self {
        Self {
            action: Action::Reveal,
            cell,
        }
    }

    pub const fn toggle_flag(cell: CellIndex) -> Self {
        Self {
            action: Action::ToggleFlag,
            cell,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    NoChange,
    /// `count` cells went from hidden to revealed.
    Revealed { count: CellCount },
    Flagged,
    Unflagged,
    HitMine,
    Won,
}

impl CommandOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// One running game: the minefield plus everything that used to live next to it.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    minefield: Minefield,
    status: GameStatus,
    time: u32,
    triggered_mine: Option<CellIndex>,
}

impl GameSession {
    pub fn new(config: &BoardConfig, seed: u64) -> Result<Self> {
        let minefield = ShuffleMinefieldGenerator::new(seed).generate(config)?;
        Ok(Self::from_minefield(minefield))
    }

    pub fn with_difficulty(difficulty: Difficulty, seed: u64) -> Result<Self> {
        Self::new(&difficulty.config(), seed)
    }

    pub fn from_minefield(minefield: Minefield) -> Self {
        Self {
            minefield,
            status: GameStatus::Initial,
            time: 0,
            triggered_mine: None,
        }
    }

    /// Rebuilds a session from persisted state, rejecting fields that could not have been
    /// generated.
    pub fn restore(saved: SavedGame) -> Result<Self> {
        let SavedGame {
            minefield,
            status,
            time,
        } = saved;
        minefield.validate()?;

        let revealed_mine = minefield.cells().any(|cell| cell.mine && cell.revealed);
        if revealed_mine && !matches!(status, GameStatus::GameOver) {
            log::warn!("Saved {:?} game has a revealed mine", status);
            return Err(GameError::InvalidBoardShape);
        }

        let triggered_mine = match status {
            GameStatus::GameOver => minefield
                .cells()
                .find(|cell| cell.mine && cell.revealed)
                .map(|cell| cell.index),
            _ => None,
        };

        Ok(Self {
            minefield,
            status,
            time,
            triggered_mine,
        })
    }

    pub fn snapshot(&self) -> SavedGame {
        SavedGame {
            minefield: self.minefield.clone(),
            status: self.status,
            time: self.time,
        }
    }

    pub fn minefield(&self) -> &Minefield {
        &self.minefield
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Elapsed seconds.
    pub fn time(&self) -> u32 {
        self.time
    }

    pub fn triggered_mine(&self) -> Option<CellIndex> {
        self.triggered_mine
    }

    pub fn mines_left(&self) -> i32 {
        i32::from(self.minefield.mine_count()) - i32::from(self.minefield.flagged_count())
    }

    /// Advances the clock by one second while the game runs, returns whether it did.
    pub fn tick(&mut self) -> bool {
        if self.status.is_finished() {
            return false;
        }
        self.time = self.time.saturating_add(1);
        true
    }

    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome> {
        let index = self.minefield.validate_index(command.cell)?;
        self.check_not_finished()?;

        match command.action {
            Action::Reveal => self.reveal(index),
            Action::ToggleFlag => self.toggle_flag(index),
        }
    }

    pub fn reveal(&mut self, index: CellIndex) -> Result<CommandOutcome> {
        use CommandOutcome::*;

        self.check_not_finished()?;
        let cell = *self.minefield.cell(index)?;

        if cell.revealed || cell.flag {
            return Ok(NoChange);
        }

        if cell.mine {
            self.minefield.cell_mut(index)?.revealed = true;
            self.triggered_mine = Some(index);
            self.end_game(GameStatus::GameOver);
            return Ok(HitMine);
        }

        let cells = self.minefield.cascade_from(index)?;
        let count = self.minefield.reveal_cells(&cells)?;

        Ok(if self.check_victory() {
            Won
        } else {
            Revealed { count }
        })
    }

    pub fn toggle_flag(&mut self, index: CellIndex) -> Result<CommandOutcome> {
        use CommandOutcome::*;

        self.check_not_finished()?;
        let cell = self.minefield.cell_mut(index)?;

        if cell.revealed {
            return Ok(NoChange);
        }
        cell.flag = !cell.flag;
        let flagged = cell.flag;

        Ok(if self.check_victory() {
            Won
        } else if flagged {
            Flagged
        } else {
            Unflagged
        })
    }

    fn check_victory(&mut self) -> bool {
        if self.minefield.is_victory() {
            self.end_game(GameStatus::Victory);
            true
        } else {
            false
        }
    }

    fn end_game(&mut self, status: GameStatus) {
        if self.status.is_finished() {
            return;
        }
        log::info!("Game ended: {:?} after {}s", status, self.time);
        self.status = status;
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
