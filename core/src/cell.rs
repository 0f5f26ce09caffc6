use serde::{Deserialize, Serialize};

use crate::*;

/// One position on the minefield together with its player-visible state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub index: CellIndex,
    pub x: Coord,
    pub y: Coord,
    pub mine: bool,
    pub flag: bool,
    pub revealed: bool,
    /// Mines among the neighbors, fixed once the field is generated.
    pub adjacent: u8,
}

impl Cell {
    pub const fn coords(&self) -> Coord2 {
        (self.x, self.y)
    }

    pub const fn is_hidden(&self) -> bool {
        !self.revealed
    }

    /// Whether a reveal on this cell would do anything while the game runs.
    pub const fn is_clickable(&self, status: GameStatus) -> bool {
        !self.revealed && !self.flag && matches!(status, GameStatus::Initial)
    }

    /// Colour class for the adjacent count, `"zero"` through `"eight"`.
    pub const fn tone(&self) -> &'static str {
        const TONES: [&str; 10] = [
            "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
        ];
        if (self.adjacent as usize) < TONES.len() {
            TONES[self.adjacent as usize]
        } else {
            TONES[TONES.len() - 1]
        }
    }

    pub const fn face(&self) -> CellFace {
        if self.mine && self.revealed {
            CellFace::Mine
        } else if self.flag {
            CellFace::Flagged
        } else if self.revealed {
            CellFace::Open(self.adjacent)
        } else {
            CellFace::Hidden
        }
    }
}

/// What a renderer should draw for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellFace {
    Hidden,
    Flagged,
    /// A revealed mine, only seen after a loss.
    Mine,
    Open(u8),
}

impl CellFace {
    pub const fn glyph(self) -> &'static str {
        const DIGITS: [&str; 9] = ["", "1", "2", "3", "4", "5", "6", "7", "8"];
        match self {
            Self::Hidden => "",
            Self::Flagged => "🚩",
            Self::Mine => "💣",
            Self::Open(count) if (count as usize) < DIGITS.len() => DIGITS[count as usize],
            Self::Open(_) => "",
        }
    }
}
