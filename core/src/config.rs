use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Parameters for generating a new minefield.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub height: Coord,
    pub width: Coord,
    pub mine_density: f64,
}

impl BoardConfig {
    pub const fn new_unchecked(height: Coord, width: Coord, mine_density: f64) -> Self {
        Self {
            height,
            width,
            mine_density,
        }
    }

    pub fn new(height: Coord, width: Coord, mine_density: f64) -> Result<Self> {
        let config = Self::new_unchecked(height, width, mine_density);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.total_cells() == 0 {
            return Err(GameError::InvalidDimension);
        }
        // NaN fails the range check as well
        if !(0.0..=1.0).contains(&self.mine_density) {
            return Err(GameError::InvalidDensity);
        }
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.width, self.height)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    /// `floor(mine_density * total_cells)`.
    pub fn mine_count(&self) -> CellCount {
        let mines = self.mine_density * f64::from(self.total_cells());
        // truncation is floor for non-negative values
        (mines as CellCount).min(self.total_cells())
    }
}

/// How the mine mask gets shuffled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShuffleMode {
    /// Fisher-Yates, swap partner drawn from `[0, i]`.
    #[default]
    Uniform,
    /// Swap partner drawn from `[0, i)`, as older saves were generated. Only produces cyclic
    /// permutations, so placement is slightly biased.
    Legacy,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn config(self) -> BoardConfig {
        use Difficulty::*;
        match self {
            Easy => BoardConfig::new_unchecked(16, 16, 0.1),
            Medium => BoardConfig::new_unchecked(32, 32, 0.1),
            Hard => BoardConfig::new_unchecked(64, 64, 0.1),
        }
    }

    /// Button text shown on the difficulty picker.
    pub const fn label(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "Easy",
            Medium => "Medium",
            Hard => "Hard",
        }
    }

    /// Status emoji shown while picking this difficulty.
    pub const fn face(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "😎",
            Medium => "😣",
            Hard => "🤬",
        }
    }

    pub const fn key(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "easy",
            Medium => "medium",
            Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.key() == s)
            .ok_or(GameError::UnknownDifficulty)
    }
}
