use alloc::vec::Vec;

use super::*;

/// Places exactly `config.mine_count()` mines by shuffling a mask that starts with all mines up
/// front.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffleMinefieldGenerator {
    seed: u64,
    mode: ShuffleMode,
}

impl ShuffleMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self::with_mode(seed, ShuffleMode::default())
    }

    pub fn with_mode(seed: u64, mode: ShuffleMode) -> Self {
        Self { seed, mode }
    }
}

impl MinefieldGenerator for ShuffleMinefieldGenerator {
    fn generate(self, config: &BoardConfig) -> Result<Minefield> {
        use rand::prelude::*;

        config.validate()?;

        let total_cells = usize::from(config.total_cells());
        let mine_count = usize::from(config.mine_count());

        let mut mine_mask: Vec<bool> = (0..total_cells).map(|i| i < mine_count).collect();

        let mut rng = SmallRng::seed_from_u64(self.seed);
        for i in (1..total_cells).rev() {
            let j = match self.mode {
                ShuffleMode::Uniform => rng.random_range(0..=i),
                ShuffleMode::Legacy => rng.random_range(0..i),
            };
            mine_mask.swap(i, j);
        }

        let minefield = Minefield::from_mine_mask(config.width, config.height, &mine_mask)?;
        log::debug!(
            "Generated {}x{} minefield with {} mines, seed: {}, mode: {:?}",
            config.width,
            config.height,
            minefield.mine_count(),
            self.seed,
            self.mode
        );
        Ok(minefield)
    }
}
