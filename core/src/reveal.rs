use alloc::vec;
use alloc::vec::Vec;
use hashbrown::HashSet;

use crate::*;

impl Minefield {
    /// Every cell a reveal of `origin` opens, sorted by index.
    ///
    /// Starting from `origin`, a cell spreads to all of its neighbors when none of those neighbors
    /// hold a mine. The cell's own `adjacent` count is not consulted, so numbered cells at the
    /// rim of an empty region are included but never spread further. Mines are never reached
    /// through spreading, only `origin` itself can be one.
    pub fn cascade_from(&self, origin: CellIndex) -> Result<Vec<CellIndex>> {
        let origin = self.validate_index(origin)?;

        let mut to_reveal: HashSet<CellIndex> = HashSet::new();
        to_reveal.insert(origin);
        let mut to_visit = vec![origin];

        while let Some(index) = to_visit.pop() {
            let neighbors = self.neighbors(index)?;
            if neighbors.iter().all(|&neighbor| !self[neighbor].mine) {
                to_visit.extend(
                    neighbors
                        .into_iter()
                        .filter(|&neighbor| to_reveal.insert(neighbor)),
                );
            }
        }

        let mut cells: Vec<_> = to_reveal.into_iter().collect();
        cells.sort_unstable();
        log::debug!("Cascade from {} opens {} cells", origin, cells.len());
        Ok(cells)
    }

    /// Clears the flag and reveals each of `cells`, returning how many were hidden before.
    pub(crate) fn reveal_cells(&mut self, cells: &[CellIndex]) -> Result<CellCount> {
        let mut newly_revealed = 0;
        for &index in cells {
            let cell = self.cell_mut(index)?;
            cell.flag = false;
            if !cell.revealed {
                cell.revealed = true;
                newly_revealed += 1;
            }
        }
        Ok(newly_revealed)
    }
}
