use crate::*;

impl Minefield {
    /// Victory holds when no cell is left both hidden and unflagged, and every mine carries a
    /// flag.
    ///
    /// Flags on safe cells do not break the first half: a hidden safe cell under a flag counts
    /// as settled.
    pub fn is_victory(&self) -> bool {
        let nothing_left_open = self.cells().all(|cell| cell.revealed || cell.flag);
        nothing_left_open && self.flagged_mine_count() == self.mine_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every mine flagged, every safe cell revealed.
    fn solved(width: Coord, height: Coord, mines: &[CellIndex]) -> Minefield {
        let mut minefield = Minefield::from_mine_indices(width, height, mines).unwrap();
        for index in 0..minefield.total_cells() {
            let cell = minefield.cell_mut(index).unwrap();
            if cell.mine {
                cell.flag = true;
            } else {
                cell.revealed = true;
            }
        }
        minefield
    }

    #[test]
    fn solved_board_is_a_victory() {
        assert!(solved(4, 4, &[0, 5, 15]).is_victory());
    }

    #[test]
    fn removing_any_flag_breaks_victory() {
        let mines = [0, 5, 15];
        for mine in mines {
            let mut minefield = solved(4, 4, &mines);
            minefield.cell_mut(mine).unwrap().flag = false;
            assert!(!minefield.is_victory(), "mine {mine}");
        }
    }

    #[test]
    fn hiding_any_safe_cell_breaks_victory() {
        let mines = [0, 5, 15];
        let total = solved(4, 4, &mines).total_cells();
        for index in (0..total).filter(|index| !mines.contains(index)) {
            let mut minefield = solved(4, 4, &mines);
            minefield.cell_mut(index).unwrap().revealed = false;
            assert!(!minefield.is_victory(), "cell {index}");
        }
    }

    #[test]
    fn fresh_board_is_not_a_victory() {
        let minefield = Minefield::from_mine_indices(3, 3, &[4]).unwrap();
        assert!(!minefield.is_victory());
    }

    #[test]
    fn flagged_hidden_safe_cell_still_counts_as_settled() {
        let mut minefield = solved(3, 1, &[0]);
        let cell = minefield.cell_mut(2).unwrap();
        cell.revealed = false;
        cell.flag = true;
        assert!(minefield.is_victory());
    }

    #[test]
    fn mine_free_board_wins_once_revealed() {
        assert!(solved(2, 2, &[]).is_victory());
    }
}
