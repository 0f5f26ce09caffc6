use alloc::vec;
use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The full grid of cells for one game, stored row-major.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    width: Coord,
    height: Coord,
    cells: Array2<Cell>,
}

impl Minefield {
    /// Lays out `mine_mask` row-major over a `width` by `height` grid and counts adjacent mines.
    pub fn from_mine_mask(width: Coord, height: Coord, mine_mask: &[bool]) -> Result<Self> {
        let total = usize::from(mult(width, height));
        if total == 0 {
            return Err(GameError::InvalidDimension);
        }
        if mine_mask.len() != total {
            return Err(GameError::InvalidBoardShape);
        }

        let cells = Array2::from_shape_fn(
            (usize::from(height), usize::from(width)),
            |(y, x)| {
                let index = y * usize::from(width) + x;
                Cell {
                    // all three fit, the grid is at most Coord::MAX on each side
                    index: index as CellIndex,
                    x: x as Coord,
                    y: y as Coord,
                    mine: mine_mask[index],
                    ..Default::default()
                }
            },
        );

        let mut minefield = Self {
            width,
            height,
            cells,
        };
        minefield.count_adjacent_mines();
        Ok(minefield)
    }

    pub fn from_mine_indices(width: Coord, height: Coord, mines: &[CellIndex]) -> Result<Self> {
        let total = mult(width, height);
        if total == 0 {
            return Err(GameError::InvalidDimension);
        }

        let mut mine_mask = vec![false; usize::from(total)];
        for &index in mines {
            *mine_mask
                .get_mut(usize::from(index))
                .ok_or(GameError::IndexOutOfRange)? = true;
        }

        Self::from_mine_mask(width, height, &mine_mask)
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    pub fn size(&self) -> Coord2 {
        (self.width, self.height)
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_cells(|cell| cell.mine)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_cells(|cell| cell.flag)
    }

    pub fn flagged_mine_count(&self) -> CellCount {
        self.count_cells(|cell| cell.mine && cell.flag)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_cells(|cell| cell.revealed)
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if index < self.total_cells() {
            Ok(index)
        } else {
            Err(GameError::IndexOutOfRange)
        }
    }

    pub fn coords_of(&self, index: CellIndex) -> Result<Coord2> {
        let index = self.validate_index(index)?;
        let width = CellIndex::from(self.width);
        Ok(((index % width) as Coord, (index / width) as Coord))
    }

    pub fn index_of(&self, coords: Coord2) -> Result<CellIndex> {
        let (x, y) = coords;
        if x < self.width && y < self.height {
            Ok(CellIndex::from(y) * CellIndex::from(self.width) + CellIndex::from(x))
        } else {
            Err(GameError::IndexOutOfRange)
        }
    }

    pub fn cell(&self, index: CellIndex) -> Result<&Cell> {
        let coords = self.coords_of(index)?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    pub(crate) fn cell_mut(&mut self, index: CellIndex) -> Result<&mut Cell> {
        let coords = self.coords_of(index)?;
        Ok(&mut self.cells[coords.to_nd_index()])
    }

    /// Indices of every cell within one step of `index` in both axes, `index` excluded.
    pub fn neighbors(&self, index: CellIndex) -> Result<Neighbors> {
        let center = self.coords_of(index)?;
        Ok(NeighborIter::new(center, self.size()).collect())
    }

    pub fn neighbor_cells(&self, index: CellIndex) -> Result<impl Iterator<Item = &Cell>> {
        let center = self.coords_of(index)?;
        Ok(NeighborIter::new(center, self.size())
            .map(move |index| &self[index]))
    }

    /// Counts mines around `index` directly, ignoring the stored `adjacent` value.
    pub fn adjacent_mine_count(&self, index: CellIndex) -> Result<u8> {
        Ok(self
            .neighbor_cells(index)?
            .filter(|cell| cell.mine)
            .count()
            .try_into()
            .unwrap_or(u8::MAX))
    }

    /// Checks the internal consistency of a field that did not come out of the generator.
    pub fn validate(&self) -> Result<()> {
        if self.total_cells() == 0 {
            return Err(GameError::InvalidDimension);
        }
        if self.cells.dim() != (usize::from(self.height), usize::from(self.width)) {
            return Err(GameError::InvalidBoardShape);
        }

        for ((y, x), cell) in self.cells.indexed_iter() {
            let expected_index = y * usize::from(self.width) + x;
            if usize::from(cell.index) != expected_index
                || usize::from(cell.x) != x
                || usize::from(cell.y) != y
            {
                return Err(GameError::InvalidBoardShape);
            }
            if cell.adjacent != self.adjacent_mine_count(cell.index)? {
                return Err(GameError::InvalidBoardShape);
            }
        }

        Ok(())
    }

    fn count_adjacent_mines(&mut self) {
        let size = self.size();
        let counts: Vec<u8> = self
            .cells
            .iter()
            .map(|cell| {
                NeighborIter::new(cell.coords(), size)
                    .filter(|&index| self[index].mine)
                    .count() as u8
            })
            .collect();
        for (cell, adjacent) in self.cells.iter_mut().zip(counts) {
            cell.adjacent = adjacent;
        }
    }

    fn count_cells(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        // never more than total_cells
        self.cells.iter().filter(|cell| predicate(cell)).count() as CellCount
    }
}

impl Index<CellIndex> for Minefield {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        let width = CellIndex::from(self.width);
        &self.cells[[usize::from(index / width), usize::from(index % width)]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(width: Coord, height: Coord, mines: &[CellIndex]) -> Minefield {
        Minefield::from_mine_indices(width, height, mines).unwrap()
    }

    fn brute_force_neighbors(minefield: &Minefield, index: CellIndex) -> Vec<CellIndex> {
        let origin = minefield[index];
        minefield
            .cells()
            .filter(|cell| cell.index != index)
            .filter(|cell| cell.x.abs_diff(origin.x) <= 1 && cell.y.abs_diff(origin.y) <= 1)
            .map(|cell| cell.index)
            .collect()
    }

    #[test]
    fn cells_unwrap_row_major() {
        let minefield = field(4, 3, &[]);
        let coords: Vec<_> = minefield.cells().map(|cell| (cell.index, cell.x, cell.y)).collect();

        assert_eq!(coords.len(), 12);
        assert_eq!(coords[0], (0, 0, 0));
        assert_eq!(coords[3], (3, 3, 0));
        assert_eq!(coords[4], (4, 0, 1));
        assert_eq!(coords[11], (11, 3, 2));
    }

    #[test]
    fn neighbors_match_brute_force_scan() {
        let minefield = field(5, 4, &[]);
        for index in 0..minefield.total_cells() {
            let mut neighbors = minefield.neighbors(index).unwrap().to_vec();
            neighbors.sort_unstable();
            assert_eq!(neighbors, brute_force_neighbors(&minefield, index), "cell {index}");
        }
    }

    #[test]
    fn neighbors_of_corner_and_edge() {
        let minefield = field(3, 3, &[]);
        assert_eq!(minefield.neighbors(0).unwrap().as_slice(), &[1, 3, 4]);
        assert_eq!(minefield.neighbors(8).unwrap().as_slice(), &[4, 5, 7]);
        assert_eq!(minefield.neighbors(1).unwrap().as_slice(), &[0, 2, 3, 4, 5]);
    }

    #[test]
    fn adjacent_counts_are_precomputed() {
        let minefield = field(3, 3, &[0, 2]);
        let counts: Vec<_> = minefield.cells().map(|cell| cell.adjacent).collect();

        assert_eq!(counts, [0, 2, 0, 1, 2, 1, 0, 0, 0]);
        for cell in minefield.cells() {
            assert_eq!(cell.adjacent, minefield.adjacent_mine_count(cell.index).unwrap());
        }
    }

    #[test]
    fn index_zero_is_a_regular_cell() {
        let minefield = field(2, 2, &[0]);
        assert!(minefield.cell(0).unwrap().mine);
        assert_eq!(minefield.coords_of(0), Ok((0, 0)));
    }

    #[test]
    fn out_of_range_lookups_fail() {
        let minefield = field(3, 2, &[]);
        assert_eq!(minefield.cell(6), Err(GameError::IndexOutOfRange));
        assert_eq!(minefield.neighbors(6), Err(GameError::IndexOutOfRange));
        assert_eq!(minefield.index_of((3, 0)), Err(GameError::IndexOutOfRange));
        assert_eq!(minefield.index_of((2, 1)), Ok(5));
        assert_eq!(
            Minefield::from_mine_indices(3, 2, &[6]),
            Err(GameError::IndexOutOfRange)
        );
    }

    #[test]
    fn rejects_empty_or_mismatched_masks() {
        assert_eq!(
            Minefield::from_mine_mask(0, 3, &[]),
            Err(GameError::InvalidDimension)
        );
        assert_eq!(
            Minefield::from_mine_mask(2, 2, &[false; 3]),
            Err(GameError::InvalidBoardShape)
        );
    }

    #[test]
    fn validate_detects_tampered_counts() {
        let mut minefield = field(3, 3, &[4]);
        assert_eq!(minefield.validate(), Ok(()));

        minefield.cell_mut(0).unwrap().adjacent = 0;
        assert_eq!(minefield.validate(), Err(GameError::InvalidBoardShape));
    }

    #[test]
    fn counters_track_cell_state() {
        let mut minefield = field(3, 3, &[0, 1]);
        minefield.cell_mut(0).unwrap().flag = true;
        minefield.cell_mut(2).unwrap().flag = true;
        minefield.cell_mut(8).unwrap().revealed = true;

        assert_eq!(minefield.mine_count(), 2);
        assert_eq!(minefield.flagged_count(), 2);
        assert_eq!(minefield.flagged_mine_count(), 1);
        assert_eq!(minefield.revealed_count(), 1);
    }
}
