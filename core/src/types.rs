use smallvec::SmallVec;

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Row-major position of a cell, `y * width + x`.
pub type CellIndex = CellCount;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Neighbor indices of a single cell, never more than eight.
pub type Neighbors = SmallVec<[CellIndex; 8]>;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    /// `[row, column]`, matching the row-major grid layout.
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Row-major indices of the in-bounds cells in the 3x3 window around `center`, the center
/// itself excluded. Cells come out top row first, left to right.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    /// Position inside the window, `0..9`, 4 being the center.
    slot: u8,
}

impl NeighborIter {
    const CENTER_SLOT: u8 = 4;
    const SLOTS: u8 = 9;

    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            slot: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = CellIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let (x, y) = self.center;
        let (width, height) = self.bounds;

        while self.slot < Self::SLOTS {
            let slot = self.slot;
            self.slot += 1;
            if slot == Self::CENTER_SLOT {
                continue;
            }

            // widened so the right/bottom step cannot overflow a Coord
            let Some(nx) = (CellIndex::from(x) + CellIndex::from(slot % 3)).checked_sub(1) else {
                continue;
            };
            let Some(ny) = (CellIndex::from(y) + CellIndex::from(slot / 3)).checked_sub(1) else {
                continue;
            };
            if nx < CellIndex::from(width) && ny < CellIndex::from(height) {
                return Some(ny * CellIndex::from(width) + nx);
            }
        }
        None
    }
}
