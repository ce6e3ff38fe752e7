/// Single grid axis, used for width, height and each half of a position.
pub type Coord = u8;

/// Count type for mines, flags and cells.
pub type CellCount = u16;

/// Grid position or size as `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Conversion from game coordinates into an `ndarray` index.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Number of cells in a `width * height` area, saturating at `CellCount::MAX`.
pub const fn area((width, height): Coord2) -> CellCount {
    (width as CellCount).saturating_mul(height as CellCount)
}

/// Neighbour offsets in row-major order, centre excluded.
const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

fn offset_within(center: Coord2, (dx, dy): (i8, i8), (width, height): Coord2) -> Option<Coord2> {
    let x = center.0.checked_add_signed(dx).filter(|&x| x < width)?;
    let y = center.1.checked_add_signed(dy).filter(|&y| y < height)?;
    Some((x, y))
}

/// Iterates over the in-bounds neighbours of a cell, always in the same order.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    size: Coord2,
    next_offset: usize,
}

impl NeighborIter {
    pub fn new(center: Coord2, size: Coord2) -> Self {
        Self {
            center,
            size,
            next_offset: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&offset) = OFFSETS.get(self.next_offset) {
            self.next_offset += 1;
            if let Some(coords) = offset_within(self.center, offset, self.size) {
                return Some(coords);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(OFFSETS.len() - self.next_offset))
    }
}
