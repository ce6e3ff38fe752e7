use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular board of cells indexed by `(x, y)`.
///
/// The grid only knows about bounds; game rules live in [`reveal`], [`flags`]
/// and [`GameSession`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    pub fn new(size: Coord2) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidDimension);
        }
        Ok(Self {
            cells: Array2::default(size.to_nd_index()),
        })
    }

    pub fn size(&self) -> Coord2 {
        let (width, height) = self.cells.dim();
        // dimensions come from a Coord2 in `new`
        (width as Coord, height as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        area(self.size())
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size.0 && coords.1 < size.1
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self[coords])
    }

    pub fn cell_at_mut(&mut self, coords: Coord2) -> Result<&mut Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&mut self[coords])
    }

    /// In-bounds neighbours of `coords` in row-major offset order.
    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most eight neighbours, always fits
        self.neighbors(coords).filter(|&pos| self[pos].has_mine).count() as u8
    }

    pub fn mine_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.has_mine).count() as CellCount
    }

    /// Every position in column-major order, matching the `ndarray` layout.
    pub fn coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (width, height) = self.size();
        (0..width).flat_map(move |x| (0..height).map(move |y| (x, y)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.coords().map(|coords| (coords, &self[coords]))
    }

    pub(crate) fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_has_default_cells() {
        let grid = Grid::new((4, 3)).unwrap();

        assert_eq!(grid.size(), (4, 3));
        assert_eq!(grid.total_cells(), 12);
        assert!(grid.iter().all(|(_, cell)| *cell == Cell::default()));
        assert_eq!(grid.cell_at((3, 2)).unwrap().adjacent_mines(), None);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(Grid::new((0, 5)), Err(GameError::InvalidDimension));
        assert_eq!(Grid::new((5, 0)), Err(GameError::InvalidDimension));
    }

    #[test]
    fn cell_at_rejects_out_of_bounds() {
        let mut grid = Grid::new((2, 2)).unwrap();

        assert_eq!(grid.cell_at((2, 0)), Err(GameError::OutOfBounds));
        assert_eq!(grid.cell_at((0, 2)), Err(GameError::OutOfBounds));
        assert!(grid.cell_at_mut((1, 1)).is_ok());
    }

    #[test]
    fn edge_neighbors_are_clipped() {
        let grid = Grid::new((3, 2)).unwrap();

        assert_eq!(grid.neighbors((0, 0)).count(), 3);
        assert_eq!(grid.neighbors((1, 0)).count(), 5);
        assert_eq!(grid.neighbors((2, 1)).count(), 3);
    }

    #[test]
    fn adjacent_mine_count_only_looks_at_neighbors() {
        let mut grid = Grid::new((3, 3)).unwrap();
        grid[(0, 0)].has_mine = true;
        grid[(2, 2)].has_mine = true;

        assert_eq!(grid.adjacent_mine_count((1, 1)), 2);
        assert_eq!(grid.adjacent_mine_count((0, 0)), 0);
        assert_eq!(grid.adjacent_mine_count((2, 0)), 0);
        assert_eq!(grid.mine_count(), 2);
    }
}
