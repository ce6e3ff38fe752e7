use std::collections::BTreeSet;

use crate::*;
pub use random::*;

mod random;

/// Strategy for placing mines on a freshly built grid.
///
/// Implementations are called once per game, so a stateful layout (such as a
/// seeded RNG) produces a new board on every restart.
pub trait MineLayout {
    /// Places exactly `mines` mines on `grid`, which has no mines yet.
    fn lay(&mut self, grid: &mut Grid, mines: CellCount) -> Result<()>;
}

/// Fails unless at least one cell stays free of mines.
pub(crate) fn check_capacity(grid: &Grid, mines: CellCount) -> Result<()> {
    if mines >= grid.total_cells() {
        Err(GameError::TooManyMines)
    } else {
        Ok(())
    }
}

/// Places mines on a fixed list of coordinates, used for replays and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineLayout {
    mines: Vec<Coord2>,
}

impl FixedMineLayout {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MineLayout for FixedMineLayout {
    fn lay(&mut self, grid: &mut Grid, mines: CellCount) -> Result<()> {
        check_capacity(grid, mines)?;

        let mut distinct = BTreeSet::new();
        for &coords in &self.mines {
            distinct.insert(grid.validate_coords(coords)?);
        }

        if distinct.len() != usize::from(mines) {
            log::warn!(
                "Fixed layout has {} distinct mines but {} were requested",
                distinct.len(),
                mines
            );
            return Err(GameError::MineCountMismatch);
        }

        for coords in distinct {
            grid[coords].has_mine = true;
        }
        Ok(())
    }
}
