use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a host may draw inside a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Mine,
    Clear(u8),
}

/// Player-visible state of one cell.
///
/// `content` stays `None` for cells the player has not revealed, with the
/// exception of mines exposed at the end of a lost game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub is_open: bool,
    pub is_revealed: bool,
    pub has_flag: bool,
    pub content: Option<CellContent>,
}

impl CellView {
    pub(crate) fn of(cell: &Cell, status: GameStatus) -> Self {
        let content = if cell.is_revealed || (status == GameStatus::Lost && cell.is_open) {
            match (cell.has_mine, cell.adjacent_mines) {
                (true, _) => Some(CellContent::Mine),
                (false, Some(count)) => Some(CellContent::Clear(count)),
                (false, None) => None,
            }
        } else {
            None
        };

        Self {
            is_open: cell.is_open,
            is_revealed: cell.is_revealed,
            has_flag: cell.has_flag,
            content,
        }
    }
}

/// Read-only view of a whole session, safe to hand to a renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub status: GameStatus,
    pub mines_remaining: CellCount,
    pub elapsed_secs: u32,
    pub cells: Array2<CellView>,
}

impl Snapshot {
    pub(crate) fn capture(
        grid: &Grid,
        status: GameStatus,
        mines_remaining: CellCount,
        elapsed_secs: u32,
    ) -> Self {
        Self {
            size: grid.size(),
            status,
            mines_remaining,
            elapsed_secs,
            cells: grid.cells().map(|cell| CellView::of(cell, status)),
        }
    }

    pub fn cell(&self, coords: Coord2) -> Result<CellView> {
        if coords.0 < self.size.0 && coords.1 < self.size.1 {
            Ok(self.cells[coords.to_nd_index()])
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord2, CellView)> + '_ {
        let (width, height) = self.size;
        (0..width)
            .flat_map(move |x| (0..height).map(move |y| (x, y)))
            .map(|coords| (coords, self.cells[coords.to_nd_index()]))
    }
}
