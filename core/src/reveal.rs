//! Opening cells and the zero-region cascade.

use crate::*;

/// Result of opening one cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealResult {
    /// The opened cell held a mine, it is now revealed as the exploded one.
    HitMine,
    /// Cells newly revealed by this open, the opened cell first. Empty when the
    /// cell was already revealed.
    Revealed(Vec<Coord2>),
}

impl RevealResult {
    pub fn has_update(&self) -> bool {
        match self {
            Self::HitMine => true,
            Self::Revealed(cells) => !cells.is_empty(),
        }
    }
}

/// Opens `coords` and cascades through connected zero cells.
///
/// The cascade uses an explicit stack, each cell is revealed at most once, and
/// flagged cells are never touched by it.
pub fn open(grid: &mut Grid, coords: Coord2) -> Result<RevealResult> {
    let cell = grid.cell_at_mut(coords)?;
    if cell.is_revealed {
        return Ok(RevealResult::Revealed(Vec::new()));
    }

    if cell.has_mine {
        cell.is_revealed = true;
        cell.is_open = true;
        log::debug!("Hit mine at {:?}", coords);
        return Ok(RevealResult::HitMine);
    }

    let mut revealed = Vec::new();
    let mut pending = vec![coords];
    while let Some(pos) = pending.pop() {
        if grid[pos].is_revealed {
            continue;
        }

        let count = grid.adjacent_mine_count(pos);
        let cell = &mut grid[pos];
        cell.adjacent_mines = Some(count);
        cell.is_revealed = true;
        cell.is_open = true;
        revealed.push(pos);
        log::trace!("Revealed {:?} with {} adjacent mines", pos, count);

        if count > 0 {
            continue;
        }

        for neighbor in grid.neighbors(pos) {
            let cell = &mut grid[neighbor];
            if cell.is_revealed || cell.has_flag {
                continue;
            }
            cell.is_open = true;
            pending.push(neighbor);
        }
    }

    Ok(RevealResult::Revealed(revealed))
}

/// Opens the lid of every mined cell once a game is lost.
///
/// Mines other than the exploded one stay unrevealed, they are only shown.
/// Returns every mined cell so a host can draw them.
pub fn reveal_all_mines(grid: &mut Grid) -> Vec<Coord2> {
    let mines: Vec<_> = grid
        .iter()
        .filter(|(_, cell)| cell.has_mine)
        .map(|(coords, _)| coords)
        .collect();

    for &coords in &mines {
        grid[coords].is_open = true;
    }
    mines
}
