//! Flag bookkeeping against the remaining-mines budget.

use crate::*;

/// Result of toggling a flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FlagToggle {
    pub mines_remaining: CellCount,
    pub changed: bool,
    /// Whether the cell carries a flag after the toggle.
    pub flagged: bool,
}

/// Toggles the flag at `coords`.
///
/// Revealed cells never change. A new flag needs `mines_remaining > 0` and
/// spends one unit, removing a flag always gives one back. The budget follows
/// the configured mine count, not whether the flagged cell holds a mine.
pub fn toggle_flag(
    grid: &mut Grid,
    mines_remaining: CellCount,
    coords: Coord2,
) -> Result<FlagToggle> {
    let cell = grid.cell_at_mut(coords)?;

    let unchanged = FlagToggle {
        mines_remaining,
        changed: false,
        flagged: cell.has_flag,
    };

    if cell.is_revealed {
        return Ok(unchanged);
    }

    if cell.has_flag {
        cell.has_flag = false;
        Ok(FlagToggle {
            mines_remaining: mines_remaining.saturating_add(1),
            changed: true,
            flagged: false,
        })
    } else if mines_remaining > 0 {
        cell.has_flag = true;
        Ok(FlagToggle {
            mines_remaining: mines_remaining - 1,
            changed: true,
            flagged: true,
        })
    } else {
        Ok(unchanged)
    }
}
