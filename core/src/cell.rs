use serde::{Deserialize, Serialize};

/// Authoritative state of one grid position.
///
/// `is_open` is the lid state: a cell can be open without being revealed, for
/// instance while the player holds the pointer on it or after a lost game has
/// exposed every mine. `is_revealed` is terminal until the grid is rebuilt.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) has_mine: bool,
    pub(crate) is_open: bool,
    pub(crate) is_revealed: bool,
    pub(crate) has_flag: bool,
    pub(crate) adjacent_mines: Option<u8>,
}

impl Cell {
    pub const fn has_mine(&self) -> bool {
        self.has_mine
    }

    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    pub const fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub const fn has_flag(&self) -> bool {
        self.has_flag
    }

    /// Cached neighbour mine count, `None` until the cell is revealed safely.
    pub const fn adjacent_mines(&self) -> Option<u8> {
        self.adjacent_mines
    }
}
