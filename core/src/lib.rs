//! Game-state engine for a single-player mine-clearing puzzle.
//!
//! A [`GameSession`] owns a [`Grid`], lays mines through a [`MineLayout`],
//! opens cells through [`reveal`] and tracks flags through [`flags`]. Hosts
//! feed it coordinates and frame deltas and redraw from [`Snapshot`]s; the
//! engine never touches a rendering surface.

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use flags::FlagToggle;
pub use grid::*;
pub use layout::*;
pub use reveal::RevealResult;
pub use session::*;
pub use snapshot::*;
pub use timer::*;
pub use types::*;

mod cell;
mod error;
pub mod flags;
mod grid;
mod layout;
pub mod reveal;
mod session;
mod snapshot;
mod timer;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const BEGINNER: Self = Self::new_unchecked((9, 9), 10);
    pub const INTERMEDIATE: Self = Self::new_unchecked((16, 16), 40);
    pub const EXPERT: Self = Self::new_unchecked((30, 16), 99);

    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        Self::new_unchecked(size, mines).validate()
    }

    /// Checks that the grid is non-empty and holds at least one mine and one
    /// safe cell.
    pub fn validate(self) -> Result<Self> {
        let (width, height) = self.size;
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimension);
        }
        if self.mines == 0 {
            return Err(GameError::NoMines);
        }
        if self.mines >= self.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(self)
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::BEGINNER
    }
}

/// Named difficulty levels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl Preset {
    pub const fn config(self) -> GameConfig {
        match self {
            Self::Beginner => GameConfig::BEGINNER,
            Self::Intermediate => GameConfig::INTERMEDIATE,
            Self::Expert => GameConfig::EXPERT,
        }
    }
}

impl From<Preset> for GameConfig {
    fn from(preset: Preset) -> Self {
        preset.config()
    }
}
