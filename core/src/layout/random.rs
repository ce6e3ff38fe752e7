use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniformly random placement by rejection sampling.
///
/// No cell is kept safe for the first click, so the very first open may hit a
/// mine. The RNG lives as long as the layout, so a seeded layout replays the
/// same sequence of boards across restarts.
#[derive(Clone, Debug)]
pub struct RandomMineLayout {
    rng: SmallRng,
}

impl RandomMineLayout {
    /// Seeded layouts are deterministic, `None` draws a seed from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self { rng }
    }
}

impl Default for RandomMineLayout {
    fn default() -> Self {
        Self::new(None)
    }
}

impl MineLayout for RandomMineLayout {
    fn lay(&mut self, grid: &mut Grid, mines: CellCount) -> Result<()> {
        check_capacity(grid, mines)?;

        let (width, height) = grid.size();
        let mut remaining = mines;
        while remaining > 0 {
            let coords = (
                self.rng.random_range(0..width),
                self.rng.random_range(0..height),
            );
            let cell = &mut grid[coords];
            if cell.has_mine {
                continue;
            }
            cell.has_mine = true;
            remaining -= 1;
            log::trace!("Laid mine at {:?}", coords);
        }

        log::debug!("Laid {} mines on a {}x{} grid", mines, width, height);
        Ok(())
    }
}
