use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::reveal::RevealResult;
use crate::*;

/// Valid transitions:
/// - Pending -> Running, on the first safe open
/// - Pending -> Won | Lost, when the first open ends the game
/// - Running -> Won | Lost
/// - any -> Pending, on restart
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Pending,
    Running,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Outcome of a player open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpenOutcome {
    pub status: GameStatus,
    /// Cells that became revealed, the opened cell first.
    pub revealed: Vec<Coord2>,
    pub hit_mine: bool,
    /// Every mined cell, filled only when this open lost the game.
    pub mines: Vec<Coord2>,
}

impl OpenOutcome {
    pub fn has_update(&self) -> bool {
        self.hit_mine || !self.revealed.is_empty()
    }
}

/// Outcome of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FlagOutcome {
    pub mines_remaining: CellCount,
    pub flagged: bool,
    pub changed: bool,
}

/// Outcome of feeding one frame delta.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    pub elapsed_secs: u32,
    /// Whether a second boundary was crossed during this tick.
    pub advanced: bool,
}

/// One game from configuration to win or loss, restartable.
///
/// The session owns its grid outright. It is meant to be driven from a single
/// host loop; a multi-threaded host should wrap it in a mutex.
#[derive(Clone, Debug)]
pub struct GameSession<L = RandomMineLayout> {
    config: GameConfig,
    layout: L,
    grid: Grid,
    laid: bool,
    status: GameStatus,
    mines_remaining: CellCount,
    revealed_safe: CellCount,
    timer: SecondsTimer,
    pressed: Option<Coord2>,
}

impl GameSession<RandomMineLayout> {
    /// Session with an unseeded random layout.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_layout(config, RandomMineLayout::default())
    }

    /// Session whose boards are reproducible from `seed`, restarts included.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_layout(config, RandomMineLayout::new(Some(seed)))
    }
}

impl<L: MineLayout> GameSession<L> {
    /// Builds an empty grid, mines are laid by [`Self::start`].
    pub fn with_layout(config: GameConfig, layout: L) -> Result<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            layout,
            grid: Grid::new(config.size)?,
            laid: false,
            status: GameStatus::Pending,
            mines_remaining: config.mines,
            revealed_safe: 0,
            timer: SecondsTimer::new(),
            pressed: None,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn mines_remaining(&self) -> CellCount {
        self.mines_remaining
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.timer.elapsed_secs()
    }

    pub fn pressed(&self) -> Option<Coord2> {
        self.pressed
    }

    /// Lays a fresh board and returns to `Pending` with the timer stopped.
    pub fn start(&mut self) -> Result<()> {
        let mut grid = Grid::new(self.config.size)?;
        self.layout.lay(&mut grid, self.config.mines)?;

        self.grid = grid;
        self.laid = true;
        self.status = GameStatus::Pending;
        self.mines_remaining = self.config.mines;
        self.revealed_safe = 0;
        self.timer.reset();
        self.pressed = None;
        log::debug!(
            "New game {}x{} with {} mines",
            self.config.size.0,
            self.config.size.1,
            self.config.mines
        );
        Ok(())
    }

    /// Discards the current game and starts a new one on a new layout.
    pub fn restart(&mut self) -> Result<()> {
        self.start()
    }

    fn ensure_started(&mut self) -> Result<()> {
        if self.laid { Ok(()) } else { self.start() }
    }

    pub fn open(&mut self, coords: Coord2) -> Result<OpenOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        self.ensure_started()?;

        if self.pressed != Some(coords) {
            self.release();
        }
        self.pressed = None;

        let unchanged = OpenOutcome {
            status: self.status,
            ..Default::default()
        };
        if self.status.is_finished() || self.grid[coords].has_flag() {
            return Ok(unchanged);
        }

        match reveal::open(&mut self.grid, coords)? {
            RevealResult::HitMine => {
                let mines = reveal::reveal_all_mines(&mut self.grid);
                self.finish(GameStatus::Lost);
                Ok(OpenOutcome {
                    status: self.status,
                    revealed: vec![coords],
                    hit_mine: true,
                    mines,
                })
            }
            RevealResult::Revealed(cells) if cells.is_empty() => Ok(unchanged),
            RevealResult::Revealed(cells) => {
                if self.status == GameStatus::Pending {
                    self.status = GameStatus::Running;
                    self.timer.start();
                    log::debug!("Game started at {:?}", coords);
                }

                // each cell is revealed at most once per game
                self.revealed_safe += cells.len() as CellCount;
                if self.revealed_safe == self.config.safe_cells() {
                    self.finish(GameStatus::Won);
                }

                Ok(OpenOutcome {
                    status: self.status,
                    revealed: cells,
                    hit_mine: false,
                    mines: Vec::new(),
                })
            }
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        self.ensure_started()?;

        if self.status.is_finished() {
            return Ok(FlagOutcome {
                mines_remaining: self.mines_remaining,
                flagged: self.grid[coords].has_flag(),
                changed: false,
            });
        }

        if self.pressed == Some(coords) {
            self.release();
        }

        let toggle = flags::toggle_flag(&mut self.grid, self.mines_remaining, coords)?;
        self.mines_remaining = toggle.mines_remaining;
        Ok(FlagOutcome {
            mines_remaining: toggle.mines_remaining,
            flagged: toggle.flagged,
            changed: toggle.changed,
        })
    }

    /// Lifts the lid of a cell while the pointer is held on it, without
    /// revealing anything. Moving the press closes the previous cell.
    ///
    /// Returns the cells whose lid changed.
    pub fn press(&mut self, coords: Coord2) -> Result<Vec<Coord2>> {
        let coords = self.grid.validate_coords(coords)?;
        if self.status.is_finished() || self.pressed == Some(coords) {
            return Ok(Vec::new());
        }

        let mut changed = self.release();
        let cell = &mut self.grid[coords];
        if cell.is_revealed || cell.has_flag {
            return Ok(changed);
        }

        cell.is_open = true;
        self.pressed = Some(coords);
        changed.push(coords);
        Ok(changed)
    }

    /// Closes the lid of the pressed cell, if any, without revealing it.
    pub fn release(&mut self) -> Vec<Coord2> {
        let Some(coords) = self.pressed.take() else {
            return Vec::new();
        };

        let cell = &mut self.grid[coords];
        if cell.is_revealed {
            return Vec::new();
        }
        cell.is_open = false;
        vec![coords]
    }

    /// Feeds the time since the previous frame to the game clock.
    pub fn tick(&mut self, delta: Duration) -> TickOutcome {
        let advanced = self.status == GameStatus::Running && self.timer.tick(delta);
        TickOutcome {
            elapsed_secs: self.timer.elapsed_secs(),
            advanced,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(
            &self.grid,
            self.status,
            self.mines_remaining,
            self.timer.elapsed_secs(),
        )
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        self.timer.stop();
        self.pressed = None;
        log::debug!(
            "Game {:?} after {}s",
            status,
            self.timer.elapsed_secs()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(size: Coord2, mines: &[Coord2]) -> GameSession<FixedMineLayout> {
        let config = GameConfig::new(size, mines.len() as CellCount).unwrap();
        let mut session = GameSession::with_layout(config, FixedMineLayout::new(mines)).unwrap();
        session.start().unwrap();
        session
    }

    #[test]
    fn start_lays_configured_mines() {
        for seed in 0..20 {
            let mut session = GameSession::with_seed(GameConfig::EXPERT, seed).unwrap();
            session.start().unwrap();
            assert_eq!(session.grid.mine_count(), 99);
            assert_eq!(session.status(), GameStatus::Pending);
        }
    }

    #[test]
    fn cascade_wins_without_touching_the_mine() {
        let mut session = session((3, 3), &[(2, 2)]);

        let outcome = session.open((0, 0)).unwrap();

        assert_eq!(outcome.status, GameStatus::Won);
        assert!(!outcome.hit_mine);
        assert_eq!(outcome.revealed.len(), 8);
        let snapshot = session.snapshot();
        assert_eq!(
            snapshot.cell((1, 2)).unwrap().content,
            Some(CellContent::Clear(1))
        );
        assert_eq!(
            snapshot.cell((0, 0)).unwrap().content,
            Some(CellContent::Clear(0))
        );
        assert!(!snapshot.cell((2, 2)).unwrap().is_revealed);
    }

    #[test]
    fn first_open_on_a_mine_loses() {
        let mut session = session((3, 3), &[(2, 2)]);

        let outcome = session.open((2, 2)).unwrap();

        assert!(outcome.hit_mine);
        assert_eq!(outcome.status, GameStatus::Lost);
        assert_eq!(outcome.mines, vec![(2, 2)]);
        let view = session.snapshot().cell((2, 2)).unwrap();
        assert!(view.is_open);
        assert_eq!(view.content, Some(CellContent::Mine));
    }

    #[test]
    fn finished_game_ignores_input() {
        let mut session = session((3, 3), &[(2, 2)]);
        session.open((2, 2)).unwrap();

        let open = session.open((0, 0)).unwrap();
        assert!(!open.has_update());
        assert_eq!(open.status, GameStatus::Lost);
        assert!(!session.toggle_flag((0, 0)).unwrap().changed);
        assert!(session.press((0, 0)).unwrap().is_empty());
    }

    #[test]
    fn flag_blocks_open_until_removed() {
        let mut session = session((3, 3), &[(2, 2)]);

        let flag = session.toggle_flag((0, 0)).unwrap();
        assert!(flag.flagged);
        assert_eq!(flag.mines_remaining, 0);
        assert_eq!(session.status(), GameStatus::Pending);

        assert!(!session.open((0, 0)).unwrap().has_update());

        let unflag = session.toggle_flag((0, 0)).unwrap();
        assert_eq!(unflag.mines_remaining, 1);
        assert_eq!(session.open((0, 0)).unwrap().status, GameStatus::Won);
    }

    #[test]
    fn timer_runs_only_between_first_open_and_end() {
        let mut session = session((4, 1), &[(3, 0)]);

        assert!(!session.tick(Duration::from_secs(2)).advanced);
        assert_eq!(session.elapsed_secs(), 0);

        session.open((2, 0)).unwrap();
        assert_eq!(session.status(), GameStatus::Running);
        assert!(!session.tick(Duration::from_millis(600)).advanced);
        let tick = session.tick(Duration::from_millis(600));
        assert!(tick.advanced);
        assert_eq!(tick.elapsed_secs, 1);

        let outcome = session.open((0, 0)).unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
        session.tick(Duration::from_secs(5));
        assert_eq!(session.elapsed_secs(), 1);
    }

    #[test]
    fn restart_resets_everything() {
        let mut session = GameSession::with_seed(GameConfig::BEGINNER, 3).unwrap();
        session.start().unwrap();
        session.toggle_flag((4, 4)).unwrap();
        session.open((0, 0)).unwrap();
        session.tick(Duration::from_secs(1));

        session.restart().unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.status, GameStatus::Pending);
        assert_eq!(snapshot.elapsed_secs, 0);
        assert_eq!(snapshot.mines_remaining, 10);
        assert!(
            snapshot
                .iter()
                .all(|(_, view)| view == CellView::default())
        );
        assert_eq!(session.grid.mine_count(), 10);
    }

    #[test]
    fn press_moves_the_lifted_lid() {
        let mut session = session((3, 3), &[(2, 2)]);

        assert_eq!(session.press((0, 0)).unwrap(), vec![(0, 0)]);
        assert!(session.snapshot().cell((0, 0)).unwrap().is_open);
        assert!(!session.snapshot().cell((0, 0)).unwrap().is_revealed);

        assert_eq!(session.press((1, 0)).unwrap(), vec![(0, 0), (1, 0)]);
        assert!(!session.snapshot().cell((0, 0)).unwrap().is_open);

        assert_eq!(session.release(), vec![(1, 0)]);
        assert_eq!(session.pressed(), None);
        assert!(!session.snapshot().cell((1, 0)).unwrap().is_open);
    }

    #[test]
    fn open_after_press_reveals_the_pressed_cell() {
        let mut session = session((3, 3), &[(2, 2)]);
        session.press((1, 1)).unwrap();

        let outcome = session.open((1, 1)).unwrap();

        assert_eq!(outcome.revealed, vec![(1, 1)]);
        assert_eq!(session.pressed(), None);
        assert!(session.snapshot().cell((1, 1)).unwrap().is_revealed);
    }

    #[test]
    fn out_of_bounds_is_rejected_without_state_change() {
        let mut session = session((3, 3), &[(2, 2)]);

        assert_eq!(session.open((3, 0)), Err(GameError::OutOfBounds));
        assert_eq!(session.toggle_flag((0, 3)), Err(GameError::OutOfBounds));
        assert_eq!(session.press((9, 9)), Err(GameError::OutOfBounds));
        assert_eq!(session.status(), GameStatus::Pending);
    }

    #[test]
    fn open_before_start_lays_mines_first() {
        let config = GameConfig::new((3, 3), 1).unwrap();
        let mut session = GameSession::with_layout(config, FixedMineLayout::new([(2, 2)])).unwrap();

        assert_eq!(session.open((0, 0)).unwrap().status, GameStatus::Won);
    }
}
