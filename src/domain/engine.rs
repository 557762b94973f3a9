//! The Life Engine: current grid plus the running flag.
//!
//! Every operation is synchronous and completes before returning. Pacing
//! (calling `step` on a timer while running) belongs to whoever drives the
//! engine; see `application::GameState`.

use super::{Algorithm, Cell, Grid, LifeError, SeedMode};

#[derive(Clone, Debug)]
pub struct LifeEngine {
    grid: Grid,
    running: bool,
    generation: u64,
    algorithm: Algorithm,
}

impl LifeEngine {
    /// Build an engine over a fresh grid. The engine starts paused.
    pub fn new(width: usize, height: usize, seed_mode: SeedMode) -> Result<Self, LifeError> {
        Ok(Self::from_grid(Grid::new(width, height, seed_mode)?))
    }

    /// Wrap an existing grid, paused at generation 0
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            running: false,
            generation: 0,
            algorithm: Algorithm::default(),
        }
    }

    /// Select the evolution path used by `step` (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn is_alive(&self, column: i32, row: i32) -> Result<bool, LifeError> {
        self.grid.is_alive(column, row)
    }

    /// Flip one cell in place. Does not touch `running`.
    pub fn toggle_cell(&mut self, column: i32, row: i32) -> Result<(), LifeError> {
        self.grid.toggle(column, row).map(|_| ())
    }

    pub fn count_live_neighbors(&self, column: i32, row: i32) -> Result<u8, LifeError> {
        self.grid.count_live_neighbors(column, row)
    }

    /// Advance exactly one generation.
    /// The next grid is built from the current one and then swapped in whole.
    pub fn step(&mut self) {
        self.grid = match self.algorithm {
            Algorithm::Serial => self.grid.evolve(),
            Algorithm::Parallel => self.grid.evolve_parallel(),
        };
        self.generation += 1;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Flip between running and paused, returning the new state
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Replace the grid with a fresh one of the same dimensions.
    /// `running` is left as is.
    pub fn reset(&mut self, seed_mode: SeedMode) {
        self.grid = self.grid.reseeded(seed_mode);
        self.generation = 0;
    }

    /// Shorthand for `reset(SeedMode::Empty)`
    pub fn clear(&mut self) {
        self.reset(SeedMode::Empty);
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Borrow the current generation for rendering
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Owned copy of the current generation
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.grid.iter_cells()
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Generations stepped since construction or the last reset
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
