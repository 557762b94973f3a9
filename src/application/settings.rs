use std::time::Duration;

use crate::domain::{Algorithm, LifeEngine, LifeError, SeedMode};

/// Settings holds everything needed to build the engine and size the window.
/// Defaults match the classic lite layout: 40x32 cells stepping every 120 ms.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub columns: usize,
    pub rows: usize,
    pub step_interval: Duration,
    pub seed_mode: SeedMode,
    /// Cell edge length in pixels
    pub cell_size: f32,
    pub algorithm: Algorithm,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            columns: 40,
            rows: 32,
            step_interval: Duration::from_millis(120),
            seed_mode: SeedMode::Random,
            cell_size: 16.0,
            algorithm: Algorithm::Serial,
        }
    }
}

impl Settings {
    pub fn with_dimensions(mut self, columns: usize, rows: usize) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    pub fn with_step_interval(mut self, interval: Duration) -> Self {
        self.step_interval = interval;
        self
    }

    pub fn with_seed_mode(mut self, seed_mode: SeedMode) -> Self {
        self.seed_mode = seed_mode;
        self
    }

    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Build a paused engine from these settings
    pub fn build_engine(&self) -> Result<LifeEngine, LifeError> {
        Ok(LifeEngine::new(self.columns, self.rows, self.seed_mode)?.with_algorithm(self.algorithm))
    }

    /// Pixel size of the grid area
    pub fn grid_extent(&self) -> (f32, f32) {
        (
            self.columns as f32 * self.cell_size,
            self.rows as f32 * self.cell_size,
        )
    }
}
