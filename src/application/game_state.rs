use log::{debug, info, warn};

use crate::domain::{LifeEngine, LifeError, SeedMode};
use super::Settings;

/// GameState drives the engine for the window.
/// It owns the step timer and turns user commands into engine calls.
pub struct GameState {
    pub engine: LifeEngine,
    pub update_timer: f32,
    /// Seconds between generations while running
    pub step_interval: f32,
    pub last_evolution_time_ms: f32,
    pub last_render_time_ms: f32,
}

impl GameState {
    /// Create a paused game state from settings
    pub fn new(settings: &Settings) -> Result<Self, LifeError> {
        let engine = settings.build_engine()?;
        info!(
            "created {}x{} grid ({} seed, {} stepping)",
            settings.columns,
            settings.rows,
            settings.seed_mode.name(),
            settings.algorithm.name()
        );
        Ok(Self {
            engine,
            update_timer: 0.0,
            step_interval: settings.step_interval.as_secs_f32(),
            last_evolution_time_ms: 0.0,
            last_render_time_ms: 0.0,
        })
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    /// Toggle play/pause state
    pub fn toggle_pause(mut self) -> Self {
        let running = self.engine.toggle_running();
        self.update_timer = 0.0;
        info!("{}", if running { "running" } else { "paused" });
        self
    }

    /// Fresh random grid; the simulation pauses
    pub fn reset(self) -> Self {
        self.reseed(SeedMode::Random)
    }

    /// All-dead grid; the simulation pauses
    pub fn clear(self) -> Self {
        self.reseed(SeedMode::Empty)
    }

    fn reseed(mut self, seed_mode: SeedMode) -> Self {
        self.engine.reset(seed_mode);
        self.engine.set_running(false);
        self.update_timer = 0.0;
        info!(
            "grid reset ({} seed), population {}",
            seed_mode.name(),
            self.engine.population()
        );
        self
    }

    /// Flip a clicked cell. Clicks outside the grid are logged and ignored.
    pub fn toggle_cell(&mut self, column: i32, row: i32) {
        match self.engine.toggle_cell(column, row) {
            Ok(()) => debug!("toggled ({column}, {row})"),
            Err(err) => warn!("ignoring click: {err}"),
        }
    }

    /// Update simulation by one frame.
    /// Steps at most one generation, and only while running.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.engine.is_running() {
            return self;
        }

        self.update_timer += delta_time;

        if self.update_timer >= self.step_interval {
            let start = std::time::Instant::now();
            self.engine.step();
            self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
            self.update_timer = 0.0;
            debug!(
                "generation {} population {}",
                self.engine.generation(),
                self.engine.population()
            );
        }

        self
    }
}
