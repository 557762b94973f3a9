// Domain layer - the Life Engine, free of drawing and timing
pub mod domain;

// Application layer - drives the engine on a timer and applies user commands
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Grid, LifeEngine, LifeError, SeedMode};
pub use application::{GameState, Settings};
pub use ui::Button;
