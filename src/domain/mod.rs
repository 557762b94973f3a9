mod cell;
mod error;
mod grid;
mod seed;
mod algorithm;
mod engine;

pub use cell::Cell;
pub use error::LifeError;
pub use grid::Grid;
pub use seed::SeedMode;
pub use algorithm::Algorithm;
pub use engine::LifeEngine;
