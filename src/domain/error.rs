use thiserror::Error;

/// Errors raised by the Life Engine.
/// Both variants describe bad caller input; the simulation itself cannot fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LifeError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("cell ({column}, {row}) is outside the {width}x{height} grid")]
    OutOfBounds {
        column: i32,
        row: i32,
        width: usize,
        height: usize,
    },
}
