/// Initial-population strategy used when building or resetting a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SeedMode {
    /// Every cell alive with probability 1/2, independently
    #[default]
    Random,
    /// Every cell dead
    Empty,
}

impl SeedMode {
    pub fn name(&self) -> &'static str {
        match self {
            SeedMode::Random => "random",
            SeedMode::Empty => "empty",
        }
    }
}
