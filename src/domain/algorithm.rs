//! Algorithm enum for selecting how a generation is computed.
//!
//! Both variants produce identical grids; they only differ in whether
//! rows are evaluated on the calling thread or spread over rayon's pool.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell-by-cell on the calling thread
    #[default]
    Serial,
    /// Rows evaluated in parallel with rayon, joined before returning
    Parallel,
}

impl Algorithm {
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for the status panel
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }
}
