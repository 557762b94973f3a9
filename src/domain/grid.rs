use super::{Cell, LifeError, SeedMode};
use rand::Rng;
use rayon::prelude::*;

/// Grid is a fixed-size toroidal field of cells, stored row-major.
/// Dimensions never change once built; evolution returns a fresh grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid populated according to `seed_mode`
    pub fn new(width: usize, height: usize, seed_mode: SeedMode) -> Result<Self, LifeError> {
        match seed_mode {
            SeedMode::Empty => Self::empty(width, height),
            SeedMode::Random => Self::seeded_with(width, height, &mut rand::rng()),
        }
    }

    /// Create a grid with every cell dead
    pub fn empty(width: usize, height: usize) -> Result<Self, LifeError> {
        let len = Self::checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
        })
    }

    /// Create a grid where each cell is an independent fair coin flip from `rng`
    pub fn seeded_with<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Self, LifeError> {
        let len = Self::checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            cells: random_cells(len, rng),
        })
    }

    /// A new grid of the same dimensions, populated according to `seed_mode`
    pub fn reseeded(&self, seed_mode: SeedMode) -> Self {
        let cells = match seed_mode {
            SeedMode::Empty => vec![Cell::Dead; self.cells.len()],
            SeedMode::Random => random_cells(self.cells.len(), &mut rand::rng()),
        };
        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Build a grid with exactly the listed cells alive
    pub fn with_alive(
        width: usize,
        height: usize,
        alive: &[(i32, i32)],
    ) -> Result<Self, LifeError> {
        let mut grid = Self::empty(width, height)?;
        for &(column, row) in alive {
            grid.set(column, row, Cell::Alive)?;
        }
        Ok(grid)
    }

    // Coordinates are exposed as i32, so larger extents would hold unreachable cells.
    fn checked_len(width: usize, height: usize) -> Result<usize, LifeError> {
        let invalid = LifeError::InvalidDimensions { width, height };
        if width == 0 || height == 0 || width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(invalid);
        }
        width.checked_mul(height).ok_or(invalid)
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Convert validated 2D coordinates to a 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Validate caller coordinates and map them to an index
    fn index_of(&self, column: i32, row: i32) -> Result<usize, LifeError> {
        let in_range = |value: i32, extent: usize| value >= 0 && (value as usize) < extent;
        if in_range(column, self.width) && in_range(row, self.height) {
            Ok(self.get_index(column as usize, row as usize))
        } else {
            Err(LifeError::OutOfBounds {
                column,
                row,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn get(&self, column: i32, row: i32) -> Result<Cell, LifeError> {
        self.index_of(column, row).map(|idx| self.cells[idx])
    }

    pub fn is_alive(&self, column: i32, row: i32) -> Result<bool, LifeError> {
        self.get(column, row).map(Cell::is_alive)
    }

    pub fn set(&mut self, column: i32, row: i32, cell: Cell) -> Result<(), LifeError> {
        let idx = self.index_of(column, row)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flip one cell in place, returning its new state
    pub fn toggle(&mut self, column: i32, row: i32) -> Result<Cell, LifeError> {
        let idx = self.index_of(column, row)?;
        self.cells[idx] = self.cells[idx].toggle();
        Ok(self.cells[idx])
    }

    /// Count live cells among the 8 surrounding positions, wrapping at the edges
    pub fn count_live_neighbors(&self, column: i32, row: i32) -> Result<u8, LifeError> {
        self.index_of(column, row)?;
        Ok(self.neighbors_at(column as usize, row as usize))
    }

    /// Neighbor count for in-range coordinates.
    /// On 1-wide or 1-tall grids several offsets wrap onto the same cell,
    /// including (x, y) itself, and each of them is counted.
    fn neighbors_at(&self, x: usize, y: usize) -> u8 {
        let w = self.width as i64;
        let h = self.height as i64;

        (-1i64..=1)
            .flat_map(|dy| (-1i64..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(|(dx, dy)| {
                // Toroidal wrapping
                let nx = ((x as i64 + dx) % w + w) % w;
                let ny = ((y as i64 + dy) % h + h) % h;
                self.cells[self.get_index(nx as usize, ny as usize)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    fn next_state(&self, x: usize, y: usize) -> Cell {
        self.cells[self.get_index(x, y)].evolve(self.neighbors_at(x, y))
    }

    /// Compute the next generation on the calling thread.
    /// Reads only `self`, so every cell sees the same pre-step snapshot.
    pub fn evolve(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| self.next_state(x, y))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Compute the next generation with one rayon task per row.
    /// Produces exactly the same grid as `evolve`.
    pub fn evolve_parallel(&self) -> Self {
        let mut cells = vec![Cell::Dead; self.cells.len()];
        cells
            .par_chunks_mut(self.width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, slot) in row.iter_mut().enumerate() {
                    *slot = self.next_state(x, y);
                }
            });

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Count total alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }

    /// Rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }
}

/// Independent Bernoulli(0.5) draw per cell
fn random_cells<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<Cell> {
    (0..len).map(|_| Cell::from_alive(rng.random_bool(0.5))).collect()
}
