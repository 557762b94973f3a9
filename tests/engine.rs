use rand::SeedableRng;
use rand::rngs::StdRng;

use toroidal_life::{Grid, LifeEngine, LifeError, SeedMode};

const GLIDER: [(i32, i32); 5] = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

fn engine_with(width: usize, height: usize, alive: &[(i32, i32)]) -> LifeEngine {
    LifeEngine::from_grid(Grid::with_alive(width, height, alive).unwrap())
}

fn shifted(cells: &[(i32, i32)], dx: i32, dy: i32, width: i32, height: i32) -> Vec<(i32, i32)> {
    cells
        .iter()
        .map(|&(x, y)| ((x + dx).rem_euclid(width), (y + dy).rem_euclid(height)))
        .collect()
}

fn live_cells(engine: &LifeEngine) -> Vec<(usize, usize)> {
    engine
        .cells()
        .filter(|(_, _, cell)| cell.is_alive())
        .map(|(x, y, _)| (x, y))
        .collect()
}

#[test]
fn glider_translates_diagonally_every_four_generations() {
    let start = shifted(&GLIDER, 5, 5, 20, 20);
    let mut engine = engine_with(20, 20, &start);

    for _ in 0..4 {
        engine.step();
    }

    let expected = Grid::with_alive(20, 20, &shifted(&start, 1, 1, 20, 20)).unwrap();
    assert_eq!(engine.grid(), &expected);
    assert_eq!(engine.generation(), 4);
}

#[test]
fn glider_crosses_the_seam_and_comes_home() {
    // Starting at the bottom-right corner forces wrapping on both axes
    let start = shifted(&GLIDER, 18, 18, 20, 20);
    let mut engine = engine_with(20, 20, &start);
    let original = engine.snapshot();

    for generation in 1..=80 {
        engine.step();
        assert_eq!(engine.population(), 5, "glider broke at generation {generation}");
    }

    assert_eq!(engine.grid(), &original);
}

#[test]
fn vertical_blinker_turns_horizontal() {
    let mut engine = engine_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
    engine.step();
    assert_eq!(live_cells(&engine), vec![(1, 2), (2, 2), (3, 2)]);
    engine.step();
    assert_eq!(live_cells(&engine), vec![(2, 1), (2, 2), (2, 3)]);
}

#[test]
fn blinker_on_three_by_three_torus_fills_then_dies() {
    // Every cell of a 3x3 torus borders all 8 others, so each dead cell
    // sees the whole column and is born; then every cell has 8 neighbors.
    let mut engine = engine_with(3, 3, &[(1, 0), (1, 1), (1, 2)]);
    engine.step();
    assert_eq!(engine.population(), 9);
    engine.step();
    assert_eq!(engine.population(), 0);
}

#[test]
fn all_dead_grid_stays_dead() {
    let mut engine = LifeEngine::new(17, 11, SeedMode::Empty).unwrap();
    for _ in 0..25 {
        engine.step();
        assert_eq!(engine.population(), 0);
    }
}

#[test]
fn identical_grids_step_identically() {
    let a = Grid::seeded_with(32, 24, &mut StdRng::seed_from_u64(99)).unwrap();
    let b = Grid::seeded_with(32, 24, &mut StdRng::seed_from_u64(99)).unwrap();
    let mut left = LifeEngine::from_grid(a);
    let mut right = LifeEngine::from_grid(b);

    for _ in 0..2 {
        left.step();
        right.step();
    }

    assert_eq!(left.grid(), right.grid());
}

#[test]
fn corner_cells_are_diagonal_neighbors() {
    let engine = engine_with(12, 9, &[(0, 0), (11, 8)]);
    assert_eq!(engine.count_live_neighbors(0, 0), Ok(1));
    assert_eq!(engine.count_live_neighbors(11, 8), Ok(1));
}

#[test]
fn double_toggle_restores_cell() {
    let mut engine = LifeEngine::new(9, 6, SeedMode::Random).unwrap();
    let before = engine.snapshot();

    for (column, row) in [(0, 0), (8, 5), (4, 3)] {
        let original = engine.is_alive(column, row).unwrap();
        engine.toggle_cell(column, row).unwrap();
        assert_eq!(engine.is_alive(column, row), Ok(!original));
        engine.toggle_cell(column, row).unwrap();
        assert_eq!(engine.is_alive(column, row), Ok(original));
    }

    assert_eq!(engine.grid(), &before);
    assert!(!engine.is_running());
}

#[test]
fn out_of_range_coordinates_fail_for_every_size() {
    for (width, height) in [(1, 1), (1, 7), (7, 1), (3, 3), (40, 32)] {
        let mut engine = LifeEngine::new(width, height, SeedMode::Random).unwrap();
        let (w, h) = (width as i32, height as i32);

        for (column, row) in [(w, 0), (0, h), (w, h), (-1, 0), (0, -1), (-1, -1)] {
            let expected = Err(LifeError::OutOfBounds { column, row, width, height });
            assert_eq!(engine.is_alive(column, row), expected.map(|_: ()| false));
            assert_eq!(engine.toggle_cell(column, row), expected);
        }

        assert!(engine.is_alive(w - 1, h - 1).is_ok());
    }
}

#[test]
fn rejected_dimensions() {
    for (width, height) in [(0, 0), (0, 3), (3, 0)] {
        assert_eq!(
            LifeEngine::new(width, height, SeedMode::Random).unwrap_err(),
            LifeError::InvalidDimensions { width, height }
        );
    }
}

#[test]
fn reset_replaces_grid_with_same_dimensions() {
    let mut engine = engine_with(15, 10, &GLIDER);
    engine.step();
    engine.reset(SeedMode::Empty);
    assert_eq!(engine.dimensions(), (15, 10));
    assert_eq!(engine.population(), 0);
    assert_eq!(engine.generation(), 0);

    engine.reset(SeedMode::Random);
    assert_eq!(engine.dimensions(), (15, 10));
}

#[test]
fn single_row_torus_follows_the_offset_rule() {
    // On a 5x1 torus rows -1 and +1 are the row itself, so each horizontal
    // neighbor is counted three times and the cell itself twice.
    let engine = engine_with(5, 1, &[(2, 0)]);
    assert_eq!(engine.count_live_neighbors(2, 0), Ok(2));
    assert_eq!(engine.count_live_neighbors(1, 0), Ok(3));
    assert_eq!(engine.count_live_neighbors(3, 0), Ok(3));
    assert_eq!(engine.count_live_neighbors(0, 0), Ok(0));
}
