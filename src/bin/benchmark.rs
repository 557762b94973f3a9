//! Step timing for the serial and rayon evolution paths

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use toroidal_life::{Algorithm, Grid, LifeEngine};

fn benchmark(size: usize, algorithm: Algorithm, iterations: u32) -> f64 {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let grid = match Grid::seeded_with(size, size, &mut rng) {
        Ok(grid) => grid,
        Err(err) => panic!("benchmark grid {size}x{size}: {err}"),
    };
    let mut engine = LifeEngine::from_grid(grid).with_algorithm(algorithm);

    let start = Instant::now();
    for _ in 0..iterations {
        engine.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Toroidal Life Step Benchmark ===\n");

    let sizes = [40, 100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(size, Algorithm::Serial, iterations);
        let parallel_ms = benchmark(size, Algorithm::Parallel, iterations);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let cells = 2000 * 2000;
    let parallel_ms = benchmark(2000, Algorithm::Parallel, iterations);
    println!(
        "\nParallel at 2000x2000: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        (cells as f64) / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
