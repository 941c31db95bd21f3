//! Throughput benchmark comparing serial and parallel ticks

use ndlife::Game;
use std::time::Instant;

fn benchmark_serial_2d(size: usize, iterations: u32) -> f64 {
    let mut game = Game::with_seed([size, size], 42).unwrap();

    let start = Instant::now();
    for _ in 0..iterations {
        game.tick();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_parallel_2d(size: usize, iterations: u32) -> f64 {
    let mut game = Game::with_seed([size, size], 42).unwrap();

    let start = Instant::now();
    for _ in 0..iterations {
        game.tick_parallel();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_serial_3d(size: usize, iterations: u32) -> f64 {
    let mut game = Game::with_seed([size, size, size], 42).unwrap();

    let start = Instant::now();
    for _ in 0..iterations {
        game.tick();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_parallel_3d(size: usize, iterations: u32) -> f64 {
    let mut game = Game::with_seed([size, size, size], 42).unwrap();

    let start = Instant::now();
    for _ in 0..iterations {
        game.tick_parallel();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Life Engine Tick Benchmark ===\n");

    let iterations = 20;

    println!(
        "{:>12} {:>12} {:>12} {:>10}",
        "Grid", "Serial", "Parallel", "Speedup"
    );
    println!("{:-<50}", "");

    for size in [100, 250, 500, 1000, 2000] {
        let serial_ms = benchmark_serial_2d(size, iterations);
        let parallel_ms = benchmark_parallel_2d(size, iterations);

        println!(
            "{:>12} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{size}x{size}"),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    for size in [20, 40, 80] {
        let serial_ms = benchmark_serial_3d(size, iterations);
        let parallel_ms = benchmark_parallel_3d(size, iterations);

        println!(
            "{:>12} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{size}x{size}x{size}"),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Throughput at 2000x2000 ===\n");

    let cells = 2000 * 2000;
    let parallel_ms = benchmark_parallel_2d(2000, iterations);
    println!(
        "Parallel: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        cells as f64 / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
