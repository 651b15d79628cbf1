use alien_tiles::errors::AlienTilesError;
use alien_tiles::preset::puzzles::PUZZLES;
use alien_tiles::ring::Matrix;
use alien_tiles::solver::{AlienTilesSolver, SolverConfig};
use alien_tiles::verify::verify_solution;

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const RANDOM_SIZE: usize = 20;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AlienTilesError> {
    let seed: u64 = match std::env::var("ALIEN_TILES_SEED") {
        Ok(value) => value.parse().map_err(|_| {
            AlienTilesError::InvalidParameters(format!("ALIEN_TILES_SEED is not a u64: {}", value))
        })?,
        Err(_) => rand::rng().random(),
    };
    println!("seed: {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let config = SolverConfig::default();

    for (name, cells) in PUZZLES.iter() {
        solve_and_print(name, cells, &config, &mut rng)?;
    }

    let cells: Matrix = (0..RANDOM_SIZE)
        .map(|_| (0..RANDOM_SIZE).map(|_| rng.random_range(0..4)).collect())
        .collect();
    solve_and_print("random", &cells, &config, &mut rng)
}

fn solve_and_print(
    name: &str,
    cells: &Matrix,
    config: &SolverConfig,
    rng: &mut StdRng,
) -> Result<(), AlienTilesError> {
    let solver = AlienTilesSolver::try_with(cells, config.clone())?;
    println!("== {} ({}x{})", name, solver.system().rows, solver.system().cols);
    println!("{}", render(cells));

    let report = solver.solve(rng)?;
    let diagnostics = &report.diagnostics;
    println!(
        "elapsed: {:?}, candidates tried: {}, best sum: {:?}",
        diagnostics.elapsed, diagnostics.candidates_tried, diagnostics.best_sum
    );

    match &report.outcome {
        Ok(solution) => {
            println!("toggles (total {}):\n{}", solution.total, render(&solution.toggles));
            match verify_solution(cells, &solution.toggles, &config.ring()?) {
                Ok(()) => println!("verification: ok"),
                Err(e) => println!("verification: {}", e),
            }
        }
        Err(reason) => println!(
            "no solution: {} ({})",
            reason,
            if report.is_proven_unsolvable() {
                "proven"
            } else {
                "search budget exhausted"
            }
        ),
    }

    log::debug!("{}", report.to_json()?);
    println!();
    Ok(())
}

fn render(matrix: &Matrix) -> String {
    matrix
        .iter()
        .map(|row| row.iter().join(" "))
        .join("\n")
}
