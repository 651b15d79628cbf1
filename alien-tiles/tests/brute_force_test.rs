use alien_tiles::errors::AlienTilesError;
use alien_tiles::ring::{Matrix, Ring};
use alien_tiles::solver::{AlienTilesSolver, SolverConfig, Unsolvable};
use alien_tiles::verify::simulate;

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_grid(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix {
    (0..rows)
        .map(|_| (0..cols).map(|_| rng.random_range(0..4)).collect())
        .collect()
}

/// Smallest total and number of clearing toggle matrices, by trying all of them.
fn brute_force_toggles(cells: &Matrix, ring: &Ring) -> Result<(Option<u64>, u128), AlienTilesError> {
    let (rows, cols) = (cells.len(), cells[0].len());
    let mut best = None;
    let mut count = 0u128;

    for flat in (0..rows * cols).map(|_| 0..4i64).multi_cartesian_product() {
        let toggles: Matrix = flat.chunks(cols).map(<[i64]>::to_vec).collect();
        let cleared = simulate(cells, &toggles, ring)?
            .iter()
            .flatten()
            .all(|&v| v == 0);
        if cleared {
            count += 1;
            let total = flat.iter().sum::<i64>() as u64;
            best = Some(best.map_or(total, |b: u64| b.min(total)));
        }
    }
    Ok((best, count))
}

/// Same as [`brute_force_toggles`] but enumerating the aggregate vectors of the reduced system.
fn brute_force_aggregates(solver: &AlienTilesSolver) -> Result<(Option<u64>, u128), AlienTilesError> {
    let system = solver.system();
    let mut best = None;
    let mut count = 0u128;

    for y in (0..system.size()).map(|_| 0..4i64).multi_cartesian_product() {
        if system.residual(&y)?.iter().all(|&r| r == 0) {
            count += 1;
            let total = system.toggle_sum(&y);
            best = Some(best.map_or(total, |b: u64| b.min(total)));
        }
    }
    Ok((best, count))
}

#[test]
fn exact_search_matches_toggle_brute_force() -> Result<(), AlienTilesError> {
    let mut rng = StdRng::seed_from_u64(2024);
    let ring = Ring::default();

    for (rows, cols) in [(1, 1), (1, 3), (2, 1), (2, 2), (2, 3), (3, 2), (1, 5)] {
        for _ in 0..6 {
            let cells = random_grid(&mut rng, rows, cols);
            let solver = AlienTilesSolver::try_with(&cells, SolverConfig::default())?;
            let report = solver.solve_seeded(0)?;
            let (best, count) = brute_force_toggles(&cells, &ring)?;

            assert_eq!(report.diagnostics.best_sum, best, "{:?}", cells);
            assert_eq!(solver.count_solutions()?, count, "{:?}", cells);
            if best.is_none() {
                assert!(report.is_proven_unsolvable(), "{:?}", cells);
            }
        }
    }
    Ok(())
}

#[test]
fn exact_search_matches_aggregate_brute_force() -> Result<(), AlienTilesError> {
    let mut rng = StdRng::seed_from_u64(77);

    for (rows, cols) in [(3, 3), (3, 4), (4, 3), (2, 4)] {
        for _ in 0..4 {
            let cells = random_grid(&mut rng, rows, cols);
            let solver = AlienTilesSolver::try_with(&cells, SolverConfig::default())?;
            let report = solver.solve_seeded(0)?;
            let (best, count) = brute_force_aggregates(&solver)?;

            assert_eq!(report.diagnostics.best_sum, best, "{:?}", cells);
            assert_eq!(solver.count_solutions()?, count, "{:?}", cells);
            match report.outcome {
                Ok(solution) => assert_eq!(Some(solution.total), best),
                Err(reason) => {
                    assert!(best.is_none());
                    if reason == Unsolvable::NoSolutionMod2 {
                        assert_eq!(report.diagnostics.mod2_free_dim, None);
                    }
                }
            }
        }
    }
    Ok(())
}

#[test]
fn enumerated_solutions_all_clear_the_grid() -> Result<(), AlienTilesError> {
    let mut rng = StdRng::seed_from_u64(5);
    let ring = Ring::default();

    for _ in 0..5 {
        let cells = random_grid(&mut rng, 3, 3);
        let solver = AlienTilesSolver::try_with(&cells, SolverConfig::default())?;
        let all: Vec<Matrix> = solver.solutions()?.collect::<Result<_, _>>()?;

        assert_eq!(all.len() as u128, solver.count_solutions()?);
        assert!(all.iter().all_unique());
        for toggles in &all {
            assert!(simulate(&cells, toggles, &ring)?.iter().flatten().all(|&v| v == 0));
        }
    }
    Ok(())
}
