use alien_tiles::errors::AlienTilesError;
use alien_tiles::preset::puzzles::{PUZZLES, puzzle};
use alien_tiles::ring::Ring;
use alien_tiles::solver::{AlienTilesSolver, SolverConfig, Unsolvable};
use alien_tiles::verify::verify_solution;

use std::sync::Once;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[test]
fn happy_flow() -> Result<(), AlienTilesError> {
    init_logging();

    let cells = vec![vec![2, 2, 1], vec![0, 2, 3], vec![3, 3, 3]];
    let solver = AlienTilesSolver::try_with(&cells, SolverConfig::default())?;
    let report = solver.solve_seeded(42)?;

    dbg!(&report);

    let solution = report.outcome.as_ref().expect("corner grid is solvable");
    verify_solution(&cells, &solution.toggles, &Ring::default())?;
    assert_eq!(solution.total, 9);
    assert_eq!(report.diagnostics.best_sum, Some(9));
    assert_eq!(report.diagnostics.mod2_free_dim, Some(4));

    Ok(())
}

#[test]
fn every_preset_is_solved_or_proven_unsolvable() -> Result<(), AlienTilesError> {
    init_logging();

    for (name, cells) in PUZZLES.iter() {
        let report = alien_tiles::solve(cells, SolverConfig::default(), &mut rand::rng())?;
        match &report.outcome {
            Ok(solution) => verify_solution(cells, &solution.toggles, &Ring::default())?,
            Err(reason) => {
                assert!(report.is_proven_unsolvable(), "{} failed with {}", name, reason)
            }
        }
    }

    Ok(())
}

#[test]
fn preset_outcomes() -> Result<(), AlienTilesError> {
    let expect_total = |name: &str, total: u64| -> Result<(), AlienTilesError> {
        let cells = puzzle(name).expect("preset exists");
        let report = AlienTilesSolver::try_with(cells, SolverConfig::default())?.solve_seeded(0)?;
        assert_eq!(report.outcome.map(|s| s.total), Ok(total), "{}", name);
        Ok(())
    };

    expect_total("corner-3x3", 9)?;
    expect_total("demo-3x3", 6)?;
    expect_total("single-tile", 3)?;
    expect_total("even-4x4", 26)?;

    let odd = AlienTilesSolver::try_with(puzzle("odd-strip").expect("preset exists"), SolverConfig::default())?;
    assert_eq!(odd.solve_seeded(0)?.outcome, Err(Unsolvable::NoSolutionMod2));

    let stuck = AlienTilesSolver::try_with(puzzle("no-lift").expect("preset exists"), SolverConfig::default())?;
    let report = stuck.solve_seeded(0)?;
    assert_eq!(report.outcome, Err(Unsolvable::NoLiftedSolution));
    assert!(report.is_proven_unsolvable());

    Ok(())
}

#[test]
fn json_report_round_trip() -> Result<(), AlienTilesError> {
    let cells = vec![vec![1, 2], vec![3, 0]];
    let report = AlienTilesSolver::try_with(&cells, SolverConfig::default())?.solve_seeded(1)?;

    let json = report.to_json()?;
    let parsed: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(parsed["diagnostics"]["best_sum"], 6);
    assert_eq!(parsed["outcome"]["Ok"]["toggles"], serde_json::json!([[2, 1], [0, 3]]));

    Ok(())
}

#[test]
fn config_from_json_drives_the_solver() -> Result<(), AlienTilesError> {
    let config = SolverConfig::from_json(r#"{ "exact_minimize": false, "sample_cap": 8 }"#)?;
    let cells = vec![vec![1, 3, 2], vec![3, 3, 2], vec![0, 2, 2]];
    let report = AlienTilesSolver::try_with(&cells, config)?.solve_seeded(9)?;

    assert!(!report.diagnostics.strategy.is_some_and(|s| s.is_exact()));
    assert_eq!(report.diagnostics.candidates_tried, 9);
    if let Some(toggles) = report.toggles() {
        verify_solution(&cells, toggles, &Ring::default())?;
    }

    Ok(())
}
