use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::core::{Action, Grid, Mode, Session, Settings};
use crate::utils::logger;

/// Final state of a headless run
#[derive(Serialize)]
pub struct Snapshot<'a> {
    pub mode: Mode,
    pub grid: &'a Grid,
}

/// `"row,col"` as accepted by `--hover`.
pub fn parse_hover(raw: &str) -> Result<(usize, usize), String> {
    let (row, col) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL but got '{}'", raw))?;
    let row = row
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("bad row '{}': {}", row.trim(), e))?;
    let col = col
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("bad column '{}': {}", col.trim(), e))?;
    Ok((row, col))
}

/// Replays `hovers` `repeat` times through the same dispatch path the
/// terminal UI uses.
pub fn simulate(settings: Settings, hovers: &[(usize, usize)], repeat: usize, seed: Option<u64>) -> Session<StdRng> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = Session::new(settings, rng);

    let mut changed = 0usize;
    for _ in 0..repeat {
        for &(row, col) in hovers {
            if session.dispatch(Action::Hover { row, col }) {
                changed += 1;
            }
        }
    }
    logger::debug(&format!(
        "Simulated {} hovers, {} changed a cell",
        hovers.len() * repeat,
        changed
    ));

    session
}

pub fn run_simulation(settings: Settings, hovers: &[(usize, usize)], repeat: usize, seed: Option<u64>) -> Result<()> {
    let session = simulate(settings, hovers, repeat, seed);
    let snapshot = Snapshot {
        mode: session.mode(),
        grid: session.grid(),
    };
    let json = serde_json::to_string_pretty(&snapshot).context("failed to serialize grid")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridSize;

    fn settings(n: u16, mode: Mode) -> Settings {
        Settings {
            mode,
            size: GridSize::new(n).unwrap(),
        }
    }

    #[test]
    fn test_parse_hover() {
        assert_eq!(parse_hover("2,3"), Ok((2, 3)));
        assert_eq!(parse_hover(" 0 , 10 "), Ok((0, 10)));
        assert!(parse_hover("2").is_err());
        assert!(parse_hover("a,1").is_err());
        assert!(parse_hover("1,-1").is_err());
    }

    #[test]
    fn test_simulated_darkening_stops_at_ten() {
        let session = simulate(settings(2, Mode::Darken), &[(1, 0)], 15, Some(1));
        let cell = session.grid().cell(1, 0).unwrap();
        assert_eq!(cell.darken_level, 10);
    }

    #[test]
    fn test_seeded_random_runs_are_reproducible() {
        let hovers = [(0, 0), (0, 1), (1, 1)];
        let a = simulate(settings(2, Mode::Random), &hovers, 1, Some(42));
        let b = simulate(settings(2, Mode::Random), &hovers, 1, Some(42));
        assert_eq!(a.grid().cells(), b.grid().cells());
    }

    #[test]
    fn test_snapshot_json_shape() {
        let session = simulate(settings(1, Mode::Default), &[(0, 0)], 1, Some(0));
        let snapshot = Snapshot {
            mode: session.mode(),
            grid: session.grid(),
        };
        let value = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(value["mode"], "default");
        assert_eq!(value["grid"]["size"], 1);
        let cell = &value["grid"]["cells"][0];
        assert_eq!(cell["darken_level"], 0);
        assert_eq!(cell["display"]["r"], 51);
        assert_eq!(cell["original"]["b"], 51);
    }
}
