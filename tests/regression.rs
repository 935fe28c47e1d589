//! Replays of recorded traces against known step totals.
//!
//! The traces are not shipped with the crate. Put `run_walk.csv`,
//! `walk_run.csv` and `walk_hop_walk_run.csv` under `tests/data/` and run
//! `cargo test -- --ignored`.

use std::fs;
use std::path::PathBuf;

use stride_core::{Config, Pedometer};

fn replay(name: &str) -> Pedometer {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(format!("{}.csv", name));
    let text = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read trace {}: {}", path.display(), e));

    let mut pedometer = Pedometer::new(Config::default()).unwrap();

    // Two header lines, then: record, sensor, date, time, ax, ay, az, gx, gy, gz
    for line in text.lines().skip(2) {
        let Some(ay) = line.split(',').nth(5) else {
            continue;
        };
        let ay: f32 = ay.trim().parse().expect("numeric y axis");
        pedometer.update(ay);
    }

    pedometer
}

fn assert_trace(name: &str, steps: u32, walk: u32, run: u32, hop: u32, elapsed_s: f32) {
    let pedometer = replay(name);
    let summary = pedometer.summary();

    assert_eq!(summary.walk, walk, "{}: walking steps", name);
    assert_eq!(summary.run, run, "{}: running steps", name);
    assert_eq!(summary.hop, hop, "{}: hopping steps", name);
    assert_eq!(pedometer.output().step_count, steps, "{}: total steps", name);
    assert!(
        (summary.elapsed_s - elapsed_s).abs() < 1e-4,
        "{}: elapsed {} s",
        name,
        summary.elapsed_s
    );
}

#[test]
#[ignore = "needs tests/data/run_walk.csv"]
fn run_walk_trace() {
    assert_trace("run_walk", 28, 13, 14, 1, 18.855_299);
}

#[test]
#[ignore = "needs tests/data/walk_run.csv"]
fn walk_run_trace() {
    assert_trace("walk_run", 27, 11, 16, 0, 15.932_355);
}

#[test]
#[ignore = "needs tests/data/walk_hop_walk_run.csv"]
fn walk_hop_walk_run_trace() {
    assert_trace("walk_hop_walk_run", 40, 16, 16, 8, 27.960_651);
}
