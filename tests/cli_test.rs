#![cfg(feature = "std")]

use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_battleship-rules"))
        .args(args)
        .env("BATTLESHIP_LOG", "off")
        .output()
        .expect("failed to run binary")
}

#[test]
fn test_json_summary() {
    let output = run(&["--seed", "42", "--shots", "100", "--json"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["dimensions"], 10);
    assert_eq!(v["hits"], battleship_rules::TOTAL_SHIP_CELLS);
    assert_eq!(v["misses"], 100 - battleship_rules::TOTAL_SHIP_CELLS);
    assert_eq!(v["all_sunk"], true);
}

#[test]
fn test_seed_is_reproducible() {
    let a = run(&["--seed", "7", "--attack", "A1", "--attack", "E5"]);
    let b = run(&["--seed", "7", "--attack", "A1", "--attack", "E5"]);
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
    let stdout = String::from_utf8(a.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 12);
}

#[test]
fn test_bad_coordinate_rejected() {
    let output = run(&["--attack", "Z0"]);
    assert!(!output.status.success());
}

#[test]
fn test_log_level_parsing() {
    use log::LevelFilter;
    assert_eq!(battleship_rules::level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(battleship_rules::level_from(Some("nonsense")), LevelFilter::Info);
    assert_eq!(battleship_rules::level_from(None), LevelFilter::Info);
}
