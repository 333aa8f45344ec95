//! Integration tests for the `mc` CLI commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mc() -> Command {
    let mut cmd = Command::cargo_bin("mc").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

/// A config with two coin-like dice that can only land on "b".
fn coin_config() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("game.json"),
        r#"{
    "faces": ["a", "b"],
    "dice": 2,
    "rolls": 7,
    "seed": 3,
    "weights": [{ "face": "a", "weight": 0 }]
}
"#,
    )
    .unwrap();
    dir
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_prints_outcomes_and_tally() {
    mc().args(["roll", "-f", "d6", "-n", "5", "-s", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("5 times")
                .and(predicate::str::contains("Face"))
                .and(predicate::str::contains("Share")),
        );
}

#[test]
fn roll_never_shows_zero_weight_face() {
    mc().args(["roll", "-f", "H,T", "-n", "20", "-w", "H=0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T]",
        ));
}

#[test]
fn roll_is_reproducible() {
    let first = mc()
        .args(["roll", "-n", "30", "-s", "99"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    mc().args(["roll", "-n", "30", "-s", "99"])
        .assert()
        .success()
        .stdout(first);
}

#[test]
fn roll_missing_die_fails() {
    mc().args(["roll", "-d", "2", "--die", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("die 5 does not exist"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_wide_table() {
    mc().args(["play", "-f", "d6", "-d", "3", "-n", "4"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Roll")
                .and(predicate::str::contains("Die 3"))
                .and(predicate::str::contains("form=wide")),
        );
}

#[test]
fn play_wide_json_shape() {
    let json = stdout_json(mc().args(["play", "-d", "3", "-n", "4", "--json"]));
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    for row in rows {
        let row = row.as_array().unwrap();
        assert_eq!(row.len(), 3);
        for face in row {
            let n = face.as_i64().unwrap();
            assert!((1..=6).contains(&n));
        }
    }
}

#[test]
fn play_narrow_json_lists_every_pair() {
    let json = stdout_json(mc().args(["play", "-d", "2", "-n", "3", "--form", "narrow", "--json"]));
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 6);
    let pairs: Vec<(u64, u64)> = rows
        .iter()
        .map(|r| (r["roll"].as_u64().unwrap(), r["die"].as_u64().unwrap()))
        .collect();
    assert_eq!(pairs, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
}

#[test]
fn play_invalid_form_fails() {
    mc().args(["play", "--form", "long"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'wide' or 'narrow'"));
}

#[test]
fn play_zero_rolls_fails() {
    mc().args(["play", "-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn play_duplicate_faces_fails() {
    mc().args(["play", "-f", "1,2,2,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("distinct"));
}

#[test]
fn play_mixed_faces_fails() {
    mc().args(["play", "-f", "1,two,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("same kind"));
}

#[test]
fn play_from_config_file() {
    let dir = coin_config();
    let path = dir.path().join("game.json");
    let json = stdout_json(mc().args(["play", "--json", "-c", path.to_str().unwrap()]));
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 7);
    for row in rows {
        assert_eq!(row, &serde_json::json!(["b", "b"]));
    }
}

#[test]
fn flags_override_config_file() {
    let dir = coin_config();
    let path = dir.path().join("game.json");
    let json = stdout_json(mc().args([
        "play",
        "--json",
        "-c",
        path.to_str().unwrap(),
        "-n",
        "3",
    ]));
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[test]
fn missing_config_file_fails() {
    mc().args(["play", "-c", "/nonexistent/game.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn verbose_logs_play() {
    mc().args(["-v", "play", "-n", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("played 1 rolls with 2 dice"));
}

// ---------------------------------------------------------------------------
// analyze
// ---------------------------------------------------------------------------

/// Arguments for three d6 that can only roll 1s.
fn loaded_args<'a>(extra: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec![
        "analyze", "-f", "d6", "-d", "3", "-n", "100", "-w", "2=0", "-w", "3=0", "-w", "4=0",
        "-w", "5=0", "-w", "6=0",
    ];
    args.extend_from_slice(extra);
    args
}

#[test]
fn analyze_counts_forced_jackpots() {
    mc().args(loaded_args(&[]))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("100 jackpots in 100 rolls")
                .and(predicate::str::contains("Face Counts"))
                .and(predicate::str::contains("Combinations"))
                .and(predicate::str::contains("Permutations"))
                .and(predicate::str::contains("Die_3")),
        );
}

#[test]
fn analyze_json_report() {
    let json = stdout_json(mc().args(loaded_args(&["--json"])));
    assert_eq!(json["jackpots"], 100);
    assert_eq!(json["jackpot_rolls"].as_array().unwrap().len(), 100);

    let perms = json["permutations"]["rows"].as_array().unwrap();
    assert_eq!(perms.len(), 1);
    assert_eq!(perms[0]["count"], 100);
    assert_eq!(perms[0]["outcome"], serde_json::json!([1, 1, 1]));
    assert_eq!(
        json["permutations"]["key_names"],
        serde_json::json!(["Die_1", "Die_2", "Die_3"])
    );
}

#[test]
fn analyze_random_counts_sum_to_rolls() {
    let json = stdout_json(mc().args(["analyze", "-d", "2", "-n", "50", "-s", "11", "--json"]));
    for key in ["combinations", "permutations"] {
        let total: u64 = json[key]["rows"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["count"].as_u64().unwrap())
            .sum();
        assert_eq!(total, 50);
    }
    let rows = json["face_counts"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 50);
    for row in rows {
        let sum: u64 = row.as_array().unwrap().iter().map(|c| c.as_u64().unwrap()).sum();
        assert_eq!(sum, 2);
    }
}

#[test]
fn analyze_float_faces_sort_numerically() {
    let json = stdout_json(mc().args([
        "analyze", "-f", "1.5,9.5,10.5", "-d", "2", "-n", "40", "--json",
    ]));
    let combos = json["combinations"]["rows"].as_array().unwrap();
    assert!(!combos.is_empty());
    for row in combos {
        let outcome: Vec<f64> = row["outcome"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f.as_f64().unwrap())
            .collect();
        assert!(outcome[0] <= outcome[1], "unsorted combination {outcome:?}");
    }
    assert_eq!(
        json["face_counts"]["faces"],
        serde_json::json!([1.5, 9.5, 10.5])
    );
}

#[test]
fn huge_weights_fail_cleanly() {
    mc().args(["roll", "-w", "1=1e308", "-w", "2=1e308"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("total weight is too large"));
}

// ---------------------------------------------------------------------------
// weights
// ---------------------------------------------------------------------------

#[test]
fn weights_show_probabilities() {
    mc().args(["weights", "-w", "6=2"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("0.2857")
                .and(predicate::str::contains("0.1429"))
                .and(predicate::str::contains("Probability")),
        );
}

#[test]
fn weights_all_zero_warns() {
    mc().args(["weights", "-f", "H,T", "-w", "H=0", "-w", "T=0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total weight must be positive"));
}

#[test]
fn weights_non_numeric_fails() {
    mc().args(["weights", "-w", "6=abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("weight must be numeric"));
}

#[test]
fn weights_negative_fails() {
    mc().args(["weights", "-w", "6=-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn weights_unknown_face_fails() {
    mc().args(["weights", "-w", "9=2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("face 9 is not on this die"));
}

#[test]
fn weights_missing_separator_fails() {
    mc().args(["weights", "-w", "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FACE=WEIGHT"));
}
