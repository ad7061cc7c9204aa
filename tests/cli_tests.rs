use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_race-rating");

/// The binary runs a seeded season and writes its history as JSON
#[test]
fn test_season_report_written() {
    let path = std::env::temp_dir().join(format!("race-rating-report-{}.json", std::process::id()));

    let output = Command::new(BIN)
        .args(["--seed", "7", "--events", "5", "--no-progress", "--log-level", "warn", "--output"])
        .arg(&path)
        .output()
        .expect("Failed to execute race-rating");

    assert!(
        output.status.success(),
        "Process should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Mean absolute error"));

    let json: serde_json::Value =
        serde_json::from_reader(std::fs::File::open(&path).expect("Report should exist")).unwrap();
    assert_eq!(json["seed"], 7);
    assert_eq!(json["report"]["history"].as_array().unwrap().len(), 5);
    assert_eq!(json["config"]["points"].as_array().unwrap().len(), 12);

    let _ = std::fs::remove_file(&path);
}

/// Identical seeds print identical ratings
#[test]
fn test_seeded_runs_reproduce() {
    let run = || {
        Command::new(BIN)
            .args(["--seed", "99", "--events", "3", "--no-progress", "--log-level", "error"])
            .output()
            .expect("Failed to execute race-rating")
    };

    let first = run();
    let second = run();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

/// Degenerate configuration is reported and the process fails
#[test]
fn test_zero_rating_var_fails() {
    let output = Command::new(BIN)
        .args(["--rating-var", "0", "--no-progress", "--log-level", "error"])
        .output()
        .expect("Failed to execute race-rating");

    assert!(!output.status.success(), "Process should fail with zero rating variance");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Numeric degeneracy"), "Should log the degeneracy: {}", stderr);
}

/// More players than the field holds is rejected
#[test]
fn test_too_many_players_fails() {
    let ratings = vec!["1000"; 13].join(",");
    let output = Command::new(BIN)
        .args(["--true-ratings", ratings.as_str(), "--no-progress", "--log-level", "error"])
        .output()
        .expect("Failed to execute race-rating");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid input"));
}
