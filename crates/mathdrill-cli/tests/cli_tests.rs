//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mathdrill() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("mathdrill").unwrap()
}

#[test]
fn help_output() {
    mathdrill()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive math practice trainer"));
}

#[test]
fn version_output() {
    mathdrill()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mathdrill"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    mathdrill()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizzes/quiz_data.json"))
        .stdout(predicate::str::contains("Created checkers/stock.toml"));

    assert!(dir.path().join("quizzes/quiz_data.json").exists());
    assert!(dir.path().join("checkers/stock.toml").exists());
    assert!(dir.path().join("data").is_dir());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    mathdrill()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    mathdrill()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn add_then_list() {
    let dir = TempDir::new().unwrap();
    let bank = dir.path().join("bank.json");

    mathdrill()
        .arg("add")
        .arg("--quiz")
        .arg("Powers")
        .arg("--question")
        .arg("2^5 = ?")
        .arg("--answer")
        .arg("32")
        .arg("--bank")
        .arg(&bank)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added question to quiz 'Powers'"));

    mathdrill()
        .arg("list")
        .arg("--bank")
        .arg(&bank)
        .arg("--checkers")
        .arg(dir.path().join("no-such-dir"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Powers"))
        .stdout(predicate::str::contains("power"));
}

#[test]
fn add_rejects_empty_question() {
    let dir = TempDir::new().unwrap();

    mathdrill()
        .arg("add")
        .arg("--quiz")
        .arg("Powers")
        .arg("--question")
        .arg("   ")
        .arg("--answer")
        .arg("32")
        .arg("--bank")
        .arg(dir.path().join("bank.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn list_without_bank() {
    let dir = TempDir::new().unwrap();

    mathdrill()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No quizzes in the bank"));
}

#[test]
fn run_without_quiz_lists_available() {
    let dir = TempDir::new().unwrap();

    mathdrill()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    mathdrill()
        .current_dir(dir.path())
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Available quizzes:"))
        .stderr(predicate::str::contains("Powers"))
        .stderr(predicate::str::contains("pass --quiz"));
}

#[test]
fn run_unknown_quiz() {
    let dir = TempDir::new().unwrap();

    mathdrill()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    mathdrill()
        .current_dir(dir.path())
        .arg("run")
        .arg("--quiz")
        .arg("Geometry")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no checker is registered"));
}

#[test]
fn run_rejects_zero_questions() {
    let dir = TempDir::new().unwrap();

    mathdrill()
        .current_dir(dir.path())
        .arg("run")
        .arg("--quiz")
        .arg("Powers")
        .arg("--questions")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn stats_without_results() {
    let dir = TempDir::new().unwrap();

    mathdrill()
        .current_dir(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("No results recorded yet"));
}

#[test]
fn stats_two_quizzes() {
    let dir = TempDir::new().unwrap();
    let results = dir.path().join("results.csv");
    std::fs::write(
        &results,
        "Timestamp,Quiz,Score,TotalQuestions\n\
         2026-03-01 10:00:00,Quiz A,5,10\n\
         2026-03-02 11:30:00,Quiz B,8,10\n",
    )
    .unwrap();

    mathdrill()
        .arg("stats")
        .arg("--results")
        .arg(&results)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total correct answers: 13"))
        .stdout(predicate::str::contains("Total questions: 20"))
        .stdout(predicate::str::contains("Overall percentage: 65.00%"))
        .stdout(predicate::str::contains("50.00%"))
        .stdout(predicate::str::contains("80.00%"));
}

#[test]
fn stats_skips_malformed_rows() {
    let dir = TempDir::new().unwrap();
    let results = dir.path().join("results.csv");
    std::fs::write(
        &results,
        "Timestamp,Quiz,Score,TotalQuestions\n\
         2026-03-01 10:00:00,Quiz A,5,10\n\
         broken row\n\
         2026-03-02 11:30:00,Quiz B,8,10\n",
    )
    .unwrap();

    mathdrill()
        .arg("stats")
        .arg("--results")
        .arg(&results)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total questions: 20"));
}

#[test]
fn stats_filter_without_matches() {
    let dir = TempDir::new().unwrap();
    let results = dir.path().join("results.csv");
    std::fs::write(
        &results,
        "Timestamp,Quiz,Score,TotalQuestions\n\
         2026-03-01 10:00:00,Quiz A,5,10\n",
    )
    .unwrap();

    mathdrill()
        .arg("stats")
        .arg("--quiz")
        .arg("Quiz B")
        .arg("--results")
        .arg(&results)
        .assert()
        .success()
        .stdout(predicate::str::contains("No results for quiz 'Quiz B'"));
}

#[test]
fn chart_writes_svg() {
    let dir = TempDir::new().unwrap();
    let results = dir.path().join("results.csv");
    let output = dir.path().join("progress.svg");
    std::fs::write(
        &results,
        "Timestamp,Quiz,Score,TotalQuestions\n\
         2026-03-01 10:00:00,Powers,3,5\n\
         2026-03-02 11:30:00,Powers,5,5\n",
    )
    .unwrap();

    mathdrill()
        .arg("chart")
        .arg("--results")
        .arg(&results)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Chart written to"));

    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("<polyline"));
}
