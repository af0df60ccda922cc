#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};

fn workspace(people: &str) -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("people.csv"), people).unwrap();
    dir
}

fn cli(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("duty-roster-cli").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn generate_writes_schedule_and_stats() {
    let dir = workspace("name,weekdays\nAlice,一、二\nBob,一、二\n");
    cli(&dir)
        .args(["generate", "--people", "people.csv"])
        .args(["--start", "2024-03-04", "--end", "2024-03-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-04 | 一 | Alice"))
        .stdout(predicate::str::contains("2024-03-05 | 二 | Bob"));

    let schedule = fs::read_to_string(dir.path().join("schedule.csv")).unwrap();
    assert!(schedule.starts_with("date,weekday,person"));
    let stats = fs::read_to_string(dir.path().join("stats.csv")).unwrap();
    assert!(stats.contains("Bob,1,2024-03-05"));
}

#[test]
fn missing_candidate_exits_with_code_2() {
    let dir = workspace("name,weekdays\nAlice,Monday\n");
    cli(&dir)
        .args(["generate", "--people", "people.csv"])
        .args(["--start", "2024-03-05", "--end", "2024-03-05"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No eligible person for 2024-03-05"));
    assert!(!dir.path().join("schedule.csv").exists());
}

#[test]
fn reversed_range_fails() {
    let dir = workspace("name,weekdays\nAlice,Monday\n");
    cli(&dir)
        .args(["generate", "--people", "people.csv"])
        .args(["--start", "2024-03-11", "--end", "2024-03-04"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date range"));
}

#[test]
fn holiday_commands_persist_calendar() {
    let dir = workspace("name,weekdays\nAlice,一\n");
    cli(&dir)
        .args(["holiday", "add", "2030-03-04"])
        .assert()
        .success();
    assert!(dir.path().join("calendar.json").exists());

    cli(&dir)
        .args(["holiday", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2030-03-04"))
        .stdout(predicate::str::contains("2024-10-01"));

    cli(&dir)
        .args(["makeup", "remove", "2030-03-09"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in the list"));

    cli(&dir)
        .args(["preview", "--start", "2030-03-04", "--end", "2030-03-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2030-03-04 | Mon | excluded"))
        .stdout(predicate::str::contains("2030-03-05 | Tue | working"));
}

#[test]
fn write_partial_keeps_days_before_failure() {
    let dir = workspace("name,weekdays\nAlice,Monday\n");
    cli(&dir)
        .args(["generate", "--people", "people.csv", "--write-partial"])
        .args(["--start", "2024-03-04", "--end", "2024-03-06"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No eligible person for 2024-03-05"));

    let schedule = fs::read_to_string(dir.path().join("schedule.csv")).unwrap();
    assert!(schedule.contains("2024-03-04,一,Alice"));
    assert!(!schedule.contains("2024-03-05"));
    let stats = fs::read_to_string(dir.path().join("stats.csv")).unwrap();
    assert!(stats.contains("Alice,1,2024-03-04"));
}

#[test]
fn makeup_and_import_commands_update_calendar() {
    let dir = workspace("name,weekdays\nAlice,Monday\n");
    fs::write(dir.path().join("holidays.txt"), "# rentrée\n2030-09-02\n2030-09-03\n").unwrap();
    fs::write(dir.path().join("makeup.txt"), "2030-09-08\n").unwrap();

    cli(&dir)
        .args(["makeup", "add", "2030-09-07"])
        .assert()
        .success();
    cli(&dir)
        .args(["makeup", "import", "makeup.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 date(s) added"));
    cli(&dir)
        .args(["holiday", "import", "holidays.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 date(s) added"));

    cli(&dir)
        .args(["makeup", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2030-09-07\n2030-09-08"));
    cli(&dir)
        .args(["preview", "--start", "2030-09-02", "--end", "2030-09-08"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2030-09-02 | Mon | excluded"))
        .stdout(predicate::str::contains("2030-09-04 | Wed | working"))
        .stdout(predicate::str::contains("2030-09-07 | Sat | make-up"))
        .stdout(predicate::str::contains("2030-09-08 | Sun | make-up"));
}
