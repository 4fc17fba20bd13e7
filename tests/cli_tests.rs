mod common;

use common::Fixture;
use regex::Regex;
use std::process::{Command, Output};

fn run(fixture: &Fixture, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_namedivider"))
        .args(args)
        .arg("--stats")
        .arg(&fixture.stats_path)
        .arg("--family-names")
        .arg(&fixture.family_names_path)
        .arg("--model")
        .arg(&fixture.model_path)
        .output()
        .expect("Failed to execute binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_name_command() {
    let fixture = Fixture::new();
    let output = run(&fixture, &["name", "田中太郎"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "田中 太郎");
}

#[test]
fn test_name_command_with_separator_and_gbdt() {
    let fixture = Fixture::new();
    let output = run(&fixture, &["name", "田中太郎", "-s", "/", "-m", "gbdt"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "田中/太郎");
}

#[test]
fn test_name_command_json() {
    let fixture = Fixture::new();
    let output = run(&fixture, &["name", "中山マサ", "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["family"], "中山");
    assert_eq!(value["given"], "マサ");
    assert_eq!(value["algorithm"], "rule");
    assert_eq!(value["score"], 1.0);
}

#[test]
fn test_name_command_rejects_single_char() {
    let fixture = Fixture::new();
    let output = run(&fixture, &["name", "原"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid Input"));
}

#[test]
fn test_file_command_keeps_line_order() {
    let fixture = Fixture::new();
    let names = fixture.write("names.txt", "田中太郎\n原敬\n\nつるの剛士\n");
    let output = run(&fixture, &["file", names.to_str().unwrap()]);
    assert!(output.status.success());

    let lines: Vec<String> = stdout(&output).lines().map(String::from).collect();
    assert_eq!(lines, vec!["田中 太郎", "原 敬", "つるの 剛士"]);
}

#[test]
fn test_file_command_rejects_other_encodings() {
    let fixture = Fixture::new();
    let names = fixture.write("names.txt", "田中太郎\n");
    let output = run(&fixture, &["file", names.to_str().unwrap(), "-e", "shift_jis"]);
    assert!(!output.status.success());
}

#[test]
fn test_accuracy_command_reports_misses() {
    let fixture = Fixture::new();
    let truth = fixture.write("divided.txt", "田中 太郎\n原 敬\n田 中太郎\n中山 マサ\n");
    let output = run(&fixture, &["accuracy", truth.to_str().unwrap()]);
    assert!(output.status.success());

    let out = stdout(&output);
    let accuracy = Regex::new(r"(?m)^0\.7500$").unwrap();
    assert!(accuracy.is_match(&out), "unexpected output:\n{}", out);
    assert!(out.contains("田 中太郎"));
    assert!(out.contains("1 of 4 names missed"));
}

#[test]
fn test_missing_statistics_fails_fast() {
    let output = Command::new(env!("CARGO_BIN_EXE_namedivider"))
        .args(["name", "田中太郎", "--stats", "/nonexistent/kanji.csv"])
        .output()
        .expect("Failed to execute binary");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to initialize"));
}
