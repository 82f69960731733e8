//! Integration tests for the roadplan CLI: text and JSON rendering, output
//! files, and failure exit paths.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SAMPLE_INPUT: &str = "\
[CITIES]
1: Arlen
2: Basel
3: Corin
4: Derry
5: Essen

[ROADS]
1-2: 10,1,8
1-3: 2,4,3
3-2: 2,4,3
1-4: 6,6,1
4-2: 6,6,1

[REQUESTS]
Arlen -> Basel | LTC
Basel -> Basel | T
Arlen -> Essen | L
";

fn write_input(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("input.txt");
    fs::write(&path, contents).expect("write input file");
    path
}

#[test]
fn renders_text_to_stdout() {
    let dir = TempDir::new().expect("create temp dir");
    let input = write_input(&dir, SAMPLE_INPUT);

    Command::cargo_bin("roadplan-cli")
        .expect("binary exists")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "LENGTH: Arlen -> Corin -> Basel | L=4, T=8, C=6",
        ))
        .stdout(predicate::str::contains(
            "COMPROMISE: Arlen -> Corin -> Basel | L=4, T=8, C=6",
        ))
        .stdout(predicate::str::contains("Already at the destination"))
        .stdout(predicate::str::contains(
            "Could not complete: no route found between Arlen and Essen",
        ));
}

#[test]
fn writes_rendered_output_to_a_file() {
    let dir = TempDir::new().expect("create temp dir");
    let input = write_input(&dir, SAMPLE_INPUT);
    let output = dir.path().join("output.txt");

    Command::cargo_bin("roadplan-cli")
        .expect("binary exists")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let rendered = fs::read_to_string(&output).expect("output file written");
    assert!(rendered.starts_with("Arlen -> Basel | (L|T|C)\n"));
}

#[test]
fn renders_json_when_requested() {
    let dir = TempDir::new().expect("create temp dir");
    let input = write_input(&dir, SAMPLE_INPUT);

    Command::cargo_bin("roadplan-cli")
        .expect("binary exists")
        .arg(&input)
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"planned\""))
        .stdout(predicate::str::contains(
            "\"status\": \"already_at_destination\"",
        ))
        .stdout(predicate::str::contains("\"status\": \"failed\""));
}

#[test]
fn missing_input_file_fails() {
    Command::cargo_bin("roadplan-cli")
        .expect("binary exists")
        .arg("does-not-exist.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read input"));
}

#[test]
fn malformed_input_fails_with_parse_error() {
    let dir = TempDir::new().expect("create temp dir");
    let input = write_input(&dir, "[CITIES]\nnot a city line\n");

    Command::cargo_bin("roadplan-cli")
        .expect("binary exists")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse routing input"));
}
