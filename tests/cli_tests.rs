//! Integration tests for the non-interactive CLI surface.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cmd() -> Command {
    cargo_bin_cmd!("corpusvis")
}

#[test]
fn dump_yaml_contains_the_fixture_set() {
    cmd()
        .args(["--dump", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Corpus Didáctico"))
        .stdout(predicate::str::contains("Blanco/Beige"))
        .stdout(predicate::str::contains("frequency: 95"))
        .stdout(predicate::str::contains("Morado"))
        .stdout(predicate::str::contains("Híbrido"))
        .stdout(predicate::str::contains("percentage: 45"))
        .stdout(predicate::str::contains("Contraste idiomas"))
        .stdout(predicate::str::contains("Bocadillos de diálogo"));
}

#[test]
fn dump_json_is_valid_and_complete() {
    let output = cmd()
        .args(["--dump", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value =
        serde_json::from_slice(&output).expect("dump output should be valid JSON");

    assert_eq!(report["palette"].as_array().unwrap().len(), 7);
    assert_eq!(report["visual_elements"].as_array().unwrap().len(), 6);
    assert_eq!(report["cultural_approaches"].as_array().unwrap().len(), 3);
    assert_eq!(report["typography"].as_array().unwrap().len(), 6);
    assert_eq!(
        report["conclusions"]["strengths"].as_array().unwrap().len(),
        4
    );
    assert_eq!(
        report["conclusions"]["improvements"]
            .as_array()
            .unwrap()
            .len(),
        4
    );

    let total: u64 = report["cultural_approaches"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["percentage"].as_u64().unwrap())
        .sum();
    assert_eq!(total, 100);
}

#[test]
fn dump_yaml_preserves_palette_order() {
    let output = cmd()
        .args(["--dump", "yaml"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let rojo = stdout.find("Rojo").expect("Rojo should be present");
    let blanco = stdout
        .find("Blanco/Beige")
        .expect("Blanco/Beige should be present");
    assert!(rojo < blanco, "palette entries should keep declaration order");
}

#[test]
fn completions_are_generated() {
    cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("corpusvis"));
}

#[test]
fn help_mentions_the_main_flags() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dump"))
        .stdout(predicate::str::contains("--tab"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn invalid_tab_value_fails() {
    cmd()
        .args(["--tab", "summary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
