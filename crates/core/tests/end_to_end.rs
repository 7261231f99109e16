//! End-to-end provisioning runs against a temporary directory

use std::fs;

use keyforge_core::{run, RandomnessSource, RunConfig};
use tempfile::TempDir;

fn deterministic_config(dir: &TempDir) -> RunConfig {
    RunConfig {
        output_dir: dir.path().to_path_buf(),
        count: 2,
        prefix: "validator".to_string(),
        no_files: false,
        json_output: true,
        verbose: false,
        randomness: RandomnessSource::InsecureDeterministic { seed: 99 },
        scheme_version: "test.v1".to_string(),
    }
}

#[test]
fn batch_of_two_writes_exactly_six_artifacts() {
    let dir = TempDir::new().unwrap();
    let report = run(&deterministic_config(&dir)).unwrap();

    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "validator1.priv",
            "validator1.pub",
            "validator1.yaml",
            "validator2.priv",
            "validator2.pub",
            "validator2.yaml",
        ]
    );

    // The JSON report must agree with the .pub artifacts.
    let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();
    let records = parsed.as_array().unwrap();
    assert_eq!(records.len(), 2);

    for (i, record) in records.iter().enumerate() {
        let pub_hex = fs::read_to_string(dir.path().join(format!("validator{}.pub", i + 1))).unwrap();
        assert_eq!(record["public_key"].as_str().unwrap(), pub_hex);
    }
}

#[test]
fn batch_keys_are_distinct() {
    let dir = TempDir::new().unwrap();
    run(&deterministic_config(&dir)).unwrap();

    let first = fs::read_to_string(dir.path().join("validator1.pub")).unwrap();
    let second = fs::read_to_string(dir.path().join("validator2.pub")).unwrap();
    assert_ne!(first, second);
}

#[test]
fn no_files_mode_prints_keys_without_writing() {
    let dir = TempDir::new().unwrap();
    let config = RunConfig {
        no_files: true,
        json_output: false,
        ..deterministic_config(&dir)
    };

    let report = run(&config).unwrap();

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    assert!(report.contains("Keypair #1:"));
    assert!(report.contains("Keypair #2:"));
    assert!(report.contains("Private Key: "));
}

#[test]
fn invalid_count_aborts_before_any_io() {
    let dir = TempDir::new().unwrap();
    let config = RunConfig {
        count: 101,
        ..deterministic_config(&dir)
    };

    assert!(run(&config).is_err());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn custom_prefix_names_artifacts() {
    let dir = TempDir::new().unwrap();
    let config = RunConfig {
        count: 1,
        prefix: "observer".to_string(),
        ..deterministic_config(&dir)
    };

    run(&config).unwrap();
    assert!(dir.path().join("observer1.priv").exists());
    assert!(dir.path().join("observer1.pub").exists());
    assert!(dir.path().join("observer1.yaml").exists());
}
