#![allow(missing_docs)]

use std::{fs, path::PathBuf, process::Command, process::Output};

fn run_bin(args: &[&str]) -> Output {
    let bin = PathBuf::from(env!("CARGO_BIN_EXE_segregation"));

    Command::new(bin)
        .args(args)
        .env("RUST_LOG", "info")
        .output()
        .expect("failed to execute command")
}

fn describe(output: &Output) -> String {
    format!(
        "stdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn test_headless_run() {
    let output = run_bin(&[
        "--headless",
        "--ticks",
        "5",
        "--n-locations",
        "400",
        "--seed",
        "3",
    ]);

    assert!(output.status.success(), "{}", describe(&output));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tick 5:"), "{}", describe(&output));
}

#[test]
fn test_headless_run_with_params_file() {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("cli_params");
    fs::remove_dir_all(&test_dir).ok();
    fs::create_dir_all(&test_dir).expect("failed to create test directory");

    let params_path = test_dir.join("params.json");
    let params = r#"{
    "n_locations": 625,
    "distribution": { "red": 0.4, "blue": 0.4, "empty": 0.2 },
    "threshold": 0.5,
    "seed": 99
}"#;
    fs::write(&params_path, params).expect("failed to write params file");

    let params_str = params_path
        .to_str()
        .expect("failed to convert params path to string");
    let output = run_bin(&["--headless", "--ticks", "3", "--params", params_str]);

    assert!(output.status.success(), "{}", describe(&output));

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn test_invalid_distribution_fails() {
    let output = run_bin(&[
        "--headless",
        "--ticks",
        "1",
        "--red",
        "0.6",
        "--blue",
        "0.6",
    ]);

    assert!(!output.status.success(), "{}", describe(&output));
}

#[test]
fn test_zero_locations_fails() {
    let output = run_bin(&["--headless", "--n-locations", "0"]);

    assert!(!output.status.success(), "{}", describe(&output));
}
