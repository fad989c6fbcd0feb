// Black-box tests of the `roman` binary using std::process::Command.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Locate the `roman` binary produced by Cargo.
fn roman_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_roman"))
}

fn run(args: &[&str]) -> Output {
    Command::new(roman_bin())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run roman")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

// ── Single values ────────────────────────────────────────────────────────────

#[test]
fn test_cli_arabic_to_roman() {
    let out = run(&["1965"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "1965 = MCMLXV\n");
}

#[test]
fn test_cli_roman_to_arabic_lowercase() {
    let out = run(&["mcmlxv"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "MCMLXV = 1965\n");
}

#[test]
fn test_cli_additive_and_simple() {
    let out = run(&["-a", "1965"]);
    assert_eq!(stdout(&out), "1965 = MDCCCCLXV\t (add)\n");

    let out = run(&["-a", "--sim", "1965"]);
    assert_eq!(stdout(&out), "MDCCCCLXV\n");

    let out = run(&["--sim", "MDCCCCLXV"]);
    assert_eq!(stdout(&out), "1965\n");
}

// ── Failures exit non-zero ───────────────────────────────────────────────────

#[test]
fn test_cli_rejects_bad_input() {
    for bad in ["4001", "abc123", "MMMMM", "12.5"] {
        let out = run(&[bad]);
        assert!(!out.status.success(), "{bad} should fail");
        assert!(stdout(&out).is_empty());
        let err = String::from_utf8_lossy(&out.stderr);
        assert!(err.contains("error:"), "{bad}: {err}");
    }
}

#[test]
fn test_cli_failure_is_logged() {
    let out = run(&["4001"]);
    assert_eq!(out.status.code(), Some(1));
    let err = String::from_utf8_lossy(&out.stderr);
    let logged = err
        .lines()
        .find(|l| l.contains("ERROR"))
        .unwrap_or_else(|| panic!("no ERROR event in {err:?}"));
    assert!(logged.contains("4001 is greater than 4000"), "{logged}");
    assert!(err.contains("error: 4001 is greater than 4000"));
}

#[test]
fn test_cli_no_input_prints_usage() {
    let out = run(&[]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Sample usage"));
    assert!(text.contains("--additive"));
}

// ── Ranges and files ─────────────────────────────────────────────────────────

#[test]
fn test_cli_range_to_terminal() {
    let out = run(&["-r", "-s", "100", "-e", "102"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "100 = C\n101 = CI\n102 = CII\n");
}

#[test]
fn test_cli_additive_range_to_terminal() {
    let out = run(&["-a", "-r", "-s", "3", "-e", "4"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "3 = III\t (add)\n4 = IIII\t (add)\n");
}

#[test]
fn test_cli_range_out_of_bounds_fails() {
    assert!(!run(&["-r", "-s", "0", "-e", "3"]).status.success());
    assert!(!run(&["-r", "-s", "3999", "-e", "4001"]).status.success());
    assert!(!run(&["-r", "-s", "5", "-e", "1"]).status.success());
}

#[test]
fn test_cli_range_to_file_truncate_then_append() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("my_values.txt");
    let path_str = path.to_str().unwrap();

    fs::write(&path, "old\nold\nold\nold\n").unwrap();
    let out = run(&["--sim", "-r", "-s", "1", "-e", "3", "-o", "-p", path_str]);
    assert!(out.status.success());
    assert!(stdout(&out).is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "I\nII\nIII\n");

    let out = run(&["-o", "-p", path_str, "--app", "1965"]);
    assert!(out.status.success());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "I\nII\nIII\n1965 = MCMLXV\n"
    );
}

#[test]
fn test_cli_default_output_file() {
    let dir = TempDir::new().unwrap();
    let out = Command::new(roman_bin())
        .args(["-o", "XIV"])
        .current_dir(dir.path())
        .output()
        .expect("failed to run roman");
    assert!(out.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("out.txt")).unwrap(),
        "XIV = 14\n"
    );
}
