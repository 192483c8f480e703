//! End-to-end tests running the compiled binary as a subprocess.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use rstest::rstest;
use tempfile::TempDir;

/// Runs the binary with HOME and XDG_CONFIG_HOME pointed at `home`, so the
/// user's global config never leaks in.
fn run(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_algokit"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("invalid utf8 string")
}

#[test]
fn given_no_arguments_when_running_then_prints_sample_verdict() {
    let home = TempDir::new().unwrap();

    let output = run(home.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "12321 is a palindrom.\n");
}

#[rstest]
#[case("12321", "12321 is a palindrom.\n")]
#[case("10", "10 is NOT a palindrom.\n")]
#[case("0", "0 is a palindrom.\n")]
fn given_number_when_running_palindrome_then_prints_verdict(#[case] number: &str, #[case] expected: &str) {
    let home = TempDir::new().unwrap();

    let output = run(home.path(), &["palindrome", number]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), expected);
}

#[test]
fn given_negative_number_when_running_palindrome_then_exits_with_data_error() {
    let home = TempDir::new().unwrap();

    let output = run(home.path(), &["palindrome", "-121"]);

    assert_eq!(output.status.code(), Some(65));
    assert!(stdout(&output).is_empty());
    let stderr = String::from_utf8(output.stderr).expect("invalid utf8 string");
    assert!(stderr.contains("negative numbers are not supported: -121"));
}

#[rstest]
#[case("pre", "1 2 4 5 3 6 7\n")]
#[case("in", "4 2 5 1 6 3 7\n")]
#[case("post", "4 5 2 6 7 3 1\n")]
fn given_values_when_running_tree_then_prints_traversal(#[case] order: &str, #[case] expected: &str) {
    let home = TempDir::new().unwrap();

    let output = run(
        home.path(),
        &["tree", "--order", order, "1", "2", "3", "4", "5", "6", "7"],
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), expected);
}

#[test]
fn given_broken_global_config_when_running_config_path_then_succeeds() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("algokit");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("algokit.toml"), "garbage [").unwrap();

    let path = run(home.path(), &["config", "path"]);
    let palindrome = run(home.path(), &["palindrome", "11"]);

    assert_eq!(path.status.code(), Some(0));
    assert!(stdout(&path).trim_end().ends_with("algokit.toml"));
    assert_eq!(palindrome.status.code(), Some(78));
}
