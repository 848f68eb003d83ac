use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn fibseq(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fibseq"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run fibseq")
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).unwrap()
}

#[test]
fn default_run_prints_terms_below_one_hundred() {
    let output = fibseq(&[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0 1 1 2 3 5 8 13 21 34 55 89\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn explicit_bounds() {
    assert_eq!(stdout(&fibseq(&["1"])), "0\n");
    assert_eq!(stdout(&fibseq(&["0"])), "\n");
    assert_eq!(stdout(&fibseq(&["-5"])), "\n");
    assert_eq!(stdout(&fibseq(&["20.5"])), "0 1 1 2 3 5 8 13\n");
}

#[test]
fn hyphenated_real_bounds() {
    assert_eq!(stdout(&fibseq(&["-inf"])), "\n");
    assert_eq!(stdout(&fibseq(&["-0.5"])), "\n");
}

#[test]
fn real_bound_prints_exact_terms() {
    let output = fibseq(&["1e20"]);
    assert!(output.status.success());
    assert!(stdout(&output).ends_with(" 83621143489848422977\n"));
}

#[test]
fn invalid_bound_fails() {
    let output = fibseq(&["lots"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid bound"), "stderr: {stderr}");
}
