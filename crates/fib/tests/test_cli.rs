//! End-to-end tests for the `fib` binary
//!
//! These run the built executable and check the process boundary:
//! stdout carries exactly the value, errors go to stderr with a
//! nonzero exit.

use std::process::{Command, Output};

fn run_fib(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fib"))
        .args(args)
        .output()
        .expect("failed to spawn fib")
}

#[test]
fn test_fib_10_prints_55() {
    let output = run_fib(&["10"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "55\n");
}

#[test]
fn test_fib_base_cases() {
    let output = run_fib(&["0"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0\n");

    let output = run_fib(&["1"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1\n");
}

#[test]
fn test_missing_argument_fails() {
    let output = run_fib(&[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "no usage diagnostic: {}", stderr);
}

#[test]
fn test_non_numeric_argument_fails() {
    let output = run_fib(&["twelve"]);
    assert!(!output.status.success());
    // No value may be printed for bad input
    assert!(output.stdout.is_empty());
}

#[test]
fn test_negative_argument_fails() {
    let output = run_fib(&["-5"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
