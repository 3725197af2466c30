//! Integration tests for the rsecc binary
//!
//! Runs the compiled command-line interface end to end: encode, correct,
//! tables, and the failure exit codes.

use std::process::{Command, Output};

fn rsecc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rsecc"))
        .args(args)
        .output()
        .expect("Failed to execute rsecc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_help() {
    let output = rsecc(&["--help"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Reed-Solomon error correction over GF(2^8)"));
    assert!(text.contains("encode"));
    assert!(text.contains("correct"));
    assert!(text.contains("tables"));
}

#[test]
fn test_encode_then_correct() {
    let output = rsecc(&["encode", "--parity", "4", "424f4f"]);
    assert!(output.status.success());

    let codeword = stdout(&output);
    assert_eq!(codeword.len(), 14);
    assert!(codeword.starts_with("424f4f"));

    // replace the first symbol
    let corrupted = format!("00{}", &codeword[2..]);
    let output = rsecc(&["correct", "-p", "4", &corrupted]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("424f4f {}", &codeword[6..]));
}

#[test]
fn test_correct_with_erasures_and_batch() {
    let codeword = stdout(&rsecc(&["encode", "-p", "6", "68656c6c6f"]));
    let erased = format!("{}ff{}", &codeword[..4], &codeword[6..]);

    let output = rsecc(&["correct", "-p", "6", "-e", "2", "--no-parallel", &codeword, &erased]);
    assert!(output.status.success());

    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| line.starts_with("68656c6c6f ")));
}

#[test]
fn test_uncorrectable_exit_code() {
    let codeword = stdout(&rsecc(&["encode", "-p", "6", "0102030405"]));
    // five corrupted symbols against six parity symbols
    let corrupted = format!("aabbccddee{}", &codeword[10..]);

    let output = rsecc(&["correct", "-p", "6", &corrupted]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Codeword 0"));
}

#[test]
fn test_invalid_field_parameters() {
    let output = rsecc(&["--primitive", "0x11b", "encode", "00"]);
    assert!(!output.status.success());
}

#[test]
fn test_invalid_hex() {
    let output = rsecc(&["encode", "xyz"]);
    assert!(!output.status.success());
}

#[test]
fn test_tables() {
    let output = rsecc(&["tables"]);
    assert!(output.status.success());

    let text = stdout(&output);
    let exp = text
        .lines()
        .find_map(|line| line.strip_prefix("exp: "))
        .unwrap();
    assert_eq!(exp.len(), 510);
    assert!(exp.starts_with("01020408102040801d"));
}
