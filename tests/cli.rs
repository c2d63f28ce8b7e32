// Sat Oct 17 2026 - Alex

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const SAMPLE: [u8; 10] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x03, 0x04, 0x07, 0x08];

fn hexpatch(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hexpatch"))
        .args(args)
        .arg("--no-color")
        .output()
        .expect("failed to run hexpatch")
}

fn sample(dir: &Path) -> String {
    let path = dir.join("sample.bin");
    fs::write(&path, SAMPLE).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn help_lists_subcommands() {
    let output = hexpatch(&["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["find", "replace", "overwrite", "paste"] {
        assert!(stdout.contains(command), "missing {} in help", command);
    }
}

#[test]
fn find_prints_offsets_in_quiet_mode() {
    let dir = tempfile::tempdir().unwrap();
    let file = sample(dir.path());

    let output = hexpatch(&["find", &file, "03 04", "--all", "-q", "-b", "3"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2\n6\n");
}

#[test]
fn find_without_match_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let file = sample(dir.path());

    let output = hexpatch(&["find", &file, "FF EE", "-q"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn replace_twice_then_other_pattern() {
    let dir = tempfile::tempdir().unwrap();
    let file = sample(dir.path());

    for expected in [Some(0), Some(0), Some(1)] {
        let output = hexpatch(&["replace", &file, "03 04", "0A 0B", "-b", "2"]);
        assert_eq!(output.status.code(), expected);
    }

    let output = hexpatch(&["replace", &file, "07 08", "0C 0D", "-b", "2"]);
    assert_eq!(output.status.code(), Some(0));

    assert_eq!(
        fs::read(&file).unwrap(),
        vec![0x01, 0x02, 0x0A, 0x0B, 0x05, 0x06, 0x0A, 0x0B, 0x0C, 0x0D]
    );
}

#[test]
fn paste_accepts_hex_offset() {
    let dir = tempfile::tempdir().unwrap();
    let file = sample(dir.path());

    let output = hexpatch(&["paste", &file, "0x8", "EE ??"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(&fs::read(&file).unwrap()[8..], &[0xEE, 0x08]);
}

#[test]
fn find_count_past_stream_exits_two_with_from() {
    let dir = tempfile::tempdir().unwrap();
    let file = sample(dir.path());

    let output = hexpatch(&["find", &file, "03", "-n", "11", "--from", "3"]);
    assert_eq!(output.status.code(), Some(2));

    let output = hexpatch(&["find", &file, "03", "-n", "11"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn invalid_hex_exits_two_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let file = sample(dir.path());

    let output = hexpatch(&["replace", &file, "03 0", "0A 0B"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("[!] "), "unexpected error line {:?}", stderr);
    assert!(stderr.contains("odd number of digits"));
    assert_eq!(fs::read(&file).unwrap(), SAMPLE.to_vec());
}

#[test]
fn mismatched_replacement_length_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let file = sample(dir.path());

    let output = hexpatch(&["replace", &file, "03 04", "0A", "--all"]);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(fs::read(&file).unwrap(), SAMPLE.to_vec());
}

#[test]
fn missing_file_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.bin");

    let output = hexpatch(&["find", missing.to_str().unwrap(), "00"]);
    assert_eq!(output.status.code(), Some(2));
}
