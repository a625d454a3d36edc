//! Error paths of the binary.
//! Usage errors fail while parsing, so no mount is attempted. The one mount which is attempted
//! uses paths that do not exist, so it fails without side effects.

use std::process::{Command, Output};

const FLAG_CODES: [&str; 13] = [
    "b - MS_BIND",
    "d - MS_DIRSYNC",
    "l - MS_MANDLOCK",
    "m - MS_MOVE",
    "A - MS_NOATIME",
    "V - MS_NODEV",
    "D - MS_NODIRATIME",
    "E - MS_NOEXEC",
    "S - MS_NOSUID",
    "r - MS_RDONLY",
    "c - MS_REC",
    "R - MS_REMOUNT",
    "s - MS_SYNCHRONOUS",
];

fn t_mount(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_t_mount"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("the t_mount binary should run")
}

fn assert_usage_error(output: &Output) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success(), "unexpected success: {stderr}");
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Usage:"), "no usage in: {stderr}");
    assert!(stderr.contains("Available options:"), "no options in: {stderr}");
    for code in FLAG_CODES {
        assert!(stderr.contains(code), "{code} missing from: {stderr}");
    }
    assert!(output.stdout.is_empty());
}

#[test]
fn unknown_option() {
    let output = t_mount(&["-z", "/dev/loop0", "/mnt/x"]);
    assert_usage_error(&output);
    assert!(String::from_utf8_lossy(&output.stderr).contains("-z"));
}

#[test]
fn unknown_option_after_valid_ones() {
    let output = t_mount(&["-t", "ext4", "-f", "r", "/dev/loop0", "/mnt/x", "-z"]);
    assert_usage_error(&output);
}

#[test]
fn unknown_flag_code() {
    let output = t_mount(&["-f", "rq", "/dev/loop0", "/mnt/x"]);
    assert_usage_error(&output);
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown mount flag code 'q'"));
}

#[test]
fn one_positional() {
    let output = t_mount(&["/dev/loop0"]);
    assert_usage_error(&output);
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Wrong number of arguments\n"));
}

#[test]
fn three_positionals() {
    let output = t_mount(&["/dev/loop0", "/mnt/x", "/mnt/y"]);
    assert_usage_error(&output);
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Wrong number of arguments\n"));
}

#[test]
fn no_arguments() {
    assert_usage_error(&t_mount(&[]));
}

#[test]
fn help_is_a_usage_error() {
    assert_usage_error(&t_mount(&["-h", "/dev/loop0", "/mnt/x"]));
    assert_usage_error(&t_mount(&["--help"]));
}

#[test]
fn failed_mount_reports_os_error() {
    let output = t_mount(&[
        "-t",
        "ext4",
        "-f",
        "r",
        "/nonexistent/t_mount/source",
        "/nonexistent/t_mount/target",
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(!stderr.trim().is_empty());
    assert!(stderr.ends_with('\n'));
    assert!(!stderr.contains("Usage:"), "not a usage error: {stderr}");
    assert!(output.stdout.is_empty());
}
