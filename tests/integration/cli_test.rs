//! Integration tests for the speedctl CLI

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{run_speedctl, speedctl};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_speedctl(&["--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("run"));
    assert!(stdout.contains("interactive"));
    assert!(stdout.contains("config"));
    assert!(stdout.contains("completions"));
}

#[test]
fn run_help_describes_commands() {
    let (stdout, _stderr, exit_code) = run_speedctl(&["run", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("<COMMAND>"));
    assert!(stdout.contains("double"));
    assert!(stdout.contains("--no-video"));
}

// ============================================================================
// Run Command Tests
// ============================================================================

#[test]
fn run_double_prints_each_step() {
    let (stdout, _stderr, exit_code) = run_speedctl(&["run", "double"]);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    init: 1.00x | 0.5  [1]  1.5  2  4
    double: 2.00x | 0.5  1  1.5  [2]  4
    ");
}

#[test]
fn run_double_caps_at_four() {
    let (stdout, _stderr, exit_code) = run_speedctl(&["run", "double", "double", "double"]);

    assert_eq!(exit_code, 0);
    let last = stdout.lines().last().unwrap();
    assert_eq!(last, "double: 4.00x | 0.5  1  1.5  2  [4]");
}

#[test]
fn run_set_clamps_and_reset_restores() {
    let (stdout, _stderr, exit_code) = run_speedctl(&["run", "set 9", "set 0.1", "reset"]);

    assert_eq!(exit_code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[1], "set 9: 4.00x | 0.5  1  1.5  2  [4]");
    assert_eq!(lines[2], "set 0.1: 0.25x | 0.5  1  1.5  2  4");
    assert_eq!(lines[3], "reset: 1.00x | 0.5  [1]  1.5  2  4");
}

#[test]
fn run_press_selects_button() {
    let (stdout, _stderr, exit_code) = run_speedctl(&["run", "press 1.5"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("press 1.5: 1.50x | 0.5  1  [1.5]  2  4"));
}

#[test]
fn run_external_change_refreshes_display() {
    let (stdout, _stderr, exit_code) = run_speedctl(&["run", "external 0.5"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("external 0.5: 0.50x | [0.5]  1  1.5  2  4"));
}

#[test]
fn run_without_video_warns_and_changes_nothing() {
    let (stdout, stderr, exit_code) = run_speedctl(&["run", "--no-video", "double", "reset"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("double: - | 0.5  1  1.5  2  4  (skipped: No video element found)"));
    assert!(stdout.contains("reset: - | 0.5  1  1.5  2  4"));
    assert!(stderr.contains("No video element found"));
    assert!(stderr.contains("Video speed controls are not supported"));
}

#[test]
fn run_with_unsupported_video_skips() {
    let (stdout, stderr, exit_code) = run_speedctl(&["run", "--unsupported", "double"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("skipped: playbackRate not supported on this video element"));
    assert!(stderr.contains("playbackRate not supported"));
}

#[test]
fn run_verbose_logs_applied_changes() {
    let (_stdout, stderr, exit_code) = run_speedctl(&["--verbose", "run", "double"]);

    assert_eq!(exit_code, 0);
    assert!(stderr.contains("Video speed controls are supported"));
    assert!(stderr.contains("Playback speed changed from 1x to 2x"));
}

#[test]
fn run_json_emits_parseable_lines() {
    let (stdout, _stderr, exit_code) = run_speedctl(&["run", "--json", "set 2.5"]);

    assert_eq!(exit_code, 0);
    let report: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(report["action"], "set 2.5");
    assert_eq!(report["label"], "2.50x");
    assert_eq!(report["rate"], 2.5);
    assert_eq!(report["outcome"]["outcome"]["previous"], 1.0);
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn run_without_commands_is_a_usage_error() {
    let (_stdout, stderr, exit_code) = run_speedctl(&["run"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("<COMMAND>"));
}

#[test]
fn run_with_unknown_command_fails_before_any_step() {
    let (stdout, stderr, exit_code) = run_speedctl(&["run", "double", "faster"]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Invalid command 'faster'"));
}

#[test]
fn run_with_bad_speed_fails() {
    let temp = TempDir::new().unwrap();
    speedctl(temp.path())
        .args(["run", "set quick"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid speed 'quick'"));
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn completions_for_bash_mention_binary() {
    let temp = TempDir::new().unwrap();
    speedctl(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("speedctl"));
}
