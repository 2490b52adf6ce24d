//! Integration tests for config handling

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{speedctl, temp_config};

#[test]
fn config_buttons_shape_the_display() {
    let (temp_dir, _path) = temp_config(
        r#"
[display]
show_label = false
buttons = ["0.25", "3"]
"#,
    );

    speedctl(temp_dir.path())
        .args(["run", "set 3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("set 3: 0.25  [3]"));
}

#[test]
fn config_initial_rate_is_shown_clamped() {
    let (temp_dir, _path) = temp_config("[video]\ninitial_rate = 8.0\n");

    speedctl(temp_dir.path())
        .args(["run", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init: 4.00x | 0.5  1  1.5  2  [4]"));
}

#[test]
fn config_can_disable_rate_support() {
    let (temp_dir, _path) = temp_config("[video]\nrate_supported = false\n");

    speedctl(temp_dir.path())
        .args(["run", "double"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped: playbackRate not supported"));
}

#[test]
fn invalid_config_fails_with_path() {
    let (temp_dir, path) = temp_config("[display]\nbuttons = 3\n");

    speedctl(temp_dir.path())
        .args(["run", "double"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"))
        .stderr(predicate::str::contains(path.to_string_lossy().to_string()));
}

#[test]
fn config_flag_overrides_environment() {
    let (_other_dir, other_path) = temp_config("[display]\nbuttons = [\"2\"]\nshow_label = false\n");
    let temp_dir = TempDir::new().unwrap();

    speedctl(temp_dir.path())
        .args(["--config", other_path.to_str().unwrap(), "run", "double"])
        .assert()
        .success()
        .stdout(predicate::str::contains("double: [2]"));
}

#[test]
fn config_init_writes_defaults_once() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");

    speedctl(temp_dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[display]"));
    assert!(content.contains("initial_rate = 1.0"));

    speedctl(temp_dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    speedctl(temp_dir.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_show_prints_effective_toml() {
    let temp_dir = TempDir::new().unwrap();

    speedctl(temp_dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("show_label = true"))
        .stdout(predicate::str::contains("rate_supported = true"));
}

#[test]
fn config_path_prints_environment_override() {
    let temp_dir = TempDir::new().unwrap();
    let expected = temp_dir.path().join("config.toml");

    speedctl(temp_dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.to_string_lossy().to_string()));
}
