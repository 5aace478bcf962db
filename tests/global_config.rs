use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::predicate;
use tempfile::TempDir;

fn cmd(store: &Path, global_config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("git-commit-as").unwrap();
    cmd.env("GIT_COMMIT_AS_STORE", store)
        .env("GIT_CONFIG_GLOBAL", global_config)
        .env("GIT_CONFIG_NOSYSTEM", "1");
    cmd
}

fn setup() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("identities.toml");
    let global_config = dir.path().join("gitconfig");
    (dir, store, global_config)
}

fn read_global(global_config: &Path, key: &str) -> String {
    let assert = Command::new("git")
        .env("GIT_CONFIG_GLOBAL", global_config)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .args(["config", "--global", key])
        .assert()
        .success();
    String::from_utf8(assert.get_output().stdout.clone())
        .unwrap()
        .trim()
        .to_string()
}

#[test]
fn global_installs_the_named_identity() {
    let (_dir, store, global_config) = setup();

    cmd(&store, &global_config)
        .args(["add", "kc", "Krerkkiat Chusap", "kc@example.com"])
        .assert()
        .success();

    cmd(&store, &global_config)
        .args(["global", "kc"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Global git identity is now Krerkkiat Chusap <kc@example.com>",
        ));

    assert_eq!(read_global(&global_config, "user.name"), "Krerkkiat Chusap");
    assert_eq!(read_global(&global_config, "user.email"), "kc@example.com");
}

#[test]
fn global_falls_back_to_the_default_identity() {
    let (_dir, store, global_config) = setup();

    cmd(&store, &global_config)
        .args(["add", "alice", "Alice A", "alice@x.test"])
        .assert()
        .success();
    cmd(&store, &global_config)
        .args(["set-default", "alice"])
        .assert()
        .success();

    cmd(&store, &global_config)
        .arg("global")
        .assert()
        .success();

    assert_eq!(read_global(&global_config, "user.name"), "Alice A");
    assert_eq!(read_global(&global_config, "user.email"), "alice@x.test");
}

#[test]
fn global_without_default_fails() {
    let (_dir, store, global_config) = setup();

    cmd(&store, &global_config)
        .arg("global")
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("no default identity set"));
    assert!(!global_config.exists());
}

#[test]
fn global_with_unknown_key_fails() {
    let (_dir, store, global_config) = setup();

    cmd(&store, &global_config)
        .args(["global", "ghost"])
        .assert()
        .failure()
        .code(6)
        .stderr(predicate::str::contains("unknown identity 'ghost'"));
    assert!(!global_config.exists());
}
