//! Integration tests for init and config commands

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::tagalias_cmd;

#[test]
fn test_init_creates_store_files() {
    let temp = TempDir::new().unwrap();

    tagalias_cmd().arg("init").arg(temp.path()).assert().success();

    assert!(temp.path().join(".tagalias").exists());
    assert!(temp.path().join(".tagalias/config.toml").exists());
    assert!(temp.path().join(".tagalias/aliases.toml").exists());

    let content = fs::read_to_string(temp.path().join(".tagalias/config.toml")).unwrap();
    assert!(content.contains("limit = 4096"));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    tagalias_cmd().arg("init").arg(temp.path()).assert().success();

    tagalias_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_commands_outside_store_fail_with_exit_code_2() {
    let temp = TempDir::new().unwrap();

    tagalias_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Not a tagalias directory"));
}

#[test]
fn test_store_discovered_from_subdirectory() {
    let temp = TempDir::new().unwrap();

    tagalias_cmd().arg("init").arg(temp.path()).assert().success();

    let nested = temp.path().join("photos").join("2014");
    fs::create_dir_all(&nested).unwrap();

    tagalias_cmd()
        .current_dir(&nested)
        .arg("add")
        .arg("pets")
        .arg("cat")
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join(".tagalias/aliases.toml")).unwrap();
    assert!(content.contains("pets"));
}

#[test]
fn test_store_discovered_through_tagalias_root() {
    let store = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    tagalias_cmd().arg("init").arg(store.path()).assert().success();

    tagalias_cmd()
        .env("TAGALIAS_ROOT", store.path())
        .current_dir(elsewhere.path())
        .arg("add")
        .arg("pets")
        .arg("cat")
        .assert()
        .success();

    let content = fs::read_to_string(store.path().join(".tagalias/aliases.toml")).unwrap();
    assert!(content.contains("pets"));
}

#[test]
fn test_tagalias_root_without_store_fails() {
    let temp = TempDir::new().unwrap();

    tagalias_cmd()
        .env("TAGALIAS_ROOT", temp.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TAGALIAS_ROOT"));
}

#[test]
fn test_config_get_limit() {
    let temp = TempDir::new().unwrap();

    tagalias_cmd().arg("init").arg(temp.path()).assert().success();

    tagalias_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("limit")
        .assert()
        .success()
        .stdout(predicate::str::contains("4096"));
}

#[test]
fn test_config_set_limit() {
    let temp = TempDir::new().unwrap();

    tagalias_cmd().arg("init").arg(temp.path()).assert().success();

    tagalias_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("limit")
        .arg("64")
        .assert()
        .success();

    tagalias_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("limit")
        .assert()
        .success()
        .stdout(predicate::str::contains("64"));
}

#[test]
fn test_config_set_limit_rejects_zero() {
    let temp = TempDir::new().unwrap();

    tagalias_cmd().arg("init").arg(temp.path()).assert().success();

    tagalias_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("limit")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn test_config_set_created_fails() {
    let temp = TempDir::new().unwrap();

    tagalias_cmd().arg("init").arg(temp.path()).assert().success();

    tagalias_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("created")
        .arg("2020-01-01T00:00:00Z")
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();

    tagalias_cmd().arg("init").arg(temp.path()).assert().success();

    tagalias_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("limit"))
        .stdout(predicate::str::contains("created"));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();

    tagalias_cmd().arg("init").arg(temp.path()).assert().success();

    tagalias_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("editor")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}
