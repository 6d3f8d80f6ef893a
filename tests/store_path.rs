mod support;

use predicates::str::contains;

use support::{taskdeck_cmd, StoreDir};

#[test]
fn file_flag_overrides_the_default_path() {
    let store = StoreDir::new();
    let custom = store.path().join("elsewhere").join("work.json");

    taskdeck_cmd(&store)
        .args(["add", "Buy milk"])
        .arg("--file")
        .arg(&custom)
        .assert()
        .success()
        .stdout(contains("Task added (ID: 1)"));

    assert!(custom.exists());
    assert!(!store.store_file().exists());
}

#[test]
fn env_var_overrides_the_default_path() {
    let store = StoreDir::new();
    let custom = store.path().join("env-tasks.json");

    taskdeck_cmd(&store)
        .env("TASKDECK_FILE", &custom)
        .args(["add", "Buy milk"])
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!store.store_file().exists());
}

#[test]
fn config_file_sets_the_store_path() {
    let store = StoreDir::new();
    store.write_config("file = \"from-config.json\"\n");

    taskdeck_cmd(&store)
        .args(["add", "Buy milk"])
        .assert()
        .success();

    assert!(store.path().join("from-config.json").exists());
    assert!(!store.store_file().exists());
}

#[test]
fn flag_beats_env_and_config() {
    let store = StoreDir::new();
    store.write_config("file = \"from-config.json\"\n");
    let from_env = store.path().join("from-env.json");
    let from_flag = store.path().join("from-flag.json");

    taskdeck_cmd(&store)
        .env("TASKDECK_FILE", &from_env)
        .args(["add", "Buy milk"])
        .arg("--file")
        .arg(&from_flag)
        .assert()
        .success();

    assert!(from_flag.exists());
    assert!(!from_env.exists());
    assert!(!store.path().join("from-config.json").exists());
}

#[test]
fn malformed_config_is_a_user_facing_error() {
    let store = StoreDir::new();
    store.write_config("file = [broken");

    taskdeck_cmd(&store)
        .args(["list"])
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn two_invocations_share_one_store() {
    let store = StoreDir::new();
    let shared = store.path().join("shared.json");

    taskdeck_cmd(&store)
        .env("TASKDECK_FILE", &shared)
        .args(["add", "first"])
        .assert()
        .success();

    taskdeck_cmd(&store)
        .env("TASKDECK_FILE", &shared)
        .args(["add", "second"])
        .assert()
        .success()
        .stdout(contains("Task added (ID: 2)"));

    taskdeck_cmd(&store)
        .env("TASKDECK_FILE", &shared)
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("1: first (Status: todo)"))
        .stdout(contains("2: second (Status: todo)"));
}
