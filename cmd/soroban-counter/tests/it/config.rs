use assert_fs::prelude::*;
use predicates::prelude::*;

use crate::util::TestEnv;

#[test]
fn config_defaults_select_instance() {
    let env = TestEnv::new();
    env.dir
        .child("config.toml")
        .write_str("[defaults]\ncontract_id = \"from-config\"\n")
        .unwrap();

    env.cmd("increase").assert().success();
    env.cmd("get")
        .args(["--id", "from-config"])
        .assert()
        .stdout("1\n");
    env.cmd("get").args(["--id", "counter"]).assert().stdout("0\n");
}

#[test]
fn env_wins_over_config() {
    let env = TestEnv::new();
    env.dir
        .child("config.toml")
        .write_str("[defaults]\noverflow = \"wrap\"\n")
        .unwrap();
    std::fs::write(
        env.ledger_file(),
        r#"{"sequence_number":0,"instances":{"counter":{"COUNTER":4294967295}}}"#,
    )
    .unwrap();

    env.cmd("increase")
        .env("SOROBAN_OVERFLOW", "fail")
        .assert()
        .failure();
    env.cmd("increase").assert().success();
    env.cmd("get").assert().stdout("0\n");
}

#[test]
fn local_config_dir_is_preferred() {
    let env = TestEnv::new();
    let local = env.dir.child(".soroban-counter");
    local.create_dir_all().unwrap();

    env.bare_cmd("config")
        .arg("dir")
        .assert()
        .success()
        .stdout(predicate::str::contains(".soroban-counter"));
}

#[test]
fn config_show_prints_toml() {
    let env = TestEnv::new();
    env.dir
        .child("config.toml")
        .write_str("[defaults]\ncontract_id = \"tut\"\n")
        .unwrap();
    env.bare_cmd("config")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("contract_id = \"tut\""));
}

#[test]
fn malformed_config_warns_unless_quiet() {
    let env = TestEnv::new();
    env.dir
        .child("config.toml")
        .write_str("[defaults]\noverflow = \"clamp\"\n")
        .unwrap();

    env.cmd("get")
        .assert()
        .success()
        .stdout("0\n")
        .stderr(predicate::str::contains("ignoring config"));
    env.cmd("get")
        .arg("-q")
        .assert()
        .success()
        .stdout("0\n")
        .stderr(predicate::str::contains("ignoring config").not());
}
