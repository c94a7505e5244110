use predicates::prelude::*;

use crate::util::{AssertExt, TestEnv};

#[test]
fn get_on_fresh_ledger_is_zero() {
    let env = TestEnv::new();
    env.cmd("get").assert().success().stdout("0\n");
}

#[test]
fn increase_then_get() {
    let env = TestEnv::new();
    env.cmd("get").assert().success().stdout("0\n");
    env.cmd("increase").assert().success().stdout("");
    env.cmd("get").assert().success().stdout("1\n");
    env.cmd("increase").assert().success();
    env.cmd("get").assert().success().stdout("2\n");
}

#[test]
fn increase_logs_count() {
    let env = TestEnv::new();
    env.cmd("increase")
        .assert()
        .success()
        .stderr(predicate::str::contains("count: 1"));
    env.cmd("increase")
        .arg("--quiet")
        .assert()
        .success()
        .stderr("");
}

#[test]
fn get_is_idempotent() {
    let env = TestEnv::new();
    env.cmd("increase").assert().success();
    for _ in 0..3 {
        assert_eq!(env.cmd("get").assert().success().output_line(), "1");
    }
}

#[test]
fn instances_are_isolated() {
    let env = TestEnv::new();
    env.cmd("increase").args(["--id", "a"]).assert().success();
    env.cmd("increase").args(["--id", "a"]).assert().success();
    env.cmd("increase").args(["--id", "b"]).assert().success();

    env.cmd("get").args(["--id", "a"]).assert().stdout("2\n");
    env.cmd("get").args(["--id", "b"]).assert().stdout("1\n");
    env.cmd("get").assert().stdout("0\n");
}

#[test]
fn ledger_file_from_env() {
    let env = TestEnv::new();
    env.bare_cmd("increase")
        .env("SOROBAN_LEDGER_FILE", env.ledger_file())
        .assert()
        .success();
    env.cmd("get").assert().stdout("1\n");
}

#[test]
fn overflow_fails_by_default() {
    let env = TestEnv::new();
    std::fs::write(
        env.ledger_file(),
        r#"{"sequence_number":7,"instances":{"counter":{"COUNTER":4294967295}}}"#,
    )
    .unwrap();

    env.cmd("increase")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: counter overflow"));
    env.cmd("get").assert().stdout("4294967295\n");

    env.cmd("increase")
        .args(["--overflow", "saturate"])
        .assert()
        .success();
    env.cmd("get").assert().stdout("4294967295\n");

    env.cmd("increase").args(["--overflow", "wrap"]).assert().success();
    env.cmd("get").assert().stdout("0\n");
}

#[test]
fn corrupt_ledger_is_reported() {
    let env = TestEnv::new();
    std::fs::write(env.ledger_file(), "not json").unwrap();
    env.cmd("get")
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading file"));
}
