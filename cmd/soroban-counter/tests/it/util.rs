use std::{ffi::OsString, path::Path};

use assert_cmd::{assert::Assert, Command};
use assert_fs::{prelude::PathChild, TempDir};

/// Command isolated from the developer's environment: no config is picked up
/// and no `SOROBAN_*` variables leak in.
pub trait SorobanCommand {
    fn new_cmd(name: &str, config_home: &Path) -> Command {
        let mut this = Command::cargo_bin("soroban-counter")
            .expect("failed to find local soroban-counter binary");
        for var in [
            "SOROBAN_CONTRACT_ID",
            "SOROBAN_LEDGER_FILE",
            "SOROBAN_OVERFLOW",
            "RUST_LOG",
        ] {
            this.env_remove(var);
        }
        this.env("SOROBAN_CONFIG_HOME", config_home)
            .current_dir(config_home)
            .arg(name);
        this
    }
}

/// Default
pub struct Sandbox {}

impl SorobanCommand for Sandbox {}

pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn ledger_file(&self) -> OsString {
        self.dir.child("ledger.json").as_os_str().into()
    }

    pub fn cmd(&self, name: &str) -> Command {
        let mut cmd = Sandbox::new_cmd(name, self.dir.path());
        cmd.arg("--ledger-file").arg(self.ledger_file());
        cmd
    }

    pub fn bare_cmd(&self, name: &str) -> Command {
        Sandbox::new_cmd(name, self.dir.path())
    }
}

pub trait AssertExt {
    fn output_line(&self) -> String;
}

impl AssertExt for Assert {
    fn output_line(&self) -> String {
        String::from_utf8(self.get_output().stdout.clone())
            .expect("failed to make str")
            .trim()
            .to_owned()
    }
}
