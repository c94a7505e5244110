use std::{fs, io, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::counter::OverflowPolicy;

pub mod locator;

pub use locator::{Error, Location};

/// Contents of `config.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: Defaults,
}

/// Fallbacks for command line options; each is exported as the environment
/// variable the matching option reads.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub contract_id: Option<String>,
    pub ledger_file: Option<PathBuf>,
    pub overflow: Option<OverflowPolicy>,
}

impl Config {
    /// Config from the located config directory, or the default if it has no
    /// `config.toml`.
    pub fn new() -> Result<Self, Error> {
        Self::load(locator::locate()?.config_file())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(error) => {
                return Err(Error::FileRead {
                    path: path.to_path_buf(),
                    error,
                })
            }
        };
        toml::from_str(&contents).map_err(|error| Error::Toml {
            path: path.to_path_buf(),
            error,
        })
    }

    pub fn env_defaults(&self) -> Vec<(&'static str, String)> {
        let Defaults {
            contract_id,
            ledger_file,
            overflow,
        } = &self.defaults;
        [
            ("SOROBAN_CONTRACT_ID", contract_id.clone()),
            (
                "SOROBAN_LEDGER_FILE",
                ledger_file.as_ref().map(|p| p.display().to_string()),
            ),
            ("SOROBAN_OVERFLOW", overflow.map(|o| o.to_string())),
        ]
        .into_iter()
        .filter_map(|(name, value)| Some((name, value?)))
        .collect()
    }
}
