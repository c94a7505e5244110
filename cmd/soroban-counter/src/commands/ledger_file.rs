use std::path::PathBuf;

use crate::{commands::HEADING_SANDBOX, snapshot::LedgerSnapshot};

pub const DEFAULT_LEDGER_FILE: &str = ".soroban/ledger.json";

#[derive(Debug, clap::Args, Clone)]
#[group(skip)]
pub struct Args {
    /// File to persist ledger state
    #[arg(
        long,
        default_value(DEFAULT_LEDGER_FILE),
        env = "SOROBAN_LEDGER_FILE",
        help_heading = HEADING_SANDBOX,
    )]
    pub ledger_file: PathBuf,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            ledger_file: DEFAULT_LEDGER_FILE.into(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("reading file {filepath}: {error}")]
    CannotReadLedgerFile {
        filepath: PathBuf,
        error: crate::snapshot::Error,
    },

    #[error("committing file {filepath}: {error}")]
    CannotCommitLedgerFile {
        filepath: PathBuf,
        error: crate::snapshot::Error,
    },
}

impl Args {
    pub fn read(&self) -> Result<LedgerSnapshot, Error> {
        tracing::trace!(ledger_file = ?self.ledger_file, "reading ledger");
        LedgerSnapshot::read_or_default(&self.ledger_file).map_err(|e| {
            Error::CannotReadLedgerFile {
                filepath: self.ledger_file.clone(),
                error: e,
            }
        })
    }

    pub fn write(&self, state: &LedgerSnapshot) -> Result<(), Error> {
        tracing::trace!(
            ledger_file = ?self.ledger_file,
            sequence_number = state.sequence_number,
            "committing ledger"
        );
        state
            .write_file(&self.ledger_file)
            .map_err(|e| Error::CannotCommitLedgerFile {
                filepath: self.ledger_file.clone(),
                error: e,
            })
    }
}
