use clap::Parser;
use std::fmt::Debug;

use super::{instance, ledger_file};

#[derive(Parser, Debug, Clone)]
#[group(skip)]
pub struct Cmd {
    #[command(flatten)]
    pub instance: instance::Args,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Ledger(#[from] ledger_file::Error),
}

impl Cmd {
    pub fn run(&self) -> Result<(), Error> {
        println!("{}", self.value()?);
        Ok(())
    }

    /// Current count, or zero if the counter was never increased.
    pub fn value(&self) -> Result<u32, Error> {
        let state = self.instance.ledger.read()?;
        Ok(instance::count(&state, &self.instance.contract_id))
    }
}
