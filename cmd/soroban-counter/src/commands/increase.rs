use clap::Parser;
use std::fmt::Debug;

use super::{instance, ledger_file, HEADING_SANDBOX};
use crate::counter::{self, OverflowPolicy};

#[derive(Parser, Debug, Clone)]
#[group(skip)]
pub struct Cmd {
    #[command(flatten)]
    pub instance: instance::Args,

    /// What to do when the counter is already at its maximum value
    #[arg(
        long,
        value_enum,
        env = "SOROBAN_OVERFLOW",
        default_value_t = OverflowPolicy::Fail,
        help_heading = HEADING_SANDBOX,
    )]
    pub overflow: OverflowPolicy,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Ledger(#[from] ledger_file::Error),
    #[error(transparent)]
    Counter(#[from] counter::Error),
}

impl Cmd {
    pub fn run(&self) -> Result<(), Error> {
        let count = self.execute()?;
        tracing::info!(contract_id = %self.instance.contract_id, "count: {count}");
        Ok(())
    }

    /// Increases the counter and commits the ledger, returning the new count.
    pub fn execute(&self) -> Result<u32, Error> {
        let id = &self.instance.contract_id;
        let mut state = self.instance.ledger.read()?;
        counter::increase(state.instance_mut(id), self.overflow)?;
        state.bump_sequence();
        self.instance.ledger.write(&state)?;
        Ok(instance::count(&state, id))
    }
}
