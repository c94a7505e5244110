use clap::builder::NonEmptyStringValueParser;

use super::{ledger_file, HEADING_SANDBOX};
use crate::{counter, snapshot::LedgerSnapshot};

pub const DEFAULT_CONTRACT_ID: &str = "counter";

/// Selects one contract instance inside the sandbox ledger.
#[derive(Debug, clap::Args, Clone)]
#[group(skip)]
pub struct Args {
    /// Contract instance whose storage is used
    #[arg(
        long = "id",
        env = "SOROBAN_CONTRACT_ID",
        default_value(DEFAULT_CONTRACT_ID),
        value_parser = NonEmptyStringValueParser::new(),
        help_heading = HEADING_SANDBOX,
    )]
    pub contract_id: String,

    #[command(flatten)]
    pub ledger: ledger_file::Args,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            contract_id: DEFAULT_CONTRACT_ID.to_string(),
            ledger: ledger_file::Args::default(),
        }
    }
}

/// Counter value of `contract_id`, without creating the instance.
pub fn count(state: &LedgerSnapshot, contract_id: &str) -> u32 {
    state.instance(contract_id).map_or(0, counter::get)
}
