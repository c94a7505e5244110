#![no_std]
use soroban_sdk::{contract, contracterror, contractimpl, log, symbol_short, Env, Symbol};

const COUNTER: Symbol = symbol_short!("COUNTER");

// Instance TTL is bumped to EXTEND_TO ledgers whenever it drops below THRESHOLD.
const THRESHOLD: u32 = 17_280;
const EXTEND_TO: u32 = 518_400;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// The counter is already at `u32::MAX`
    Overflow = 1,
}

#[contract]
pub struct IncrementContract;

#[contractimpl]
impl IncrementContract {
    /// Current count; 0 if `increase` was never called.
    pub fn get(env: Env) -> u32 {
        env.storage().instance().get(&COUNTER).unwrap_or(0)
    }

    /// Increase the stored count by one.
    pub fn increase(env: Env) -> Result<(), Error> {
        let count = Self::get(env.clone())
            .checked_add(1)
            .ok_or(Error::Overflow)?;
        log!(&env, "count: {}", count);

        env.storage().instance().set(&COUNTER, &count);
        env.storage().instance().extend_ttl(THRESHOLD, EXTEND_TO);
        Ok(())
    }
}
