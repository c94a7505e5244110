//! The persistent counter: one `u32` stored under [`COUNTER`].
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::storage::Storage;

/// Well-known key the counter lives under.
pub const COUNTER: &str = "COUNTER";

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("counter overflow: cannot increase past {}", u32::MAX)]
    Overflow,
}

/// What `increase` does once the counter has reached `u32::MAX`.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Return an error and leave storage untouched
    #[default]
    Fail,
    /// Stay at the maximum value
    Saturate,
    /// Start again from zero
    Wrap,
}

impl OverflowPolicy {
    pub fn apply(self, current: u32) -> Result<u32, Error> {
        match self {
            OverflowPolicy::Fail => current.checked_add(1).ok_or(Error::Overflow),
            OverflowPolicy::Saturate => Ok(current.saturating_add(1)),
            OverflowPolicy::Wrap => Ok(current.wrapping_add(1)),
        }
    }
}

impl Display for OverflowPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OverflowPolicy::Fail => "fail",
            OverflowPolicy::Saturate => "saturate",
            OverflowPolicy::Wrap => "wrap",
        })
    }
}

/// Stored value, or `None` if the counter was never written.
pub fn peek<S: Storage + ?Sized>(storage: &S) -> Option<u32> {
    storage.get(COUNTER)
}

pub fn get<S: Storage + ?Sized>(storage: &S) -> u32 {
    peek(storage).unwrap_or(0)
}

/// Adds one to the counter and writes it back.
///
/// On error nothing is written.
pub fn increase<S: Storage + ?Sized>(storage: &mut S, policy: OverflowPolicy) -> Result<(), Error> {
    let count = policy.apply(get(&*storage))?;
    storage.set(COUNTER, count);
    tracing::debug!(count, "counter increased");
    Ok(())
}
