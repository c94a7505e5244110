use clap::Parser;
use std::fmt::Debug;

use crate::config::{self, locator, Config};

#[derive(Debug, Parser, Clone)]
pub enum Cmd {
    /// Print the config directory in use
    Dir,
    /// Print the effective `config.toml`
    Show,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] config::Error),
    #[error("cannot print config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Cmd {
    pub fn run(&self) -> Result<(), Error> {
        match self {
            Cmd::Dir => {
                let location = locator::locate()?;
                tracing::debug!("{location}");
                println!("{}", location.as_ref().display());
            }
            Cmd::Show => print!("{}", toml::to_string(&Config::new()?)?),
        }
        Ok(())
    }
}
