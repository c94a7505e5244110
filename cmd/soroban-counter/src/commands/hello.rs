use clap::Parser;
use std::fmt::Debug;

#[derive(Parser, Debug, Clone)]
#[group(skip)]
pub struct Cmd {
    /// Who to greet
    #[arg(long)]
    pub to: String,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("cannot print result: {0}")]
    CannotPrintJsonResult(#[from] serde_json::Error),
}

impl Cmd {
    pub fn run(&self) -> Result<(), Error> {
        println!("{}", serde_json::to_string(&crate::hello::hello(&self.to))?);
        Ok(())
    }
}
