use std::str::FromStr;

use clap::{CommandFactory, FromArgMatches, Parser};

use crate::print::Print;

pub mod completion;
pub mod config;
pub mod get;
pub mod global;
pub mod hello;
pub mod increase;
pub mod instance;
pub mod ledger_file;
pub mod serve;
pub mod version;

pub const HEADING_SANDBOX: &str = "Options (Sandbox)";
pub const HEADING_GLOBAL: &str = "Options (Global)";

const ABOUT: &str = "Build, run and inspect the Soroban tutorial contracts: a greeting and a persistent counter.";

// long_about is shown when someone uses `--help`; short help when using `-h`
const LONG_ABOUT: &str = "

The counter is kept in a local sandbox ledger file, so it survives across invocations:

    soroban-counter get
    soroban-counter increase
    soroban-counter get --id another-instance

Serve the same functions over JSON-RPC:

    soroban-counter serve --port 8080

Defaults for --id, --ledger-file and --overflow can be set in the [defaults] table of
.soroban-counter/config.toml (or ~/.config/soroban-counter/config.toml).";

#[derive(Parser, Debug)]
#[command(
    name = "soroban-counter",
    about = ABOUT,
    version = version::short(),
    long_version = version::long(),
    long_about = ABOUT.to_string() + LONG_ABOUT,
    disable_help_subcommand = true,
)]
pub struct Root {
    #[clap(flatten)]
    pub global_args: global::Args,

    #[command(subcommand)]
    pub cmd: Cmd,
}

impl Root {
    pub fn new() -> Result<Self, clap::Error> {
        let mut matches = Self::command().get_matches();
        Self::from_arg_matches_mut(&mut matches)
    }

    pub fn from_arg_matches<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::from_arg_matches_mut(&mut Self::command().try_get_matches_from(itr)?)
    }

    pub async fn run(&self) -> Result<(), Error> {
        let print = Print::new(self.global_args.quiet);
        match &self.cmd {
            Cmd::Get(get) => get.run()?,
            Cmd::Increase(increase) => increase.run()?,
            Cmd::Hello(hello) => hello.run()?,
            Cmd::Serve(serve) => serve.run(&print).await?,
            Cmd::Config(config) => config.run()?,
            Cmd::Version(version) => version.run(),
            Cmd::Completion(completion) => completion.run(),
        };
        Ok(())
    }
}

impl FromStr for Root {
    type Err = clap::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_arg_matches(s.split_whitespace())
    }
}

#[derive(Parser, Debug)]
pub enum Cmd {
    /// Print the current counter value (0 if it was never increased)
    Get(get::Cmd),
    /// Increase the counter by one
    Increase(increase::Cmd),
    /// Say hello to someone
    Hello(hello::Cmd),
    /// Serve get, increase and hello over JSON-RPC
    Serve(serve::Cmd),
    /// Inspect configuration
    #[command(subcommand)]
    Config(config::Cmd),
    /// Print version information
    Version(version::Cmd),
    /// Print shell completion code for the specified shell.
    #[command(long_about = completion::LONG_ABOUT)]
    Completion(completion::Cmd),
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Get(#[from] get::Error),
    #[error(transparent)]
    Increase(#[from] increase::Error),
    #[error(transparent)]
    Hello(#[from] hello::Error),
    #[error(transparent)]
    Serve(#[from] serve::Error),
    #[error(transparent)]
    Config(#[from] config::Error),
}
