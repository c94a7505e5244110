use clap::CommandFactory;
use dotenvy::dotenv;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{
    config::{self, Config},
    print::Print,
    Root,
};

#[tokio::main]
pub async fn main() {
    let _ = dotenv().unwrap_or_default();

    // Defaults must be in the env before parsing.
    let config = set_env_from_config();

    let root = Root::new().unwrap_or_else(|e| {
        let mut cmd = Root::command();
        e.format(&mut cmd).exit();
    });

    if let Err(e) = config {
        Print::new(root.global_args.quiet).warnln(format!("ignoring config: {e}"));
    }

    // Now use root to setup the logger
    if let Some(level) = root.global_args.log_level() {
        if let Err(e) = init_tracing(level, &root.global_args.filter_logs) {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }

    if let Err(e) = root.run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(level: tracing::Level, filters: &[String]) -> Result<(), String> {
    let mut e_filter = EnvFilter::from_default_env()
        .add_directive("hyper=off".parse().map_err(|e| format!("{e}"))?)
        .add_directive("warp=off".parse().map_err(|e| format!("{e}"))?)
        .add_directive(
            format!("soroban_counter={level}")
                .parse()
                .map_err(|e| format!("{e}"))?,
        );

    for filter in filters {
        e_filter = e_filter.add_directive(filter.parse().map_err(|e| format!("{e}: {filter}"))?);
    }

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(e_filter)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| format!("Failed to set the global tracing subscriber: {e}"))
}

// Load config.toml defaults as env vars.
fn set_env_from_config() -> Result<(), config::Error> {
    let config = Config::new()?;
    for (name, value) in config.env_defaults() {
        set_env_value_from_config(name, value);
    }
    Ok(())
}

// Set an env var from a config file if the env var is not already set.
fn set_env_value_from_config(name: &str, value: String) {
    if std::env::var(name).is_err() {
        std::env::set_var(name, value);
    }
}
