//! aliaser - Shell Alias Manager

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use aliaser::cli::{commands, Cli};
use aliaser::AliasError;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if let Err(err) = commands::execute(&cli) {
        eprintln!("{} {:#}", "✗".red(), err);
        let code = err
            .downcast_ref::<AliasError>()
            .map(AliasError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
