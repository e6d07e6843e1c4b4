//! boostctl - Daily Boost from the terminal
//!
//! Every invocation starts a fresh seeded session; only the Business
//! unlock flag persists between runs. Use `boostctl shell` to apply a
//! sequence of commands to one session.

use anyhow::{Context, Result};
use boost_common::{BoostConfig, Session};
use boostctl::cli::{Cli, Command};
use boostctl::{commands, logging, shell};
use clap::Parser;
use std::io;
use std::process::ExitCode;

fn load_config(cli: &Cli) -> Result<BoostConfig> {
    match &cli.config {
        Some(path) => BoostConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => BoostConfig::load().context("Failed to load config"),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    logging::init(&config.log.level);

    let mut session = Session::from_config(config).context("Failed to start session")?;
    let mut rng = rand::thread_rng();

    match cli.command {
        Command::Shell => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            shell::run(&mut session, stdin.lock(), &mut stdout, &mut rng)
        }
        command => {
            let text = commands::execute(&mut session, command, &mut rng)?;
            println!("{}", text);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", shell::describe_error(&e));
            ExitCode::FAILURE
        }
    }
}
