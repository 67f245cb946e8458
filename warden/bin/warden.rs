#![deny(clippy::pedantic, clippy::all, clippy::nursery)]

use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use warden::{
    WardenError,
    config::{self, CONFIG_ENV},
    controller::Warden,
    session::AuthOutcome,
};
use warden_common::logging;

/// Every permitted attempt was rejected.
const EXIT_REJECTED: u8 = 1;
/// The configuration could not be located, read or parsed.
const EXIT_CONFIG: u8 = 2;
/// The configuration parsed but no session could be built from it.
const EXIT_SETUP: u8 = 3;

/// Authenticate a user against a domain's retry policy.
///
/// Exits with status 0 when the credentials were accepted, 1 when every
/// permitted attempt was rejected, 2 when the configuration could not be
/// loaded and 3 when no session could be built from it.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file (defaults to ./warden.config.ron, then
    /// /etc/warden/warden.config.ron)
    #[arg(short, long, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Domain whose retry policy applies, overriding the configured one
    #[arg(short, long)]
    domain: Option<String>,

    #[arg(short, long, env = "WARDEN_USERNAME")]
    username: String,

    #[arg(short, long, env = "WARDEN_PASSWORD", hide_env_values = true)]
    password: String,
}

fn run(args: Args) -> anyhow::Result<AuthOutcome> {
    let path = config::locate(args.config.as_deref())?;
    let mut warden = Warden::load(&path)
        .with_context(|| format!("Unable to load configuration {}", path.display()))?;

    if let Some(domain) = args.domain {
        warden = warden.with_domain(domain);
    }

    Ok(warden.run(&args.username, &args.password)?)
}

/// Exit status for a run that failed before authenticating.
fn error_status(err: &anyhow::Error) -> u8 {
    if err
        .downcast_ref::<WardenError>()
        .is_some_and(WardenError::is_config)
    {
        EXIT_CONFIG
    } else {
        EXIT_SETUP
    }
}

const fn outcome_status(outcome: AuthOutcome) -> u8 {
    if outcome.is_authenticated() {
        0
    } else {
        EXIT_REJECTED
    }
}

fn main() -> ExitCode {
    logging::init();

    let args = Args::parse();

    let status = match run(args) {
        Ok(outcome) => outcome_status(outcome),
        Err(err) => {
            eprintln!("Error: {err:?}");
            error_status(&err)
        }
    };

    ExitCode::from(status)
}
