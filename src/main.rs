use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod domain;
mod engine;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::models::*;
pub use engine::{normalize, SpinEngine, SpinError};
pub use services::animator::{Animator, CancelToken, RunResult};
pub use services::config::{load_config, redacted, ConfigFile};
pub use services::message::{generator_for, MessageGenerator};
pub use services::output::{print_error, print_one, print_out};
pub use services::roster::{dedupe, extend_names, parse_names, RosterError};
pub use services::storage::{
    audit, clock_time, load_state, now_ms, read_names_text, record_winner, save_state, spin_lock,
    write_names, NamesSource,
};
pub use services::wheel::{layout, TextRenderer};

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            print_error(cli.json, error_code(&e), &format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let cfg = load_config()?;
    let mut state = load_state()?;

    if handle_draw_commands(cli, &cfg, &mut state)? {
        return Ok(());
    }
    if handle_roster_commands(cli, &cfg, &mut state)? {
        return Ok(());
    }
    anyhow::bail!("unhandled command")
}

fn error_code(e: &anyhow::Error) -> &'static str {
    if let Some(SpinError::TooFewSegments(_)) = e.downcast_ref::<SpinError>() {
        return "TOO_FEW_NAMES";
    }
    if let Some(RosterError::StdinReadOnly) = e.downcast_ref::<RosterError>() {
        return "STDIN_READ_ONLY";
    }
    "INTERNAL"
}
