//! switchboard demonstration console.
//!
//! Shows the full pipeline: argv is captured once at the entry point,
//! tokenized into a parameter store with the configured switch prefixes,
//! bound onto typed options and dispatched to the first matching command.
//! The dispatcher's exit code becomes the process exit code.

use std::env;
use std::process;

use anyhow::Result;
use colored::Colorize;

use switchboard_core::prelude::*;

mod commands;
mod config;

use config::CliConfig;

const USAGE: &str = "\
Usage:
  switchboard -name <NAME> [-greeting <WORD>] [-repeat <N>] [--shout]
  switchboard --echo [--upper] [PARAMETERS]...

Switch prefixes default to '-', '--' and '/' and can be changed in
~/.switchboard/config.toml.";

fn main() {
    // The process arguments are captured exactly once, here, and passed
    // down explicitly.
    let args: Vec<String> = env::args().skip(1).collect();

    match run(&args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            process::exit(ExitCode::GeneralError.into());
        }
    }
}

fn run(args: &[String]) -> Result<i32> {
    let config = CliConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter.as_str())
        .init();

    if args.is_empty() {
        println!("{}", USAGE);
        return Ok(ExitCode::Success.into());
    }

    let params = Parameters::from_args(args).with_switches(config.switches.clone());
    tracing::debug!(tokens = params.len(), "parsed command line");

    let mut dispatcher = Dispatcher::new();
    commands::register_all(&mut dispatcher, &params);

    let code = dispatcher.run(&params);

    if code == i32::from(ExitCode::GeneralError) {
        eprintln!("{}", "No command matched the given parameters.".yellow());
        eprintln!("{}", USAGE);
    }

    Ok(code)
}
