//! # Wiresize CLI
//!
//! Reads a JSON request from a file or standard input, sizes it with
//! `wire_core`, and prints a text report or the JSON result.
//!
//! ```text
//! echo '{"standard":"NEC","load_current_a":20,"voltage_v":120,"length":75}' \
//!     | wire_cli conductor
//! ```

mod cli;
mod report;

use std::{
    fs,
    io::{self, Read},
    path::Path,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use serde::{de::DeserializeOwned, Serialize};
use tracing_subscriber::EnvFilter;
use wire_core::{
    calculate_with, size_breaker_with, size_conductor_with, size_conduit_fill_with,
    validate_input_with, CalculationRequest, CalculationResponse, DesignSettings,
};

use crate::cli::{Args, Command, InputArgs};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .compact()
        .init();
}

fn read_source(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read the request from standard input")?;
            Ok(buffer)
        }
    }
}

fn read_json<T: DeserializeOwned>(args: &InputArgs) -> Result<T> {
    let source = read_source(args.input.as_deref())?;
    serde_json::from_str(&source).context("the request is not valid JSON for this command")
}

fn load_settings(path: Option<&Path>) -> Result<DesignSettings> {
    let Some(path) = path else {
        return Ok(DesignSettings::default());
    };
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings `{}`", path.display()))?;
    serde_json::from_str(&source)
        .with_context(|| format!("failed to parse settings `{}`", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Runs the command; `Ok(false)` means the request was rejected.
fn run(args: &Args) -> Result<bool> {
    let settings = load_settings(args.settings.as_deref())?;

    let response = match &args.command {
        Command::Validate(input) => {
            let request: CalculationRequest = read_json(input)?;
            let messages = validate_input_with(&request, &settings);
            tracing::info!(kind = request.calc_type(), problems = messages.len(), "validated");
            if args.json {
                print_json(&messages)?;
            } else if messages.is_empty() {
                println!("{} request is valid", request.calc_type());
            } else {
                for message in &messages {
                    println!("- {message}");
                }
            }
            return Ok(messages.is_empty());
        }
        Command::Conductor(input) => {
            size_conductor_with(&read_json(input)?, &settings).map(CalculationResponse::Conductor)
        }
        Command::Breaker(input) => {
            size_breaker_with(&read_json(input)?, &settings).map(CalculationResponse::Breaker)
        }
        Command::Conduit(input) => {
            size_conduit_fill_with(&read_json(input)?, &settings).map(CalculationResponse::ConduitFill)
        }
        Command::Request(input) => calculate_with(&read_json(input)?, &settings),
    };

    match response {
        Ok(response) => {
            if args.json {
                // untagged payload for the single-kind commands
                match (&args.command, &response) {
                    (Command::Request(_), _) => print_json(&response)?,
                    (_, CalculationResponse::Conductor(r)) => print_json(r)?,
                    (_, CalculationResponse::Breaker(r)) => print_json(r)?,
                    (_, CalculationResponse::ConduitFill(r)) => print_json(r)?,
                }
            } else {
                print!("{}", report::response(&response));
            }
            Ok(true)
        }
        Err(error) => {
            tracing::warn!(code = error.error_code(), "request rejected");
            if args.json {
                print_json(&error)?;
            } else {
                eprintln!("error [{}]: {error}", error.error_code());
            }
            Ok(false)
        }
    }
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
