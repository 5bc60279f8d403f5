//! A binary which takes an image and turns it into a 9-patch image.

use std::env;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use ninepatchify::cli::{Args, Config};

fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(args: Args) -> anyhow::Result<Config> {
    let config = Config::from_args(args)?;
    init_logging(config.verbose);
    ninepatchify::convert(&config)
        .with_context(|| format!("failed to convert {}", config.input.display()))?;
    Ok(config)
}

fn main() -> ExitCode {
    // colored checks whether stdout is a terminal, but errors go to stderr.
    if env::var_os("NO_COLOR").is_none() && env::var_os("CLICOLOR_FORCE").is_none() {
        colored::control::set_override(io::stderr().is_terminal());
    }

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            return match err.kind() {
                // clap would print these to stdout.
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    eprint!("{err}");
                    ExitCode::SUCCESS
                }
                _ => {
                    // Nowhere left to report it if stderr is gone.
                    let _ = err.print();
                    ExitCode::FAILURE
                }
            };
        }
    };

    match run(args) {
        Ok(config) => {
            println!("{}", config.output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            if err
                .downcast_ref::<ninepatchify::Error>()
                .is_some_and(ninepatchify::Error::wants_usage)
            {
                eprintln!("\n{}", Args::command().render_usage());
            }
            ExitCode::FAILURE
        }
    }
}
