//! Command line tool to generate and replay satellite ground tracks
mod cli;
mod generation;
mod replay;

use std::path::PathBuf;

use cli::{Cli, GenerateOpts, ReplayOpts};

use env_logger::{Builder, Target};

#[macro_use]
extern crate log;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error")]
    StdioError(#[from] std::io::Error),
    #[error("groundtrack error")]
    GroundtrackError(#[from] groundtrack::Error),
    #[error("missing argument \"{0}\"")]
    MissingArgument(&'static str),
    #[error("sampling period must be strictly positive, got {0}")]
    InvalidSamplingPeriod(f64),
    #[error("no position stream found in \"{}\"", .0.display())]
    EmptyDirectory(PathBuf),
}

pub fn main() -> Result<(), Error> {
    let mut builder = Builder::from_default_env();
    builder
        .target(Target::Stdout)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    let cli = Cli::new();

    match cli.matches.subcommand() {
        Some(("generate", submatches)) => {
            let opts = GenerateOpts::from_matches(submatches)?;
            generation::run(&opts)
        },
        Some(("replay", submatches)) => {
            let opts = ReplayOpts::from_matches(submatches)?;
            replay::run(&opts)
        },
        _ => unreachable!("subcommand is required"),
    }
}
