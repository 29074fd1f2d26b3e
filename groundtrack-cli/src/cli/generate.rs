// generate opmode
use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use groundtrack::prelude::{Duration, Epoch, Timescale};

use super::{CELESTRAK_STATIONS, WORKSPACE_ENV};
use crate::Error;

fn parse_datetime(content: &str) -> Result<Epoch, String> {
    Timescale::load()
        .parse_datetime(content)
        .map_err(|e| e.to_string())
}

pub fn subcommand() -> Command {
    Command::new("generate")
        .about("Propagates satellites and generates one ground track file per satellite.")
        .arg_required_else_help(true)
        .next_help_heading("Orbits")
        .arg(
            Arg::new("satellite-file")
                .short('f')
                .long("satellite-file")
                .value_name("PATH|URL")
                .action(ArgAction::Set)
                .default_value(CELESTRAK_STATIONS)
                .help("TLE source: local file (possibly gzip compressed) or http(s) URL."),
        )
        .arg(
            Arg::new("satellites")
                .short('v')
                .long("satellites")
                .value_name("NAME,..")
                .action(ArgAction::Set)
                .required(true)
                .help("Satellites to process, separated by comma.")
                .long_help(
                    "Satellites to process, separated by comma.
Underscores are replaced by whitespaces, so names may be given without quotes.
Example: -v ISS_(ZARYA),HST",
                ),
        )
        .next_help_heading("Time domain")
        .arg(
            Arg::new("start")
                .short('s')
                .long("start")
                .value_name("Y-m-d-H:M:S")
                .value_parser(parse_datetime)
                .action(ArgAction::Set)
                .help("First position (UTC). Defaults to now."),
        )
        .arg(
            Arg::new("end")
                .short('e')
                .long("end")
                .value_name("Y-m-d-H:M:S")
                .value_parser(parse_datetime)
                .action(ArgAction::Set)
                .help("Last position (UTC). Defaults to one day after start."),
        )
        .arg(
            Arg::new("timestep")
                .short('t')
                .long("timestep")
                .value_name("SECONDS")
                .value_parser(value_parser!(u32).range(1..))
                .default_value("1")
                .action(ArgAction::Set)
                .help("Time between two positions, in seconds."),
        )
        .next_help_heading("Production")
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIRECTORY")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Set)
                .help(format!(
                    "Output directory. Defaults to ${} if defined, ./local otherwise.",
                    WORKSPACE_ENV
                )),
        )
        .arg(
            Arg::new("gzip")
                .long("gzip")
                .action(ArgAction::SetTrue)
                .help("Gzip compress generated files."),
        )
}

/// Generation options
#[derive(Debug, Clone)]
pub struct GenerateOpts {
    pub source: String,
    pub satellites: Vec<String>,
    pub start: Epoch,
    pub end: Option<Epoch>,
    pub step: Duration,
    pub output: PathBuf,
    pub gzip: bool,
}

impl GenerateOpts {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        let satellites = matches
            .get_one::<String>("satellites")
            .ok_or(Error::MissingArgument("satellites"))?
            .split(',')
            .map(|name| name.trim().replace('_', " "))
            .filter(|name| !name.is_empty())
            .collect::<Vec<_>>();

        if satellites.is_empty() {
            return Err(Error::MissingArgument("satellites"));
        }

        let start = match matches.get_one::<Epoch>("start") {
            Some(start) => *start,
            None => Timescale::load().now()?,
        };

        let step = matches.get_one::<u32>("timestep").copied().unwrap_or(1);

        let output = match matches.get_one::<PathBuf>("output") {
            Some(output) => output.clone(),
            None => match std::env::var(WORKSPACE_ENV) {
                Ok(path) => PathBuf::from(path),
                Err(_) => PathBuf::from("local"),
            },
        };

        Ok(Self {
            source: matches
                .get_one::<String>("satellite-file")
                .cloned()
                .unwrap_or(CELESTRAK_STATIONS.to_string()),
            satellites,
            start,
            end: matches.get_one::<Epoch>("end").copied(),
            step: Duration::from_seconds(step as f64),
            output,
            gzip: matches.get_flag("gzip"),
        })
    }
}
