// replay opmode
use std::path::PathBuf;
use std::str::FromStr;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use groundtrack::prelude::{Duration, Projection, Timescale};

use super::parse_coordinates;
use crate::Error;

fn parse_projection(content: &str) -> Result<Projection, String> {
    Projection::from_str(content).map_err(|e| e.to_string())
}

pub fn subcommand() -> Command {
    Command::new("replay")
        .about("Replays previously generated ground tracks, in real time.")
        .arg_required_else_help(true)
        .next_help_heading("Data")
        .arg(
            Arg::new("directory")
                .short('d')
                .long("directory")
                .value_name("DIRECTORY")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Set)
                .required(true)
                .help("Directory containing one ground track file per satellite."),
        )
        .next_help_heading("Timing")
        .arg(
            Arg::new("sampling-period")
                .long("sampling-period")
                .value_name("SECONDS")
                .value_parser(value_parser!(f64))
                .default_value("1")
                .action(ArgAction::Set)
                .help("Time between two successive positions, in seconds."),
        )
        .arg(
            Arg::new("initial-timestamp")
                .long("initial-timestamp")
                .value_name("UNIX")
                .value_parser(value_parser!(i64))
                .action(ArgAction::Set)
                .help("Replay starting point, as Unix timestamp. Defaults to now."),
        )
        .arg(
            Arg::new("disable-timestamp-adjustment")
                .long("disable-timestamp-adjustment")
                .action(ArgAction::SetTrue)
                .help("Replay from the very first positions, whatever their timestamp."),
        )
        .arg(
            Arg::new("max-ticks")
                .long("max-ticks")
                .value_name("N")
                .value_parser(value_parser!(u64))
                .action(ArgAction::Set)
                .help("Stop after N sampling periods."),
        )
        .next_help_heading("Display")
        .arg(
            Arg::new("projection")
                .short('p')
                .long("projection")
                .value_name("PROJECTION")
                .value_parser(parse_projection)
                .default_value("equirectangular")
                .action(ArgAction::Set)
                .help("Map projection: equirectangular or mercator."),
        )
        .arg(
            Arg::new("device-location")
                .long("device-location")
                .value_name("LATxLON")
                .value_parser(parse_coordinates)
                .action(ArgAction::Set)
                .help("Observer location, in decimal degrees. Use 'n' as minus sign.")
                .long_help(
                    "Observer location, in decimal degrees. Use 'n' as minus sign.
A warning is emitted whenever a satellite gets closer than --alert-distance.
Example: --device-location n33.9x18.4",
                ),
        )
        .arg(
            Arg::new("alert-distance")
                .long("alert-distance")
                .value_name("KM")
                .value_parser(value_parser!(f64))
                .default_value("1000")
                .action(ArgAction::Set)
                .help("Proximity alert distance, in kilometers."),
        )
}

/// Replay options
#[derive(Debug, Clone)]
pub struct ReplayOpts {
    pub directory: PathBuf,
    pub sampling_period: Duration,
    pub initial_timestamp: Option<i64>,
    pub timestamp_adjustment: bool,
    pub projection: Projection,
    pub device_location: Option<(f64, f64)>,
    pub alert_distance_km: f64,
    pub max_ticks: Option<u64>,
}

impl ReplayOpts {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        let directory = matches
            .get_one::<PathBuf>("directory")
            .cloned()
            .ok_or(Error::MissingArgument("directory"))?;

        let period = matches
            .get_one::<f64>("sampling-period")
            .copied()
            .unwrap_or(1.0);
        if period <= 0.0 {
            return Err(Error::InvalidSamplingPeriod(period));
        }

        Ok(Self {
            directory,
            sampling_period: Duration::from_seconds(period),
            initial_timestamp: matches.get_one::<i64>("initial-timestamp").copied(),
            timestamp_adjustment: !matches.get_flag("disable-timestamp-adjustment"),
            projection: matches
                .get_one::<Projection>("projection")
                .copied()
                .unwrap_or_default(),
            device_location: matches.get_one::<(f64, f64)>("device-location").copied(),
            alert_distance_km: matches
                .get_one::<f64>("alert-distance")
                .copied()
                .unwrap_or(1000.0),
            max_ticks: matches.get_one::<u64>("max-ticks").copied(),
        })
    }

    /// Replay starting point
    pub fn initial_timestamp(&self) -> Result<i64, Error> {
        match self.initial_timestamp {
            Some(t) => Ok(t),
            None => {
                let ts = Timescale::load();
                Ok(ts.unix_seconds(ts.now()?))
            },
        }
    }
}
