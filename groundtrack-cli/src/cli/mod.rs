use clap::{ArgMatches, ColorChoice, Command};

mod generate;
mod replay;

pub use generate::GenerateOpts;
pub use replay::ReplayOpts;

/// Default TLE source
pub const CELESTRAK_STATIONS: &str = "https://celestrak.org/NORAD/elements/stations.txt";

/// Environment variable that overrides the default output directory
pub const WORKSPACE_ENV: &str = "GROUNDTRACK_WORKSPACE";

pub struct Cli {
    /// Arguments passed by user
    pub matches: ArgMatches,
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}

impl Cli {
    fn command() -> Command {
        Command::new("groundtrack-cli")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Satellite ground track generation & replay")
            .long_about(
                "groundtrack-cli propagates satellites from their Two-Line Elements
and generates one ground track (position stream) per satellite.
Position streams are then replayed in real time, projected to
normalized map coordinates, with optional proximity alerts.",
            )
            .arg_required_else_help(true)
            .color(ColorChoice::Always)
            .subcommand_required(true)
            .subcommand(generate::subcommand())
            .subcommand(replay::subcommand())
    }

    /// Build new command line interface
    pub fn new() -> Self {
        Self {
            matches: Self::command().get_matches(),
        }
    }
}

/// Parses a `LATxLON` coordinates pair, in decimal degrees.
/// `n` may be used in place of the minus sign, so negative
/// values do not look like command line options.
pub fn parse_coordinates(content: &str) -> Result<(f64, f64), String> {
    let content = content.trim().replace('n', "-");
    let (lat, lon) = content
        .split_once('x')
        .ok_or(format!("invalid coordinates \"{}\", expecting LATxLON", content))?;
    let lat = lat
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid latitude \"{}\"", lat))?;
    let lon = lon
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid longitude \"{}\"", lon))?;
    if !(-90.0..=90.0).contains(&lat) {
        return Err(format!("latitude {} out of range", lat));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(format!("longitude {} out of range", lon));
    }
    Ok((lat, lon))
}
