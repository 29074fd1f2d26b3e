//! Satellite ground track generation, replay and map projection.
//!
//! The crate is organized as a small pipeline:
//!
//! - [OrbitalElements] are parsed from Two-Line Element (TLE) text and
//!   [propagate]d to geographic sub-points ([GeoPosition]),
//! - [generate] drives the propagator over a [TimeDomain] and streams
//!   `timestamp;latitude;longitude` records to any [std::io::Write]r,
//! - [TraceReader] replays such a stream one record at a time, tolerating
//!   malformed lines, and [ReplaySet] handles a whole directory of streams,
//! - [ProjectionParams] maps geographic coordinates to normalized
//!   display coordinates.
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(test)]
mod tests;

mod domain;
mod elements;
mod generator;
mod position;
mod projection;
mod propagator;
mod reader;
mod replay;
mod replay_set;
mod timescale;
mod writer;

use thiserror::Error;

pub use domain::TimeDomain;
pub use elements::{OrbitalElements, TleSet};
pub use generator::{generate, satellite_name, trace_file_name};
pub use position::{GeoPosition, EARTH_MEAN_RADIUS_KM};
pub use projection::{
    equirectangular_project, mercator_project, project, Projection, ProjectionParams,
    MERCATOR_MAX_LATITUDE,
};
pub use propagator::propagate;
pub use reader::BufferedReader;
pub use replay::{ParseOutcome, TraceReader};
pub use replay_set::ReplaySet;
pub use timescale::Timescale;
pub use writer::{create_trace_file, BufferedWriter};

pub mod prelude {
    pub use crate::{
        generate, project, propagate, Error, GeoPosition, OrbitalElements, ParseOutcome,
        ParsingError, Projection, ProjectionParams, ReplaySet, TimeDomain, Timescale, TleSet,
        TraceReader,
    };
    // Pub re-export
    pub use hifitime::{Duration, Epoch, TimeScale, Unit};
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid orbital elements: {0}")]
    InvalidElements(String),
    #[error("propagation failure: {0}")]
    Propagation(String),
    #[error("unknown satellite \"{0}\"")]
    UnknownSatellite(String),
    #[error("several position streams for satellite \"{0}\"")]
    DuplicateSatellite(String),
    #[error("time step must be strictly positive")]
    InvalidTimeStep,
    #[error("invalid datetime \"{0}\", expecting Y-m-d-H:M:S")]
    DatetimeFormat(String),
    #[error("hifitime error")]
    Datetime(#[from] hifitime::HifitimeError),
    #[error("file i/o error")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "fetch")]
    #[error("failed to fetch \"{0}\"")]
    Fetch(String),
}

/// Errors raised while interpreting a single position stream record.
/// [TraceReader] swallows them (the previous position is kept),
/// they only surface through [GeoPosition]'s [std::str::FromStr].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParsingError {
    #[error("missing field(s) in \"{0}\"")]
    MissingField(String),
    #[error("too many fields in \"{0}\"")]
    TooManyFields(String),
    #[error("failed to parse timestamp from \"{0}\"")]
    Timestamp(String),
    #[error("failed to parse latitude from \"{0}\"")]
    Latitude(String),
    #[error("failed to parse longitude from \"{0}\"")]
    Longitude(String),
    #[error("unknown projection \"{0}\"")]
    UnknownProjection(String),
}
