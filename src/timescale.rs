//! Process wide time conversions.
//!
//! The SGP4 model expresses time as minutes since the TLE epoch and needs
//! Greenwich sidereal time to bring its TEME output into the Earth fixed
//! frame, while position streams carry Unix timestamps. [Timescale]
//! gathers these conversions behind one read-only object, initialized
//! on first use and shared by the whole process.
use hifitime::{Epoch, Unit};
use lazy_static::lazy_static;
use sgp4::chrono::NaiveDateTime;
use std::str::FromStr;

use crate::Error;

/// Julian year, in seconds
const SECONDS_PER_JULIAN_YEAR: f64 = 365.25 * 86400.0;

lazy_static! {
    static ref TIMESCALE: Timescale = Timescale::new();
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timescale {
    /// J2000 reference (2000-01-01T12:00:00 UTC), as Unix seconds
    j2000_unix: f64,
}

impl Timescale {
    fn new() -> Self {
        Self {
            j2000_unix: Epoch::from_gregorian_utc_hms(2000, 1, 1, 12, 0, 0).to_unix_seconds(),
        }
    }

    /// Returns the shared [Timescale].
    pub fn load() -> &'static Self {
        &TIMESCALE
    }

    /// Builds the [Epoch] matching given Unix timestamp.
    pub fn epoch(&self, unix_seconds: i64) -> Epoch {
        Epoch::from_unix_seconds(unix_seconds as f64)
    }

    /// Returns given [Epoch] as a Unix timestamp, rounded to the nearest second.
    pub fn unix_seconds(&self, epoch: Epoch) -> i64 {
        epoch.to_unix_seconds().round() as i64
    }

    /// Converts a calendar datetime, as found in the SGP4 elements, to [Epoch].
    pub fn from_datetime(&self, datetime: &NaiveDateTime) -> Epoch {
        let utc = datetime.and_utc();
        let seconds = utc.timestamp() as f64;
        let nanos = utc.timestamp_subsec_nanos() as f64;
        Epoch::from_unix_seconds(seconds) + nanos * Unit::Nanosecond
    }

    /// Julian years elapsed since J2000, counted on the UTC calendar
    /// (leap seconds excluded), like [sgp4::julian_years_since_j2000]
    /// does for calendar datetimes.
    pub fn julian_years_since_j2000(&self, epoch: Epoch) -> f64 {
        (epoch.to_unix_seconds() - self.j2000_unix) / SECONDS_PER_JULIAN_YEAR
    }

    /// Greenwich mean sidereal time (IAU 1982), in radians.
    pub fn sidereal_time(&self, epoch: Epoch) -> f64 {
        sgp4::iau_epoch_to_sidereal_time(self.julian_years_since_j2000(epoch))
    }

    /// Current system time.
    pub fn now(&self) -> Result<Epoch, Error> {
        Ok(Epoch::now()?)
    }

    /// Parses a `Y-m-d-H:M:S` UTC datetime description, for example
    /// `2023-07-06-12:30:00`.
    pub fn parse_datetime(&self, content: &str) -> Result<Epoch, Error> {
        let content = content.trim();
        // the date / time separator is the third dash
        let offset = content
            .match_indices('-')
            .nth(2)
            .map(|(offset, _)| offset)
            .ok_or(Error::DatetimeFormat(content.to_string()))?;

        let (date, time) = (&content[..offset], &content[offset + 1..]);
        if date.is_empty() || time.is_empty() {
            return Err(Error::DatetimeFormat(content.to_string()));
        }

        Epoch::from_str(&format!("{}T{} UTC", date, time))
            .or(Err(Error::DatetimeFormat(content.to_string())))
    }
}
