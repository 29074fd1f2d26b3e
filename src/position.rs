//! Geographic sub-point & position stream records
use crate::ParsingError;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean Earth radius (IUGG), in kilometers
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0088;

/// Position stream field separator
pub(crate) const FIELD_SEPARATOR: char = ';';

/// [GeoPosition] is the sub-point of a satellite at a given instant.
#[derive(Default, Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPosition {
    /// Unix timestamp, in seconds
    pub timestamp: i64,
    /// Latitude in decimal degrees, within [-90, 90]
    pub latitude: f64,
    /// Longitude in decimal degrees, within [-180, 180]
    pub longitude: f64,
}

impl GeoPosition {
    /// Builds a new [GeoPosition]
    pub fn new(timestamp: i64, latitude: f64, longitude: f64) -> Self {
        Self {
            timestamp,
            latitude,
            longitude,
        }
    }

    /// Great circle distance (haversine) to given coordinates, in kilometers.
    pub fn distance_km(&self, latitude: f64, longitude: f64) -> f64 {
        let (phi1, phi2) = (self.latitude.to_radians(), latitude.to_radians());
        let dphi = phi2 - phi1;
        let dlambda = (longitude - self.longitude).to_radians();
        let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
        2.0 * EARTH_MEAN_RADIUS_KM * a.sqrt().min(1.0).asin()
    }
}

/// Formats one position stream record, without line termination.
/// Floating point values use the shortest representation that parses
/// back to the very same value.
impl std::fmt::Display for GeoPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.timestamp, FIELD_SEPARATOR, self.latitude, FIELD_SEPARATOR, self.longitude
        )
    }
}

/// Parses one `timestamp;latitude;longitude` position stream record.
/// Surrounding whitespace (line termination included) is tolerated.
impl FromStr for GeoPosition {
    type Err = ParsingError;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut fields = line.trim().split(FIELD_SEPARATOR);

        let (timestamp, latitude, longitude) = match (fields.next(), fields.next(), fields.next())
        {
            (Some(t), Some(lat), Some(lon)) => (t.trim(), lat.trim(), lon.trim()),
            _ => return Err(ParsingError::MissingField(line.trim().to_string())),
        };

        if fields.next().is_some() {
            return Err(ParsingError::TooManyFields(line.trim().to_string()));
        }

        let timestamp =
            i64::from_str(timestamp).or(Err(ParsingError::Timestamp(timestamp.to_string())))?;

        let lat = f64::from_str(latitude).or(Err(ParsingError::Latitude(latitude.to_string())))?;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ParsingError::Latitude(latitude.to_string()));
        }

        let lon =
            f64::from_str(longitude).or(Err(ParsingError::Longitude(longitude.to_string())))?;
        if !(-180.0..=180.0).contains(&lon) {
            return Err(ParsingError::Longitude(longitude.to_string()));
        }

        Ok(Self::new(timestamp, lat, lon))
    }
}
