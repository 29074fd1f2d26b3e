//! Map projections, from geographic to normalized display coordinates
use std::f64::consts::PI;

use crate::{GeoPosition, ParsingError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Web-Mercator latitude bound, in decimal degrees.
/// The projected map is square within these bounds.
pub const MERCATOR_MAX_LATITUDE: f64 = 85.051129;

/// Supported projections
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Projection {
    /// Plate carrée: longitude and latitude map linearly
    #[default]
    Equirectangular,
    /// Spherical (Web) Mercator
    WebMercator,
}

impl std::str::FromStr for Projection {
    type Err = ParsingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "equirectangular" | "plate-carree" | "eqc" => Ok(Self::Equirectangular),
            "mercator" | "web-mercator" | "webmercator" => Ok(Self::WebMercator),
            _ => Err(ParsingError::UnknownProjection(s.to_string())),
        }
    }
}

impl std::fmt::Display for Projection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Equirectangular => write!(f, "equirectangular"),
            Self::WebMercator => write!(f, "mercator"),
        }
    }
}

/// [ProjectionParams] fully describe one projection
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProjectionParams {
    /// Projection kind
    pub projection: Projection,
    /// Latitudes are clamped to +/- this bound (decimal degrees)
    pub max_latitude: f64,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self::equirectangular()
    }
}

impl From<Projection> for ProjectionParams {
    fn from(projection: Projection) -> Self {
        match projection {
            Projection::Equirectangular => Self::equirectangular(),
            Projection::WebMercator => Self::web_mercator(),
        }
    }
}

impl ProjectionParams {
    /// Custom latitude bound, which should lie within ]0, 90]
    /// (and below 90 for Web-Mercator).
    pub fn new(projection: Projection, max_latitude: f64) -> Self {
        Self {
            projection,
            max_latitude,
        }
    }
    pub fn equirectangular() -> Self {
        Self::new(Projection::Equirectangular, 90.0)
    }
    pub fn web_mercator() -> Self {
        Self::new(Projection::WebMercator, MERCATOR_MAX_LATITUDE)
    }
    /// Projects given coordinates to normalized (x, y) within [0, 1]².
    /// (0, 0) is the top left (north west) corner.
    pub fn project(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        let longitude = longitude.clamp(-180.0, 180.0);
        let latitude = latitude.clamp(-self.max_latitude, self.max_latitude);

        let x = (longitude + 180.0) / 360.0;
        let y = match self.projection {
            Projection::Equirectangular => (90.0 - latitude) / 180.0,
            Projection::WebMercator => {
                let phi = latitude.to_radians();
                (1.0 - (phi.tan() + 1.0 / phi.cos()).ln() / PI) / 2.0
            },
        };

        (x.clamp(0.0, 1.0), y.clamp(0.0, 1.0))
    }
}

/// Projects a [GeoPosition] to normalized display coordinates
pub fn project(position: &GeoPosition, params: &ProjectionParams) -> (f64, f64) {
    params.project(position.latitude, position.longitude)
}

/// Web-Mercator projection, with standard latitude bound
pub fn mercator_project(longitude: f64, latitude: f64) -> (f64, f64) {
    ProjectionParams::web_mercator().project(latitude, longitude)
}

/// Equirectangular projection
pub fn equirectangular_project(longitude: f64, latitude: f64) -> (f64, f64) {
    ProjectionParams::equirectangular().project(latitude, longitude)
}
