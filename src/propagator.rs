//! SGP4 sub-point propagation
use hifitime::Epoch;
use map_3d::{ecef2geodetic, rad2deg, Ellipsoid};
use sgp4::MinutesSinceEpoch;

use crate::{Error, GeoPosition, OrbitalElements, Timescale};

/*
 * Rotates a TEME vector into the Earth fixed frame,
 * polar motion is neglected.
 */
fn teme_to_ecef(teme: [f64; 3], sidereal_time: f64) -> (f64, f64, f64) {
    let (sin, cos) = sidereal_time.sin_cos();
    (
        cos * teme[0] + sin * teme[1],
        -sin * teme[0] + cos * teme[1],
        teme[2],
    )
}

/*
 * Wraps longitude into [-180, 180]
 */
fn wrap_longitude(longitude: f64) -> f64 {
    if (-180.0..=180.0).contains(&longitude) {
        longitude
    } else {
        (longitude + 180.0).rem_euclid(360.0) - 180.0
    }
}

/// Computes the sub-point of the satellite described by `elements` at `instant`.
/// No validity window is enforced: accuracy degrades as `instant` moves away
/// from the TLE epoch. The returned timestamp is `instant` rounded to the
/// nearest Unix second.
pub fn propagate(elements: &OrbitalElements, instant: Epoch) -> Result<GeoPosition, Error> {
    let timescale = Timescale::load();

    // UTC calendar minutes, leap seconds excluded
    let minutes = (instant.to_unix_seconds() - elements.epoch().to_unix_seconds()) / 60.0;

    let prediction = elements
        .constants()
        .propagate(MinutesSinceEpoch(minutes))
        .map_err(|e| Error::Propagation(format!("{:?}", e)))?;

    // TEME position is expressed in km
    let teme = prediction.position.map(|km| km * 1.0E3);
    let (x, y, z) = teme_to_ecef(teme, timescale.sidereal_time(instant));

    let (lat, lon, _) = ecef2geodetic(x, y, z, Ellipsoid::WGS84);

    Ok(GeoPosition::new(
        timescale.unix_seconds(instant),
        rad2deg(lat).clamp(-90.0, 90.0),
        wrap_longitude(rad2deg(lon)),
    ))
}
