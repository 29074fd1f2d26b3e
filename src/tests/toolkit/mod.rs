//! Shared fixtures & helpers for integrated tests
mod stream;

pub use stream::{temp_dir, write_stream};

/// ISS (ZARYA) first element line, July 2020
pub const ISS_LINE1: &str =
    "1 25544U 98067A   20194.88612269 -.00002218  00000-0 -31515-4 0  9992";

/// ISS (ZARYA) second element line, July 2020
pub const ISS_LINE2: &str =
    "2 25544  51.6461 221.2784 0001413  89.1723 280.4612 15.49507896236008";

/// ISS (ZARYA) as 3LE
pub const ISS_TLE: &str = "ISS (ZARYA)
1 25544U 98067A   20194.88612269 -.00002218  00000-0 -31515-4 0  9992
2 25544  51.6461 221.2784 0001413  89.1723 280.4612 15.49507896236008";

/// Hubble Space Telescope as 3LE, December 2019
pub const HST_TLE: &str = "HST
1 20580U 90037B   19342.88042116  .00000361  00000-0  11007-4 0  9996
2 20580  28.4682 146.6676 0002639 185.9222 322.7238 15.09309432427086";

/// Mixed bundle: two titled entries followed by an anonymous one
pub const STATIONS: &str = "ISS (ZARYA)
1 25544U 98067A   20194.88612269 -.00002218  00000-0 -31515-4 0  9992
2 25544  51.6461 221.2784 0001413  89.1723 280.4612 15.49507896236008

0 HST
1 20580U 90037B   19342.88042116  .00000361  00000-0  11007-4 0  9996
2 20580  28.4682 146.6676 0002639 185.9222 322.7238 15.09309432427086
1 25544U 98067A   20194.88612269 -.00002218  00000-0 -31515-4 0  9992
2 25544  51.6461 221.2784 0001413  89.1723 280.4612 15.49507896236008
";

/// ISS TLE epoch, rounded to the next Unix second
pub const ISS_EPOCH_UNIX: i64 = 1_594_588_562;

/// Builds a position stream with one record per timestamp,
/// coordinates derived from the timestamp.
pub fn linear_stream(timestamps: std::ops::RangeInclusive<i64>) -> String {
    timestamps
        .map(|t| format!("{};{};{}\n", t, (t % 180) as f64 / 2.0, (t % 360) as f64 - 180.0))
        .collect()
}
