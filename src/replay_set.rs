//! Multi satellite replay
use hifitime::Duration;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

#[cfg(feature = "log")]
use log::{debug, info, warn};

use crate::{generator::satellite_name, BufferedReader, Error, GeoPosition, TraceReader};

/// [ReplaySet] replays a collection of position streams side by side,
/// one [TraceReader] per satellite, indexed by satellite name.
/// Streams only move forward when polled through [ReplaySet::update].
#[derive(Debug)]
pub struct ReplaySet<R: BufRead = BufferedReader> {
    readers: BTreeMap<String, TraceReader<R>>,
    sampling_period: Duration,
    elapsed: Duration,
}

impl ReplaySet<BufferedReader> {
    /// Opens one [TraceReader] per regular file found in `directory`.
    /// Satellite names are deduced from file names, see [satellite_name].
    pub fn from_directory(directory: &Path, sampling_period: Duration) -> Result<Self, Error> {
        let mut set = Self::new(sampling_period);
        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let file_name = entry.file_name();
            let name = satellite_name(&file_name.to_string_lossy());

            // directory order is arbitrary: no stream may shadow another one
            if set.readers.contains_key(&name) {
                return Err(Error::DuplicateSatellite(name));
            }

            #[cfg(feature = "log")]
            info!("{}: replaying \"{}\"", name, path.display());

            set.insert(&name, TraceReader::from_path(&path)?);
        }
        Ok(set)
    }
}

impl<R: BufRead> ReplaySet<R> {
    /// Builds an empty [ReplaySet], that moves forward
    /// every `sampling_period`.
    pub fn new(sampling_period: Duration) -> Self {
        Self {
            readers: BTreeMap::new(),
            sampling_period,
            elapsed: Duration::ZERO,
        }
    }

    /// Adds the stream of satellite `name`. Returns the stream it
    /// replaces, if this satellite was already known.
    pub fn insert(&mut self, name: &str, reader: TraceReader<R>) -> Option<TraceReader<R>> {
        let previous = self.readers.insert(name.to_string(), reader);

        if previous.is_some() {
            #[cfg(feature = "log")]
            warn!("{}: replacing previous stream", name);
        }

        previous
    }

    /// Number of satellites
    pub fn len(&self) -> usize {
        self.readers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readers.is_empty()
    }

    /// Sampling period
    pub fn sampling_period(&self) -> Duration {
        self.sampling_period
    }

    /// Satellite names, in alphabetical order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.readers.keys().map(|name| name.as_str())
    }

    /// Advances every stream by one record
    pub fn update_positions(&mut self) {
        for reader in self.readers.values_mut() {
            let _ = reader.next();
        }
    }

    /// Accumulates `dt` and advances every stream once the sampling period
    /// is reached, in which case the accumulator is reset.
    /// Returns true when the streams did advance.
    pub fn update(&mut self, dt: Duration) -> bool {
        self.elapsed += dt;
        if self.elapsed < self.sampling_period {
            return false;
        }
        self.update_positions();
        self.elapsed = Duration::ZERO;
        true
    }

    /// Synchronizes every stream on `target` (Unix seconds), independently.
    /// Returns the number of records skipped, per satellite.
    pub fn align(&mut self, target: i64) -> BTreeMap<String, usize> {
        self.readers
            .iter_mut()
            .map(|(name, reader)| {
                let skipped = reader.skip_to(target);
                #[cfg(feature = "log")]
                debug!("{}: skipped {} records", name, skipped);
                (name.clone(), skipped)
            })
            .collect()
    }

    /// Current position of every satellite that has one
    pub fn positions(&self) -> BTreeMap<&str, GeoPosition> {
        self.readers
            .iter()
            .filter_map(|(name, reader)| reader.current().map(|pos| (name.as_str(), pos)))
            .collect()
    }

    /// Names of satellites whose current sub-point lies within
    /// `distance_km` (great circle) of given coordinates.
    pub fn in_range(&self, latitude: f64, longitude: f64, distance_km: f64) -> Vec<&str> {
        self.readers
            .iter()
            .filter_map(|(name, reader)| {
                let position = reader.current()?;
                if position.distance_km(latitude, longitude) <= distance_km {
                    Some(name.as_str())
                } else {
                    None
                }
            })
            .collect()
    }

    /// True once every stream is exhausted
    pub fn is_exhausted(&self) -> bool {
        self.readers.values().all(|reader| reader.is_exhausted())
    }

    /// Closes every stream
    pub fn close(&mut self) {
        for reader in self.readers.values_mut() {
            reader.close();
        }
    }
}
