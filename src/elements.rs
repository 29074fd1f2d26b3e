//! Two-Line Element sets
use hifitime::Epoch;
use itertools::Itertools;
use sgp4::{Constants, Elements};
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

#[cfg(feature = "log")]
use log::debug;

use crate::{reader::BufferedReader, Error, Timescale};

/// [OrbitalElements] describe one satellite orbit at its reference epoch.
/// They are built once from TLE text and then only read.
pub struct OrbitalElements {
    name: Option<String>,
    norad_id: u64,
    epoch: Epoch,
    constants: Constants,
}

impl std::fmt::Debug for OrbitalElements {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("OrbitalElements")
            .field("name", &self.name)
            .field("norad_id", &self.norad_id)
            .field("epoch", &self.epoch)
            .finish()
    }
}

impl OrbitalElements {
    /// Builds [OrbitalElements] from the two element lines and an optional name.
    /// Line length, field layout and checksums are verified.
    pub fn from_tle(name: Option<&str>, line1: &str, line2: &str) -> Result<Self, Error> {
        let name = name.map(|name| name.trim()).filter(|name| !name.is_empty());
        let elements = Elements::from_tle(
            name.map(String::from),
            line1.trim_end().as_bytes(),
            line2.trim_end().as_bytes(),
        )
        .map_err(|e| Error::InvalidElements(format!("{:?}", e)))?;
        Self::from_elements(elements)
    }

    fn from_elements(elements: Elements) -> Result<Self, Error> {
        let constants = Constants::from_elements(&elements)
            .map_err(|e| Error::InvalidElements(format!("{:?}", e)))?;
        Ok(Self {
            epoch: Timescale::load().from_datetime(&elements.datetime),
            norad_id: elements.norad_id,
            name: elements.object_name,
            constants,
        })
    }

    /// Satellite name, when the TLE had a title line
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// NORAD catalog number
    pub fn norad_id(&self) -> u64 {
        self.norad_id
    }

    /// Reference [Epoch] of these elements
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Name if known, catalog number otherwise
    pub fn designation(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.norad_id.to_string(),
        }
    }

    pub(crate) fn constants(&self) -> &Constants {
        &self.constants
    }
}

fn is_line1(content: &str) -> bool {
    content.starts_with("1 ")
}

fn is_line2(content: &str) -> bool {
    content.starts_with("2 ")
}

/// Strips the optional "0 " prefix of 3LE title lines
fn title(content: &str) -> &str {
    content.strip_prefix("0 ").unwrap_or(content).trim()
}

/// Parses a single element set: two element lines, possibly preceded by a title line.
impl FromStr for OrbitalElements {
    type Err = Error;
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let lines = content
            .lines()
            .map(|line| line.trim_end())
            .filter(|line| !line.trim().is_empty())
            .collect::<Vec<_>>();
        match lines.as_slice() {
            [line1, line2] => Self::from_tle(None, line1, line2),
            [name, line1, line2] => Self::from_tle(Some(title(name)), line1, line2),
            _ => Err(Error::InvalidElements(format!(
                "expecting 2 or 3 lines, got {}",
                lines.len()
            ))),
        }
    }
}

/// [TleSet] is a bundle of [OrbitalElements], as distributed by
/// catalogs like Celestrak, with or without title lines.
#[derive(Debug, Default)]
pub struct TleSet {
    entries: Vec<OrbitalElements>,
}

impl TleSet {
    /// Parses a TLE bundle from a local file, with possible
    /// seamless .gz decompression (requires the "flate2" feature).
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let mut reader = BufferedReader::new(path)?;
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_str(&content)
    }

    /// Downloads and parses a TLE bundle.
    #[cfg(feature = "fetch")]
    #[cfg_attr(docsrs, doc(cfg(feature = "fetch")))]
    pub fn from_url(url: &str) -> Result<Self, Error> {
        #[cfg(feature = "log")]
        debug!("fetching \"{}\"", url);
        let content = ureq::get(url)
            .call()
            .map_err(|e| Error::Fetch(format!("{}: {}", url, e)))?
            .into_string()?;
        Self::from_str(&content)
    }

    /// Loads a TLE bundle from given source: http(s) URL
    /// (requires the "fetch" feature) or local file path.
    pub fn load(source: &str) -> Result<Self, Error> {
        if source.starts_with("http://") || source.starts_with("https://") {
            #[cfg(feature = "fetch")]
            {
                Self::from_url(source)
            }
            #[cfg(not(feature = "fetch"))]
            {
                Err(Error::Io(std::io::Error::new(
                    std::io::ErrorKind::Unsupported,
                    "loading TLEs from a URL requires the fetch feature",
                )))
            }
        } else {
            Self::from_path(Path::new(source))
        }
    }

    /// Number of element sets
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if this set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all element sets, in file order
    pub fn iter(&self) -> impl Iterator<Item = &OrbitalElements> + '_ {
        self.entries.iter()
    }

    /// Returns all satellite designations, in file order
    pub fn names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.designation())
            .collect()
    }

    /// Returns the [OrbitalElements] of given satellite.
    /// Names are compared with surrounding whitespace ignored,
    /// unnamed entries are identified by their catalog number.
    pub fn get(&self, name: &str) -> Result<&OrbitalElements, Error> {
        let name = name.trim();
        self.entries
            .iter()
            .find(|entry| entry.designation() == name)
            .ok_or(Error::UnknownSatellite(name.to_string()))
    }

    /// Resolves every requested satellite, failing on the first unknown name.
    pub fn select<'a, S: AsRef<str>>(
        &'a self,
        names: &'a [S],
    ) -> Result<Vec<(&'a str, &'a OrbitalElements)>, Error> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref().trim();
                self.get(name).map(|elements| (name, elements))
            })
            .collect()
    }
}

impl FromStr for TleSet {
    type Err = Error;
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let lines = content
            .lines()
            .map(|line| line.trim_end())
            .filter(|line| !line.trim().is_empty())
            .collect::<Vec<_>>();

        let mut entries = Vec::new();
        let mut ptr = 0;

        while ptr < lines.len() {
            if is_line1(lines[ptr]) && ptr + 1 < lines.len() && is_line2(lines[ptr + 1]) {
                entries.push(OrbitalElements::from_tle(
                    None,
                    lines[ptr],
                    lines[ptr + 1],
                )?);
                ptr += 2;
            } else if ptr + 2 < lines.len() {
                entries.push(OrbitalElements::from_tle(
                    Some(title(lines[ptr])),
                    lines[ptr + 1],
                    lines[ptr + 2],
                )?);
                ptr += 3;
            } else {
                return Err(Error::InvalidElements(format!(
                    "truncated element set \"{}\"",
                    lines[ptr..].iter().join(" | ")
                )));
            }
        }

        #[cfg(feature = "log")]
        debug!("parsed {} element sets", entries.len());

        Ok(Self { entries })
    }
}
