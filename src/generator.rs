//! Position stream generation
use std::io::Write;

#[cfg(feature = "log")]
use log::{debug, trace};

use crate::{propagate, Error, OrbitalElements, TimeDomain};

/// Position stream file name of satellite `name`:
/// whitespaces are replaced by underscores, with `.txt` suffix.
/// Path separators (as in rocket body names like `SL-16 R/B`) become dashes.
pub fn trace_file_name(name: &str) -> String {
    let name = name
        .trim()
        .replace(' ', "_")
        .replace(['/', '\\'], "-");
    format!("{}.txt", name)
}

/// Satellite name recovered from a position stream `file_name`
/// (reciprocal of [trace_file_name]). Compression suffixes are dropped.
pub fn satellite_name(file_name: &str) -> String {
    let stem = file_name.split('.').next().unwrap_or(file_name);
    stem.replace('_', " ")
}

/// Propagates `elements` over the whole `domain` and streams one
/// `timestamp;latitude;longitude` record per [hifitime::Epoch] into `sink`.
/// `domain` is rewound first, so the same domain may be reused
/// across satellites. Returns the number of records written.
pub fn generate<W: Write>(
    elements: &OrbitalElements,
    domain: &mut TimeDomain,
    sink: &mut W,
) -> Result<usize, Error> {
    domain.reset();

    #[cfg(feature = "log")]
    debug!(
        "{}: generating {} positions ({} - {})",
        elements.designation(),
        domain.len(),
        domain.start(),
        domain.end()
    );

    let mut count = 0;
    for instant in domain.by_ref() {
        let position = propagate(elements, instant)?;

        #[cfg(feature = "log")]
        trace!("{}: {}", elements.designation(), position);

        writeln!(sink, "{}", position)?;
        count += 1;
    }

    sink.flush()?;
    Ok(count)
}

#[cfg(test)]
mod test {
    use super::{generate, satellite_name, trace_file_name};
    use crate::tests::toolkit::{ISS_EPOCH_UNIX, ISS_TLE};
    use crate::{propagate, GeoPosition, OrbitalElements, TimeDomain, Timescale};
    use hifitime::Duration;
    use std::str::FromStr;

    #[test]
    fn file_naming() {
        for (name, file_name) in [
            ("ISS (ZARYA)", "ISS_(ZARYA).txt"),
            ("HST", "HST.txt"),
            ("STARLINK 1007", "STARLINK_1007.txt"),
            ("25544", "25544.txt"),
        ] {
            assert_eq!(trace_file_name(name), file_name);
            assert_eq!(satellite_name(file_name), name);
        }
        assert_eq!(satellite_name("ISS_(ZARYA).txt.gz"), "ISS (ZARYA)");
        // path separators never leak into file names
        assert_eq!(trace_file_name("SL-16 R/B"), "SL-16_R-B.txt");
        assert_eq!(trace_file_name("ATLAS 5 CENTAUR R\\B"), "ATLAS_5_CENTAUR_R-B.txt");
        assert_eq!(satellite_name(&trace_file_name("SL-16 R/B")), "SL-16 R-B");
        assert_eq!(satellite_name("NOAA_19"), "NOAA 19");
    }

    #[test]
    fn stream_generation() {
        let ts = Timescale::load();
        let elements = OrbitalElements::from_str(ISS_TLE).unwrap();
        let start = ts.epoch(ISS_EPOCH_UNIX);
        let end = ts.epoch(ISS_EPOCH_UNIX + 600);
        let mut domain = TimeDomain::new(start, Some(end), Duration::from_seconds(60.0)).unwrap();

        let mut sink = Vec::<u8>::new();
        let count = generate(&elements, &mut domain, &mut sink).unwrap();
        assert_eq!(count, 11);

        let content = String::from_utf8(sink).unwrap();
        let records = content
            .lines()
            .map(|line| GeoPosition::from_str(line).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(records.len(), 11);

        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.timestamp, ISS_EPOCH_UNIX + 60 * i as i64);
            // formatted values parse back to the exact same value
            let expected = propagate(&elements, ts.epoch(record.timestamp)).unwrap();
            assert_eq!(*record, expected);
        }
    }

    #[test]
    fn idempotent_generation() {
        let ts = Timescale::load();
        let elements = OrbitalElements::from_str(ISS_TLE).unwrap();
        let start = ts.epoch(ISS_EPOCH_UNIX);
        let mut domain = TimeDomain::new(
            start,
            Some(ts.epoch(ISS_EPOCH_UNIX + 300)),
            Duration::from_seconds(30.0),
        )
        .unwrap();

        let mut first = Vec::<u8>::new();
        let mut second = Vec::<u8>::new();
        generate(&elements, &mut domain, &mut first).unwrap();
        // domain is exhausted at this point, and rewound
        generate(&elements, &mut domain, &mut second).unwrap();
        assert_eq!(first, second);
        assert_eq!(String::from_utf8(first).unwrap().lines().count(), 11);
    }

    #[test]
    fn empty_domain() {
        let ts = Timescale::load();
        let elements = OrbitalElements::from_str(ISS_TLE).unwrap();
        let start = ts.epoch(ISS_EPOCH_UNIX);
        let mut domain = TimeDomain::new(
            start,
            Some(ts.epoch(ISS_EPOCH_UNIX - 1)),
            Duration::from_seconds(1.0),
        )
        .unwrap();
        let mut sink = Vec::<u8>::new();
        assert_eq!(generate(&elements, &mut domain, &mut sink).unwrap(), 0);
        assert!(sink.is_empty());
    }
}
