//! generate opmode
use groundtrack::prelude::{generate, TimeDomain, TleSet};
use groundtrack::create_trace_file;
use itertools::Itertools;

use crate::{cli::GenerateOpts, Error};

/// Generates one position stream per requested satellite.
/// Every name is resolved before any file gets created.
pub fn run(opts: &GenerateOpts) -> Result<(), Error> {
    let tle = TleSet::load(&opts.source)?;
    info!("loaded {} satellites from \"{}\"", tle.len(), opts.source);

    let selection = tle.select(opts.satellites.as_slice())?;

    let mut domain = TimeDomain::new(opts.start, opts.end, opts.step)?;
    info!(
        "time domain: {} - {} ({} positions per satellite)",
        domain.start(),
        domain.end(),
        domain.len()
    );

    let mut produced = Vec::with_capacity(selection.len());

    for (name, elements) in selection {
        info!("processing {}", name);
        let (path, mut writer) = create_trace_file(&opts.output, name, opts.gzip)?;
        let count = generate(elements, &mut domain, &mut writer)?;
        writer.finish()?;
        info!("{}: {} positions written to \"{}\"", name, count, path.display());
        produced.push(name);
    }

    debug!("generated: {}", produced.iter().join(", "));
    Ok(())
}
