//! replay opmode
use std::time::Instant;

use groundtrack::prelude::{project, Duration, ProjectionParams, ReplaySet};

use crate::{cli::ReplayOpts, Error};

/// Polling period of the replay loop
const POLLING_PERIOD: std::time::Duration = std::time::Duration::from_millis(10);

fn report(set: &ReplaySet, params: &ProjectionParams, opts: &ReplayOpts) {
    for (name, position) in set.positions() {
        let (x, y) = project(&position, params);
        info!(
            "{} ({}): lat={:.4} lon={:.4} x={:.5} y={:.5}",
            name, position.timestamp, position.latitude, position.longitude, x, y
        );
    }
    if let Some((lat, lon)) = opts.device_location {
        for name in set.in_range(lat, lon, opts.alert_distance_km) {
            warn!("{} within {} km of device location", name, opts.alert_distance_km);
        }
    }
}

/// Replays all position streams of the directory, until exhaustion
/// or the maximal number of sampling periods is reached.
pub fn run(opts: &ReplayOpts) -> Result<(), Error> {
    let mut set = ReplaySet::from_directory(&opts.directory, opts.sampling_period)?;
    if set.is_empty() {
        return Err(Error::EmptyDirectory(opts.directory.clone()));
    }
    info!("replaying {} satellites", set.len());

    if opts.timestamp_adjustment {
        let target = opts.initial_timestamp()?;
        for (name, skipped) in set.align(target) {
            info!("{}: skipped {} positions", name, skipped);
        }
    } else {
        set.update_positions();
    }

    let params = ProjectionParams::from(opts.projection);
    report(&set, &params, opts);

    let mut ticks = 0_u64;
    let mut last = Instant::now();

    while !set.is_exhausted() {
        if let Some(max) = opts.max_ticks {
            if ticks >= max {
                info!("reached {} ticks", max);
                break;
            }
        }

        std::thread::sleep(POLLING_PERIOD);

        let now = Instant::now();
        let dt = Duration::from_seconds((now - last).as_secs_f64());
        last = now;

        if set.update(dt) {
            ticks += 1;
            report(&set, &params, opts);
        }
    }

    set.close();
    info!("replay completed");
    Ok(())
}
