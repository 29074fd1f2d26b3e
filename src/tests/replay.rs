#[cfg(test)]
mod test {
    use crate::tests::toolkit::{linear_stream, temp_dir, write_stream};
    use crate::*;
    use hifitime::Duration;

    #[test]
    fn directory_replay() {
        let dir = temp_dir("directory-replay");
        write_stream(&dir, "ISS_(ZARYA).txt", &linear_stream(100..=200));
        write_stream(&dir, "NOAA_19.txt", &linear_stream(0..=150));
        write_stream(&dir, "HST.txt", "garbage\n120;10;20\n");
        // sub directories are ignored
        std::fs::create_dir_all(dir.join("archive")).unwrap();

        let mut set = ReplaySet::from_directory(&dir, Duration::from_seconds(1.0)).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(
            set.names().collect::<Vec<_>>(),
            vec!["HST", "ISS (ZARYA)", "NOAA 19"]
        );

        let skipped = set.align(120);
        assert_eq!(skipped["ISS (ZARYA)"], 21);
        assert_eq!(skipped["NOAA 19"], 121);
        assert_eq!(skipped["HST"], 2);

        let positions = set.positions();
        assert!(positions.values().all(|position| position.timestamp == 120));

        // one second elapses in 4 ticks
        for _ in 0..3 {
            assert!(!set.update(Duration::from_milliseconds(250.0)));
        }
        assert!(set.update(Duration::from_milliseconds(250.0)));

        let positions = set.positions();
        assert_eq!(positions["ISS (ZARYA)"].timestamp, 121);
        assert_eq!(positions["NOAA 19"].timestamp, 121);
        // stale but valid
        assert_eq!(positions["HST"], GeoPosition::new(120, 10.0, 20.0));

        while !set.is_exhausted() {
            set.update_positions();
        }
        let positions = set.positions();
        assert_eq!(positions["ISS (ZARYA)"].timestamp, 200);
        assert_eq!(positions["NOAA 19"].timestamp, 150);
        set.close();
    }

    #[test]
    fn duplicate_streams() {
        let dir = temp_dir("duplicate-streams");
        write_stream(&dir, "HST.txt", &linear_stream(0..=10));
        write_stream(&dir, "HST.bak", &linear_stream(0..=10));
        write_stream(&dir, "NOAA_19.txt", &linear_stream(0..=10));

        match ReplaySet::from_directory(&dir, Duration::from_seconds(1.0)) {
            Err(Error::DuplicateSatellite(name)) => assert_eq!(name, "HST"),
            other => panic!("unexpected result: {:?}", other.map(|set| set.len())),
        }
    }

    #[test]
    fn missing_directory() {
        let dir = temp_dir("missing-directory").join("nowhere");
        assert!(matches!(
            ReplaySet::from_directory(&dir, Duration::from_seconds(1.0)),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn projected_replay() {
        let dir = temp_dir("projected-replay");
        write_stream(&dir, "A.txt", "0;0;0\n1;45;90\n");
        let mut set = ReplaySet::from_directory(&dir, Duration::from_seconds(1.0)).unwrap();
        set.update_positions();
        set.update_positions();

        let params = ProjectionParams::from(Projection::Equirectangular);
        let position = set.positions()["A"];
        assert_eq!(project(&position, &params), (0.75, 0.25));
    }
}
