use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

const STATIONS: &str = "ISS (ZARYA)
1 25544U 98067A   20194.88612269 -.00002218  00000-0 -31515-4 0  9992
2 25544  51.6461 221.2784 0001413  89.1723 280.4612 15.49507896236008
HST
1 20580U 90037B   19342.88042116  .00000361  00000-0  11007-4 0  9996
2 20580  28.4682 146.6676 0002639 185.9222 322.7238 15.09309432427086
";

fn workspace(name: &str) -> PathBuf {
    let path = std::env::temp_dir()
        .join("groundtrack-cli-tests")
        .join(format!("{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&path);
    std::fs::create_dir_all(&path).unwrap();
    std::fs::write(path.join("stations.txt"), STATIONS).unwrap();
    path
}

fn generate(workspace: &PathBuf, satellites: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("groundtrack-cli")
        .unwrap()
        .env("RUST_LOG", "info")
        .args([
            "generate",
            "-f",
            workspace.join("stations.txt").to_str().unwrap(),
            "-v",
            satellites,
            "-s",
            "2020-07-13-00:00:00",
            "-e",
            "2020-07-13-00:10:00",
            "-t",
            "60",
            "-o",
            workspace.join("tracks").to_str().unwrap(),
        ])
        .assert()
}

#[test]
fn generate_then_replay() {
    let workspace = workspace("generate-then-replay");

    generate(&workspace, "ISS_(ZARYA),HST")
        .success()
        .stdout(predicate::str::contains("processing ISS (ZARYA)"));

    let iss = std::fs::read_to_string(workspace.join("tracks").join("ISS_(ZARYA).txt")).unwrap();
    assert_eq!(iss.lines().count(), 11);
    assert!(iss.starts_with("1594598400;"));
    assert!(workspace.join("tracks").join("HST.txt").exists());

    Command::cargo_bin("groundtrack-cli")
        .unwrap()
        .env("RUST_LOG", "info")
        .args([
            "replay",
            "-d",
            workspace.join("tracks").to_str().unwrap(),
            "--sampling-period",
            "0.05",
            "--initial-timestamp",
            "1594598700",
            "--max-ticks",
            "2",
            "-p",
            "mercator",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ISS (ZARYA): skipped 6 positions"))
        .stdout(predicate::str::contains("reached 2 ticks"));
}

#[test]
fn unknown_satellite() {
    let workspace = workspace("unknown-satellite");
    generate(&workspace, "HST,TIANGONG").failure();
    // nothing was produced
    assert!(!workspace.join("tracks").join("HST.txt").exists());
}

#[test]
fn replay_until_exhaustion() {
    let workspace = workspace("replay-until-exhaustion");
    let tracks = workspace.join("tracks");
    std::fs::create_dir_all(&tracks).unwrap();
    std::fs::write(tracks.join("A.txt"), "0;0;0\nbad\n2;1;1\n").unwrap();

    Command::cargo_bin("groundtrack-cli")
        .unwrap()
        .env("RUST_LOG", "info")
        .args([
            "replay",
            "-d",
            tracks.to_str().unwrap(),
            "--sampling-period",
            "0.02",
            "--disable-timestamp-adjustment",
            "--device-location",
            "1x1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("A within 1000 km of device location"))
        .stdout(predicate::str::contains("replay completed"));
}

#[test]
fn missing_subcommand() {
    Command::cargo_bin("groundtrack-cli").unwrap().assert().failure();
}
