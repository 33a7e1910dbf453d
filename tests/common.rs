#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Command for the binary, with the config directory redirected to the
/// temp dir so tests never read or write the real user configuration.
pub fn pc() -> Command {
    let mut cmd = cargo_bin_cmd!("punchclock");
    let cfg_dir = env::temp_dir().join("punchclock_test_config");
    cmd.env("PUNCHCLOCK_CONFIG_DIR", cfg_dir);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a DB with one geofence ("HQ", Delhi, 200 m).
pub fn init_db_with_hq(db_path: &str) {
    pc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    pc().args([
        "--db", db_path, "geofence", "add", "HQ", "--lat", "28.7041", "--lon", "77.1025",
        "--radius", "200",
    ])
    .assert()
    .success();
}

/// Arguments for a location ~111 m north of HQ (inside the fence).
pub const NEAR_HQ: [&str; 4] = ["--lat", "28.7051", "--lon", "77.1025"];

/// Arguments for a location in Mumbai (outside the fence).
pub const MUMBAI: [&str; 4] = ["--lat", "19.0760", "--lon", "72.8777"];
