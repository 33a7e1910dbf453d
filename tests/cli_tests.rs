use predicates::str::contains;
use std::fs;

mod common;
use common::{MUMBAI, NEAR_HQ, init_db_with_hq, pc, setup_test_db, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    pc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_geofence_add_list_and_check() {
    let db_path = setup_test_db("geofence_add_list_check");
    init_db_with_hq(&db_path);

    pc().args(["--db", &db_path, "geofence", "list"])
        .assert()
        .success()
        .stdout(contains("HQ"))
        .stdout(contains("28.704100"));

    pc().args(["--db", &db_path, "--user", "alice", "geofence", "check"])
        .args(NEAR_HQ)
        .assert()
        .success()
        .stdout(contains("inside"))
        .stdout(contains("Nearest: 'HQ'"));

    pc().args(["--db", &db_path, "--user", "alice", "geofence", "check"])
        .args(MUMBAI)
        .assert()
        .success()
        .stdout(contains("outside"))
        .stderr(contains("OUTSIDE_GEOFENCE"));
}

#[test]
fn test_geofence_rejects_duplicate_and_bad_radius() {
    let db_path = setup_test_db("geofence_duplicate");
    init_db_with_hq(&db_path);

    pc().args([
        "--db", &db_path, "geofence", "add", "HQ", "--lat", "10", "--lon", "10", "--radius", "50",
    ])
    .assert()
    .failure()
    .stderr(contains("already exists"));

    pc().args([
        "--db", &db_path, "geofence", "add", "Annex", "--lat", "10", "--lon", "10", "--radius",
        "0",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid radius"));

    pc().args([
        "--db", &db_path, "geofence", "add", "Nowhere", "--lat", "95", "--lon", "10", "--radius",
        "50",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid coordinate"));
}

#[test]
fn test_geofence_delete_with_force() {
    let db_path = setup_test_db("geofence_delete");
    init_db_with_hq(&db_path);

    pc().args(["--db", &db_path, "geofence", "del", "1", "--force"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    pc().args(["--db", &db_path, "geofence", "list"])
        .assert()
        .success()
        .stdout(contains("No geofences configured"));

    pc().args(["--db", &db_path, "geofence", "del", "1", "--force"])
        .assert()
        .failure()
        .stderr(contains("Unknown geofence"));
}

#[test]
fn test_work_mode_show_and_set() {
    let db_path = setup_test_db("work_mode");
    init_db_with_hq(&db_path);

    pc().args(["--db", &db_path, "--user", "bob", "mode"])
        .assert()
        .success()
        .stdout(contains("ONSITE"));

    pc().args(["--db", &db_path, "--user", "bob", "mode", "remote"])
        .assert()
        .success()
        .stdout(contains("set to REMOTE"));

    pc().args(["--db", &db_path, "--user", "bob", "mode"])
        .assert()
        .success()
        .stdout(contains("REMOTE"));

    pc().args(["--db", &db_path, "--user", "bob", "mode", "hybrid"])
        .assert()
        .failure()
        .stderr(contains("Invalid work mode"));
}

#[test]
fn test_onsite_punch_in_outside_geofence_is_rejected() {
    let db_path = setup_test_db("punch_outside");
    init_db_with_hq(&db_path);

    pc().args(["--db", &db_path, "--user", "carol", "punch", "in", "--project", "alpha"])
        .args(MUMBAI)
        .assert()
        .failure()
        .stderr(contains("OUTSIDE_GEOFENCE"))
        .stderr(contains("not within the designated work location"));

    pc().args(["--db", &db_path, "--user", "carol", "punch", "in", "--project", "alpha"])
        .assert()
        .failure()
        .stderr(contains("LOCATION_UNAVAILABLE"));

    pc().args(["--db", &db_path, "--user", "carol", "status"])
        .assert()
        .success()
        .stdout(contains("IDLE"));
}

#[test]
fn test_remote_punch_in_from_anywhere() {
    let db_path = setup_test_db("punch_remote");
    init_db_with_hq(&db_path);

    pc().args(["--db", &db_path, "--user", "dave", "mode", "REMOTE"])
        .assert()
        .success();

    pc().args(["--db", &db_path, "--user", "dave", "punch", "in", "--project", "beta"])
        .args(MUMBAI)
        .assert()
        .success()
        .stdout(contains("Punched in"));
}

#[test]
fn test_punch_in_requires_project() {
    let db_path = setup_test_db("punch_requires_project");
    init_db_with_hq(&db_path);

    pc().args(["--db", &db_path, "--user", "erin", "punch", "in"])
        .args(NEAR_HQ)
        .assert()
        .failure()
        .stderr(contains("select a project"));
}

#[test]
fn test_full_punch_cycle() {
    let db_path = setup_test_db("punch_cycle");
    init_db_with_hq(&db_path);

    pc().args([
        "--db", &db_path, "--user", "frank", "punch", "in", "--project", "alpha", "--task",
        "review",
    ])
    .args(NEAR_HQ)
    .assert()
    .success()
    .stdout(contains("Punched in"))
    .stdout(contains("alpha"));

    pc().args(["--db", &db_path, "--user", "frank", "status"])
        .args(NEAR_HQ)
        .assert()
        .success()
        .stdout(contains("ACTIVE"))
        .stdout(contains("alpha"))
        .stdout(contains("review"));

    pc().args(["--db", &db_path, "--user", "frank", "punch", "in", "--project", "beta"])
        .args(NEAR_HQ)
        .assert()
        .failure()
        .stderr(contains("ALREADY_PUNCHED_IN"));

    pc().args(["--db", &db_path, "--user", "frank", "punch", "out"])
        .args(NEAR_HQ)
        .assert()
        .success()
        .stdout(contains("Punched out"))
        .stdout(contains("alpha"));

    pc().args(["--db", &db_path, "--user", "frank", "punch", "out"])
        .args(NEAR_HQ)
        .assert()
        .failure()
        .stderr(contains("NO_ACTIVE_SESSION"));

    pc().args(["--db", &db_path, "--user", "frank", "status"])
        .args(NEAR_HQ)
        .assert()
        .success()
        .stdout(contains("IDLE"));

    // Another user is not affected by frank's session.
    pc().args(["--db", &db_path, "--user", "grace", "punch", "out"])
        .args(NEAR_HQ)
        .assert()
        .failure()
        .stderr(contains("NO_ACTIVE_SESSION"));
}

#[test]
fn test_reports_after_a_session() {
    let db_path = setup_test_db("reports");
    init_db_with_hq(&db_path);

    pc().args(["--db", &db_path, "--user", "heidi", "punch", "in", "--project", "alpha"])
        .args(NEAR_HQ)
        .assert()
        .success();
    pc().args(["--db", &db_path, "--user", "heidi", "punch", "out"])
        .args(NEAR_HQ)
        .assert()
        .success();

    pc().args(["--db", &db_path, "--user", "heidi", "hours"])
        .assert()
        .success()
        .stdout(contains("Hours for"))
        .stdout(contains("0h0m"));

    pc().args(["--db", &db_path, "--user", "heidi", "hours", "--project", "alpha"])
        .assert()
        .success()
        .stdout(contains("project alpha"));

    pc().args(["--db", &db_path, "--user", "heidi", "hours", "--date", "2025-13-40"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    pc().args(["--db", &db_path, "--user", "heidi", "sessions"])
        .assert()
        .success()
        .stdout(contains("Recent work sessions"))
        .stdout(contains("alpha"));

    pc().args(["--db", &db_path, "--user", "heidi", "history"])
        .assert()
        .success()
        .stdout(contains("IN"))
        .stdout(contains("OUT"));

    pc().args(["--db", &db_path, "--user", "heidi", "history", "--type", "out"])
        .assert()
        .success()
        .stdout(contains("OUT"));

    pc().args(["--db", &db_path, "--user", "heidi", "history", "--date", "1999-01-01"])
        .assert()
        .success()
        .stdout(contains("No records match"));

    pc().args(["--db", &db_path, "--user", "nobody", "sessions"])
        .assert()
        .success()
        .stdout(contains("No work sessions yet"));
}

#[test]
fn test_export_csv_and_json() {
    let db_path = setup_test_db("export");
    init_db_with_hq(&db_path);

    pc().args(["--db", &db_path, "--user", "ivan", "punch", "in", "--project", "gamma"])
        .args(NEAR_HQ)
        .assert()
        .success();
    pc().args(["--db", &db_path, "--user", "ivan", "punch", "out"])
        .args(NEAR_HQ)
        .assert()
        .success();

    let csv_out = temp_out("export_punches", "csv");
    pc().args([
        "--db", &db_path, "--user", "ivan", "export", "--format", "csv", "--file", &csv_out,
    ])
    .assert()
    .success()
    .stdout(contains("2 rows"));

    let csv_text = fs::read_to_string(&csv_out).expect("csv written");
    assert!(csv_text.starts_with("id,user_id,kind,timestamp,latitude,longitude,project_id,task_id"));
    assert!(csv_text.contains("ivan,IN"));
    assert!(csv_text.contains("ivan,OUT"));

    let json_out = temp_out("export_sessions", "json");
    pc().args([
        "--db", &db_path, "--user", "ivan", "export", "--format", "json", "--file", &json_out,
        "--sessions",
    ])
    .assert()
    .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).expect("json written")).unwrap();
    let rows = json.as_array().expect("array of sessions");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["project_id"], "gamma");
    assert!(rows[0]["punch_out"].is_string());

    pc().args([
        "--db", &db_path, "--user", "ivan", "export", "--format", "json", "--file", "relative.json",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));
}

#[test]
fn test_log_print_records_operations() {
    let db_path = setup_test_db("log_print");
    init_db_with_hq(&db_path);

    pc().args(["--db", &db_path, "--user", "judy", "punch", "in", "--project", "alpha"])
        .args(NEAR_HQ)
        .assert()
        .success();

    pc().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("geofence_add"))
        .stdout(contains("punch_in"));
}

#[test]
fn test_config_print_shows_yaml() {
    pc().args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("database:"))
        .stdout(contains("require_project:"));
}
