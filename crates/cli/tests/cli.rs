use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{self, File};
use std::io::Write;

fn write_aircraft(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("light.toml");
    let mut file = File::create(&path).expect("toml create");
    writeln!(
        file,
        "name = \"light\"\nweight_kg = 1700.0\ncruise_range_m = 350000.0\nzero_lift_drag_coeff = 0.025\ntotal_propulsion_efficiency = 0.42"
    )
    .unwrap();
    path
}

#[test]
fn aircraft_prints_property_table() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_aircraft(dir.path());

    Command::cargo_bin("aircraft")
        .expect("aircraft bin")
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== light ==="))
        .stdout(predicate::str::contains("Power cruise"))
        .stdout(predicate::str::contains("235.12"))
        .stdout(predicate::str::contains("329.16"));
}

#[test]
fn aircraft_writes_csv_and_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_aircraft(dir.path());
    let csv_path = dir.path().join("out").join("table.csv");
    let json_path = dir.path().join("out").join("report.json");

    Command::cargo_bin("aircraft")
        .expect("aircraft bin")
        .args([
            "--config",
            config.to_str().unwrap(),
            "--summary",
            "--csv",
            csv_path.to_str().unwrap(),
            "--json",
            json_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let csv = fs::read_to_string(&csv_path).expect("csv output");
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines[0], "aircraft,key,label,unit,value");
    assert_eq!(lines.len(), 5, "header plus four summary rows");
    assert!(lines[1].starts_with("light,cruise_power,"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).expect("json output")).unwrap();
    assert_eq!(json[0]["name"], "light");
    assert_eq!(json[0]["rows"].as_array().unwrap().len(), 21);
    assert_eq!(json[0]["model"]["inputs"]["weight"]["value"], 1700.0);
}

#[test]
fn aircraft_rejects_degenerate_geometry() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "name = \"broken\"\nwing_area_m2 = 0.0\n").unwrap();

    Command::cargo_bin("aircraft")
        .expect("aircraft bin")
        .args(["--config", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("wing_area"));
}

#[test]
fn aircraft_unknown_name_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_aircraft(dir.path());

    Command::cargo_bin("aircraft")
        .expect("aircraft bin")
        .args(["--config", config.to_str().unwrap(), "--name", "glider"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn aircraft_csv_to_stdout_is_not_mixed_with_the_table() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_aircraft(dir.path());

    let output = Command::cargo_bin("aircraft")
        .expect("aircraft bin")
        .args(["--config", config.to_str().unwrap(), "--summary", "--csv", "-"])
        .output()
        .expect("aircraft run");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("==="));
    let mut reader = csv::Reader::from_reader(stdout.as_bytes());
    assert_eq!(reader.records().count(), 4);
}

#[test]
fn aircraft_json_to_stdout_parses() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_aircraft(dir.path());

    let output = Command::cargo_bin("aircraft")
        .expect("aircraft bin")
        .args(["--config", config.to_str().unwrap(), "--json", "-"])
        .output()
        .expect("aircraft run");
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("pure JSON");
    assert_eq!(json[0]["name"], "light");
}

#[test]
fn aircraft_and_sweep_match_names_the_same_way() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_aircraft(dir.path());
    let sweep_path = dir.path().join("sweep.toml");
    fs::write(
        &sweep_path,
        r#"name = "speed"
metric = "cruise_power"

[axis]
parameter = "cruise_speed"
start = 150.0
stop = 300.0
points = 3
"#,
    )
    .unwrap();

    Command::cargo_bin("aircraft")
        .expect("aircraft bin")
        .args(["--config", config.to_str().unwrap(), "--name", "LIGHT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== light ==="));

    Command::cargo_bin("sweep")
        .expect("sweep bin")
        .args(["--config", sweep_path.to_str().unwrap(), "--name", "Speed"])
        .assert()
        .success()
        .stderr(predicate::str::contains("sweep 'speed'"));
}

#[test]
fn sweep_writes_long_format_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let sweep_path = dir.path().join("sweep.toml");
    let out = dir.path().join("speed.csv");
    fs::write(
        &sweep_path,
        r#"name = "speed"
metric = "cruise_energy"

[axis]
parameter = "cruise_speed"
start = 150.0
stop = 300.0
points = 4

[series]
parameter = "total_propulsion_efficiency"
values = [0.39, 0.44]
"#,
    )
    .unwrap();

    Command::cargo_bin("sweep")
        .expect("sweep bin")
        .args([
            "--config",
            sweep_path.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("8 rows written"));

    let csv = fs::read_to_string(&out).expect("sweep csv");
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines[0], "series,x,y");
    assert_eq!(lines.len(), 9);
    assert!(lines[1].starts_with("total_propulsion_efficiency = 0.39,150.0,"));
    assert!(lines[8].starts_with("total_propulsion_efficiency = 0.44,300.0,"));
}

#[test]
fn polar_traces_requested_points() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_aircraft(dir.path());

    let output = Command::cargo_bin("polar")
        .expect("polar bin")
        .args([
            "--config",
            config.to_str().unwrap(),
            "--cl-min",
            "-0.2",
            "--points",
            "7",
        ])
        .output()
        .expect("polar run");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines[0], "series,x,y");
    assert_eq!(lines.len(), 8);
    assert!(lines[1].starts_with("light,"));
    assert!(lines[1].ends_with(",-0.2"));
}
