//! CLI integration tests for argument handling
//!
//! These run the real binary. Usage errors must print the help text and
//! still exit successfully.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn msh2fbx() -> Command {
    let mut cmd = Command::cargo_bin("msh2fbx").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_shows_banner_and_categories() {
    msh2fbx()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("MSH to FBX Converter"))
        .stdout(predicate::str::contains("--override-anim-name"))
        .stdout(predicate::str::contains("Mesh_VehicleCollision"))
        .stdout(predicate::str::contains("Skeleton_BoneEnd"));
}

#[test]
fn test_no_inputs_prints_usage_and_succeeds() {
    msh2fbx()
        .assert()
        .success()
        .stdout(predicate::str::contains("No MSH files given!"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_wrong_destination_extension_prints_usage_and_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let model = temp_dir.path().join("model.msh");
    fs::write(&model, b"HEDR").unwrap();

    msh2fbx()
        .arg("-f")
        .arg(&model)
        .arg("-d")
        .arg(temp_dir.path().join("scene.obj"))
        .assert()
        .success()
        .stdout(predicate::str::contains("required .fbx extension"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_missing_destination_directory_prints_usage_and_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let model = temp_dir.path().join("model.msh");
    fs::write(&model, b"HEDR").unwrap();
    let missing = format!("{}/", temp_dir.path().join("missing").display());

    msh2fbx()
        .arg("-f")
        .arg(&model)
        .arg("-d")
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Given destination directory does not exist!",
        ));
}

#[test]
fn test_unknown_ignore_category_is_reported() {
    let temp_dir = TempDir::new().unwrap();

    msh2fbx()
        .arg("-f")
        .arg(temp_dir.path())
        .args(["-i", "BOGUS", "-i", "Mesh_Collision"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'BOGUS' is not a valid filter option!"))
        .stdout(predicate::str::contains("'Mesh_Collision'").not());
}

#[test]
fn test_quiet_hides_warnings() {
    msh2fbx()
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("No MSH files given!").not())
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_completions() {
    msh2fbx()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("msh2fbx"));
}

#[test]
fn test_unknown_flag_fails() {
    msh2fbx().arg("--bogus").assert().failure();
}

#[cfg(not(feature = "native"))]
#[test]
fn test_conversion_without_backend_reports_and_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.msh"), b"HEDR").unwrap();
    fs::write(temp_dir.path().join("b.msh"), b"HEDR").unwrap();

    msh2fbx()
        .arg("-f")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No conversion backend available, 2 MSH files"));

    assert!(!temp_dir.path().join("a.fbx").exists());
}
