//! Invocation-level tests for the ignition-sift binary.

use std::fs;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn sift() -> Command {
    Command::cargo_bin("ignition-sift").unwrap()
}

#[test]
fn no_arguments_prints_usage() {
    sift().assert().failure().stderr(contains("Usage"));
}

#[test]
fn generate_requires_both_positional_arguments() {
    sift()
        .args(["generate", "only-one"])
        .assert()
        .failure()
        .stderr(contains("Usage"));
}

#[test]
fn generation_failures_still_exit_zero() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("not_code.py");
    fs::write(&src, "x = 1\n").unwrap();

    sift()
        .arg("generate")
        .arg(&src)
        .arg(dir.path().join("stubs"))
        .assert()
        .success()
        .stdout(contains("Not a valid code.py file"));
}

#[test]
fn generate_then_lookup_round_trip() {
    let dir = TempDir::new().unwrap();
    let script_dir = dir.path().join("project/script-python/pkg/util");
    fs::create_dir_all(&script_dir).unwrap();
    fs::write(script_dir.join("code.py"), "class Config:\n    pass\n").unwrap();
    let stubs_root = dir.path().join("stubs");

    sift()
        .arg("generate")
        .arg(script_dir.join("code.py"))
        .arg(&stubs_root)
        .assert()
        .success()
        .stdout(contains("Stub written to"));

    sift()
        .arg("lookup")
        .arg(&stubs_root)
        .arg("Config")
        .assert()
        .success()
        .stdout(contains("pkg.util"));

    sift()
        .args(["lookup", "--prefix"])
        .arg(&stubs_root)
        .arg("con")
        .assert()
        .success()
        .stdout(contains("Config: pkg.util"));

    // Below the minimum prefix length nothing matches.
    sift()
        .args(["lookup", "--prefix"])
        .arg(&stubs_root)
        .arg("co")
        .assert()
        .success()
        .stdout(contains("No stub symbols match prefix"));
}

#[test]
fn generate_all_reports_each_file() {
    let dir = TempDir::new().unwrap();
    for script in ["alpha", "beta"] {
        let script_dir = dir.path().join("project/script-python/pkg").join(script);
        fs::create_dir_all(&script_dir).unwrap();
        fs::write(script_dir.join("code.py"), "def f():\n    pass\n").unwrap();
    }
    let stubs_root = dir.path().join("stubs");

    sift()
        .arg("generate-all")
        .arg(dir.path())
        .arg(&stubs_root)
        .assert()
        .success()
        .stdout(contains("Finished generating stubs for 2 file(s)"));

    assert!(stubs_root.join("pkg/alpha.pyi").is_file());
    assert!(stubs_root.join("pkg/beta.pyi").is_file());
}

#[test]
fn generate_all_reports_empty_workspace() {
    let dir = TempDir::new().unwrap();

    sift()
        .arg("generate-all")
        .arg(dir.path())
        .arg(dir.path().join("stubs"))
        .assert()
        .success()
        .stdout(contains("No code.py files found"));
}

#[test]
fn init_stubs_materializes_bundled_files() {
    let dir = TempDir::new().unwrap();
    let stubs_root = dir.path().join("stubs");

    sift()
        .arg("init-stubs")
        .arg(&stubs_root)
        .assert()
        .success()
        .stdout(contains("Ignition stubs initialized"));

    assert!(stubs_root.join("javax/imageio/__init__.py").is_file());
}
