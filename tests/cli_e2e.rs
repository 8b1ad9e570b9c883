//! End-to-end tests for the `satis-gen` binary.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn satis_gen(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("satis-gen");
    cmd.env("HOME", home)
        .env_remove("SATIS_GEN_SCAN_ROOT")
        .env_remove("SATIS_GEN_OUTPUT")
        .env_remove("SATIS_GEN_CONFIG");
    cmd
}

#[test]
fn test_writes_config_for_git_checkouts() {
    let temp = TempDir::new().unwrap();
    let repos = temp.path().join("repos");
    fs::create_dir_all(repos.join("repoA").join(".git")).unwrap();
    fs::create_dir_all(repos.join("repoB").join(".git")).unwrap();
    fs::create_dir_all(repos.join("notes")).unwrap();
    let output = temp.path().join("satis.json");

    satis_gen(temp.path())
        .arg("--scan-root")
        .arg(&repos)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let urls: Vec<&str> = doc["repositories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| {
            assert_eq!(r["type"], "vcs");
            r["url"].as_str().unwrap()
        })
        .collect();
    assert_eq!(
        urls,
        vec![
            repos.join("repoA").to_str().unwrap(),
            repos.join("repoB").to_str().unwrap()
        ]
    );
    assert_eq!(doc["require-all"], true);
    assert_eq!(doc["archive"]["prefix-url"], "http://localhost:9000");
}

#[test]
fn test_stdout_mode() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("pkg").join(".git")).unwrap();

    satis_gen(temp.path())
        .arg("--scan-root")
        .arg(temp.path())
        .arg("--stdout")
        .arg("--name")
        .arg("acme/mirror")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"acme/mirror\""))
        .stdout(predicate::str::contains("\"type\": \"vcs\""))
        .stdout(predicate::str::contains("\\/").not());
}

#[test]
fn test_missing_scan_root_fails() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("satis.json");

    satis_gen(temp.path())
        .arg("--scan-root")
        .arg(temp.path().join("absent"))
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to scan"))
        .stderr(predicate::str::contains("absent"));

    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_fails() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("no-such-dir").join("satis.json");

    satis_gen(temp.path())
        .arg("--scan-root")
        .arg(temp.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write"));
}

#[test]
fn test_settings_file_from_home() {
    let temp = TempDir::new().unwrap();
    let repos = temp.path().join("repos");
    fs::create_dir_all(repos.join("lib").join(".git")).unwrap();
    fs::create_dir_all(repos.join("legacy").join(".git")).unwrap();
    let output = temp.path().join("out.json");

    let settings_dir = temp.path().join(".config").join("satis-gen");
    fs::create_dir_all(&settings_dir).unwrap();
    fs::write(
        settings_dir.join("config.toml"),
        format!(
            "scan-root = {:?}\noutput = {:?}\nexclude = [\"legacy\"]\n\n[archive]\nformat = \"tar\"\n",
            repos.to_str().unwrap(),
            output.to_str().unwrap()
        ),
    )
    .unwrap();

    satis_gen(temp.path()).assert().success();

    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(doc["repositories"].as_array().unwrap().len(), 1);
    assert_eq!(doc["archive"]["format"], "tar");
}

#[test]
fn test_missing_explicit_settings_file_fails() {
    let temp = TempDir::new().unwrap();

    satis_gen(temp.path())
        .arg("--config")
        .arg(temp.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}
