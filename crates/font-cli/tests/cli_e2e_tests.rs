//! CLI end-to-end tests that invoke the compiled `fontctl` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use font_test_utils::TestInstall;
use predicates::prelude::*;

/// `fontctl` isolated from the caller's environment and global config.
fn bare(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fontctl"));
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env_remove("FONT_MANAGER_INSTALL_PATH")
        .env_remove("FONT_MANAGER_PORT")
        .env_remove("FONT_MANAGER_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

/// `fontctl --install-path <install>`
fn fontctl(install: &TestInstall) -> Command {
    let mut cmd = bare(install.root());
    cmd.arg("--install-path").arg(install.root());
    cmd
}

/// Write a font file to upload and return its path.
fn upload_file(install: &TestInstall, name: &str) -> PathBuf {
    let dir = install.root().join("uploads");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, b"wOF2").unwrap();
    path
}

fn list_json(install: &TestInstall) -> serde_json::Value {
    let output = fontctl(install).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// General
// ============================================================================

#[test]
fn test_help_lists_commands() {
    let install = TestInstall::new();
    bare(install.root())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("edit"));
}

#[test]
fn test_missing_install_path_fails() {
    let install = TestInstall::new();
    bare(install.root())
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("install_path"));
}

#[test]
fn test_install_path_from_local_config_file() {
    let install = TestInstall::new();
    fs::write(
        install.root().join("config.toml"),
        format!("install_path = {:?}\n", install.root().to_string_lossy()),
    )
    .unwrap();

    bare(install.root())
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

// ============================================================================
// list / add
// ============================================================================

#[test]
fn test_list_empty_install() {
    let install = TestInstall::new();
    fontctl(&install)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No font rules"));
}

#[test]
fn test_add_then_list_json() {
    let install = TestInstall::new();
    let font = upload_file(&install, "Brand.woff2");

    fontctl(&install)
        .arg("add")
        .arg(&font)
        .args(["--family", "Brand Sans", "--weight", "700"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/webfonts/myfonts/Brand.woff2"));

    let rules = list_json(&install);
    assert_eq!(rules.as_array().unwrap().len(), 1);
    assert_eq!(rules[0]["fontFamily"], "Brand Sans");
    assert_eq!(rules[0]["fileName"], "Brand.woff2");
    assert_eq!(rules[0]["weight"], "700");
    install.assert_font_exists("Brand.woff2");
}

#[test]
fn test_add_with_custom_name() {
    let install = TestInstall::new();
    let font = upload_file(&install, "upload.tmp");

    fontctl(&install)
        .arg("add")
        .arg(&font)
        .args(["--family", "Foo", "--name", "foo.woff2"])
        .assert()
        .success();

    install.assert_font_exists("foo.woff2");
    install.assert_stylesheet_contains("src: url('/webfonts/myfonts/foo.woff2');");
}

#[test]
fn test_add_collision_fails_with_conflict() {
    let install = TestInstall::new().with_font("a.woff2", b"existing");
    let font = upload_file(&install, "a.woff2");

    fontctl(&install)
        .arg("add")
        .arg(&font)
        .args(["--family", "Foo"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert!(!install.stylesheet_path().exists());
}

#[test]
fn test_add_rejects_quoted_family() {
    let install = TestInstall::new();
    let font = upload_file(&install, "a.woff2");

    fontctl(&install)
        .arg("add")
        .arg(&font)
        .args(["--family", "Bad'Name"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));

    install.assert_font_not_exists("a.woff2");
}

// ============================================================================
// delete
// ============================================================================

#[test]
fn test_delete_removes_rule_and_file() {
    let install = TestInstall::new();
    let font = upload_file(&install, "a.woff2");
    fontctl(&install)
        .arg("add")
        .arg(&font)
        .args(["--family", "Foo"])
        .assert()
        .success();

    fontctl(&install)
        .args(["delete", "--family", "Foo", "a.woff2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 rule(s)"));

    assert_eq!(list_json(&install), serde_json::json!([]));
    install.assert_font_not_exists("a.woff2");
}

#[test]
fn test_delete_twice_succeeds() {
    let install = TestInstall::new().with_stylesheet("body {}\n");

    fontctl(&install)
        .args(["delete", "--family", "Foo", "a.woff2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WARN"));
    assert_eq!(install.stylesheet(), "body {}\n");
}

#[test]
fn test_delete_dry_run_writes_nothing() {
    let install = TestInstall::new().with_font("a.woff2", b"x").with_stylesheet(
        "@font-face { font-family: 'Foo'; src: url('/webfonts/myfonts/a.woff2'); }\n",
    );
    let before = install.stylesheet();

    fontctl(&install)
        .args(["delete", "--family", "Foo", "a.woff2", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-@font-face"))
        .stdout(predicate::str::contains("Would delete"));

    assert_eq!(install.stylesheet(), before);
    install.assert_font_exists("a.woff2");
}

// ============================================================================
// edit
// ============================================================================

#[test]
fn test_edit_renames_family() {
    let install = TestInstall::new().with_stylesheet(
        "@font-face { font-family: \"Old\"; src: url('/webfonts/myfonts/a.woff2'); }\n",
    );

    fontctl(&install)
        .args(["edit", "--from", "Old", "--to", "New", "a.woff2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 1 rule(s)"));

    install.assert_stylesheet_contains("font-family: \"New\";");
}

#[test]
fn test_edit_dry_run_shows_diff() {
    let install = TestInstall::new().with_stylesheet(
        "@font-face { font-family: 'Old'; src: url('/webfonts/myfonts/a.woff2'); }\n",
    );
    let before = install.stylesheet();

    fontctl(&install)
        .args(["edit", "--from", "Old", "--to", "New", "a.woff2", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- a/user.css"))
        .stdout(predicate::str::contains("+@font-face { font-family: 'New';"));

    assert_eq!(install.stylesheet(), before);
}

#[test]
fn test_edit_unknown_rule_fails() {
    let install = TestInstall::new().with_stylesheet("body {}\n");

    fontctl(&install)
        .args(["edit", "--from", "Old", "--to", "New", "a.woff2"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No @font-face rule"));

    assert_eq!(install.stylesheet(), "body {}\n");
}

// ============================================================================
// config
// ============================================================================

#[test]
fn test_config_json_redacts_api_key() {
    let install = TestInstall::new();

    fontctl(&install)
        .env("FONT_MANAGER_API_KEY", "s3cret-key")
        .env("FONT_MANAGER_PORT", "9000")
        .args(["config", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"port\": 9000"))
        .stdout(predicate::str::contains("********"))
        .stdout(predicate::str::contains("s3cret-key").not());
}

#[test]
fn test_config_rejects_bad_port() {
    let install = TestInstall::new();

    fontctl(&install)
        .env("FONT_MANAGER_PORT", "eighty")
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("FONT_MANAGER_PORT"));
}
