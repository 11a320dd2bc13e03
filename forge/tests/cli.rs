//! End-to-end tests running the `sdkforge` binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn sdkforge(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sdkforge").unwrap();
    cmd.current_dir(cwd)
        .env("NO_COLOR", "1")
        .env_remove("SDKFORGE_LOG");
    cmd
}

#[test]
fn it_creates_a_project_without_side_commands() {
    let temp = tempfile::tempdir().unwrap();

    sdkforge(temp.path())
        .args(["sample-sdk", "--git=false", "--skip-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next steps"))
        .stdout(predicate::str::contains("pnpm install"));

    let root = temp.path().join("sample-sdk");
    for path in [
        "tsconfig.json",
        "tsconfig/base.json",
        "tsconfig/esm.json",
        "tsconfig/cjs.json",
        "tsconfig/types.json",
        "package.json",
        "typedoc.json",
        "biome.json",
        "src/index.ts",
        "test/sdk.test.ts",
        "README.md",
        ".changeset/config.json",
    ] {
        assert!(root.join(path).is_file(), "{path} missing");
    }
    assert!(!root.join(".gitignore").exists());
    assert!(!root.join(".git").exists());

    let manifest = std::fs::read_to_string(root.join("package.json")).unwrap();
    let manifest: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(manifest["name"], "sample-sdk");
}

#[test]
fn it_honours_feature_flags() {
    let temp = tempfile::tempdir().unwrap();

    sdkforge(temp.path())
        .args([
            "bound-sdk",
            "--contracts",
            "--extended-tests",
            "--versioning=false",
            "--git=false",
            "--skip-install",
            "--package-manager",
            "npm",
        ])
        .assert()
        .success();

    let root = temp.path().join("bound-sdk");
    assert!(root.join("abis/ERC20.json").is_file());
    assert!(root.join("typechain/contracts").is_dir());
    assert!(root.join("test/config/test.utils.ts").is_file());
    assert!(!root.join(".changeset").exists());

    let readme = std::fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.contains("npm run build:typechain"));
}

#[test]
fn it_rejects_an_existing_directory() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::create_dir(temp.path().join("taken")).unwrap();
    std::fs::write(temp.path().join("taken/keep.txt"), "keep").unwrap();

    let assert = sdkforge(temp.path())
        .args(["taken", "--git=false", "--skip-install"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("already exists"));

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert_eq!(stderr.trim_end().lines().count(), 1, "stderr: {stderr}");

    let entries = std::fs::read_dir(temp.path().join("taken")).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn it_requires_a_project_name() {
    let temp = tempfile::tempdir().unwrap();

    sdkforge(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "));
}

#[test]
fn it_rejects_an_invalid_name() {
    let temp = tempfile::tempdir().unwrap();

    sdkforge(temp.path())
        .args(["nested/name", "--skip-install"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "));

    assert!(!temp.path().join("nested").exists());
}

#[test]
fn it_previews_without_writing() {
    let temp = tempfile::tempdir().unwrap();

    sdkforge(temp.path())
        .args(["preview-sdk", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("── package.json ──"))
        .stdout(predicate::str::contains("\"name\": \"preview-sdk\""));

    assert!(!temp.path().join("preview-sdk").exists());
}

#[test]
fn it_creates_the_project_in_the_given_directory() {
    let temp = tempfile::tempdir().unwrap();
    let cwd = tempfile::tempdir().unwrap();

    sdkforge(cwd.path())
        .arg("elsewhere")
        .arg("-C")
        .arg(temp.path())
        .args(["--git=false", "--skip-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "1. cd {}",
            temp.path().join("elsewhere").display()
        )));

    assert!(temp.path().join("elsewhere/package.json").is_file());
    assert!(!cwd.path().join("elsewhere").exists());
}

#[test]
fn it_accepts_bare_boolean_flags_before_the_name() {
    let temp = tempfile::tempdir().unwrap();

    sdkforge(temp.path())
        .args(["--typescript", "--versioning", "flag-sdk", "--git=false"])
        .arg("--skip-install")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. cd flag-sdk"));

    let root = temp.path().join("flag-sdk");
    assert!(root.join("tsconfig.json").is_file());
    assert!(root.join(".changeset/config.json").is_file());
}

#[test]
fn it_warns_and_generates_typescript_when_disabled() {
    let temp = tempfile::tempdir().unwrap();

    sdkforge(temp.path())
        .args(["js-sdk", "--typescript=false", "--git=false", "--skip-install"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "JavaScript-only projects are not supported",
        ));

    let root = temp.path().join("js-sdk");
    assert!(root.join("src/index.ts").is_file());
    assert!(root.join("tsconfig.json").is_file());
}
