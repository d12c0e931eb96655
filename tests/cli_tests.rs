// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! CLI smoke tests
//!
//! Exercise argument handling and local failure paths; nothing here talks to
//! a live registry.

use assert_cmd::Command;
use predicates::prelude::*;

fn vgsync() -> Command {
    let mut cmd = Command::cargo_bin("vgsync").unwrap();
    // Keep ambient configuration out of the tests
    cmd.env_remove("VGSYNC_ORG_URL")
        .env_remove("VGSYNC_PROJECT")
        .env_remove("VGSYNC_PROJECT_ID")
        .env_remove("VGSYNC_USER")
        .env_remove("VGSYNC_PAT");
    cmd
}

#[test]
fn test_help_lists_commands() {
    vgsync()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("auth"));
}

#[test]
fn test_list_requires_org_url() {
    vgsync()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Organization URL required"));
}

#[test]
fn test_list_requires_project() {
    vgsync()
        .args(["list", "--org-url", "https://dev.azure.com/acme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project required"));
}

#[test]
fn test_import_rejects_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vars.txt");
    std::fs::write(&path, "A=1\n").unwrap();

    vgsync()
        .args([
            "import",
            path.to_str().unwrap(),
            "--org-url",
            "https://dev.azure.com/acme",
            "--project",
            "Proj",
            "--project-id",
            "guid",
            "--pat",
            "dummy",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn test_export_rejects_unknown_format() {
    vgsync()
        .args([
            "export",
            "--id",
            "1",
            "--format",
            "yaml",
            "--org-url",
            "https://dev.azure.com/acme",
            "--project",
            "Proj",
            "--pat",
            "dummy",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}

#[test]
fn test_export_requires_id_or_name() {
    vgsync()
        .args([
            "export",
            "--org-url",
            "https://dev.azure.com/acme",
            "--project",
            "Proj",
            "--pat",
            "dummy",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--id or --name"));
}
