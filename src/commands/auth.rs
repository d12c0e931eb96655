// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Stored credential commands

use anyhow::{Context, Result};
use colored::*;

use crate::cli::ConnectionArgs;
use crate::credentials::{CredentialStore, FileCredentialStore};

fn require_project(conn: &ConnectionArgs) -> Result<String> {
    conn.project
        .clone()
        .context("Project required: pass --project or set VGSYNC_PROJECT")
}

/// Store a personal access token for (project, user)
pub fn auth_set(conn: &ConnectionArgs, token: &str) -> Result<()> {
    let project = require_project(conn)?;
    let token = token.trim();
    if token.is_empty() {
        anyhow::bail!("Token must not be empty");
    }

    let store = FileCredentialStore::default_location();
    store.set(&project, &conn.user, token)?;

    println!(
        "{} Stored token for {} / {}",
        "[OK]".green(),
        project,
        conn.user
    );
    Ok(())
}

/// Remove the stored token for (project, user)
pub fn auth_clear(conn: &ConnectionArgs) -> Result<()> {
    let project = require_project(conn)?;
    let store = FileCredentialStore::default_location();
    store.clear(&project, &conn.user)?;

    println!(
        "{} Removed token for {} / {}",
        "[OK]".green(),
        project,
        conn.user
    );
    Ok(())
}

/// Show whether a token is stored for (project, user)
pub fn auth_show(conn: &ConnectionArgs) -> Result<()> {
    let project = require_project(conn)?;
    let store = FileCredentialStore::default_location();

    match store.get(&project, &conn.user)? {
        Some(_) => println!(
            "A personal access token is stored for {} / {}",
            project, conn.user
        ),
        None => println!("No token stored for {} / {}", project, conn.user),
    }
    Ok(())
}
