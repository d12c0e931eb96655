// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Command implementations

mod auth;
mod export_import;
mod list;

pub use auth::{auth_clear, auth_set, auth_show};
pub use export_import::{export_group_cmd, import_file};
pub use list::list_groups;

use anyhow::{Context, Result};

use crate::cli::ConnectionArgs;
use crate::config::ProjectContext;
use crate::credentials::{CredentialStore, FileCredentialStore};
use crate::error::VgSyncError;

/// Resolve the explicit project context from flags and environment
pub(crate) fn resolve_context(conn: &ConnectionArgs) -> Result<ProjectContext> {
    let org_url = conn
        .org_url
        .clone()
        .context("Organization URL required: pass --org-url or set VGSYNC_ORG_URL")?;
    let project = conn
        .project
        .clone()
        .context("Project required: pass --project or set VGSYNC_PROJECT")?;

    Ok(ProjectContext::new(
        org_url,
        project,
        conn.project_id.clone(),
        conn.user.clone(),
    ))
}

/// Fetch the PAT for this call: explicit flag first, then the stored credential
///
/// A missing credential is surfaced as `CredentialMissing`, never treated as
/// an empty secret.
pub(crate) fn resolve_credential(conn: &ConnectionArgs, ctx: &ProjectContext) -> Result<String> {
    if let Some(pat) = &conn.pat {
        return Ok(pat.clone());
    }

    let store = FileCredentialStore::default_location();
    match store.get(&ctx.project_name, &ctx.user)? {
        Some(pat) => Ok(pat),
        None => Err(VgSyncError::CredentialMissing {
            project: ctx.project_name.clone(),
            user: ctx.user.clone(),
        }
        .into()),
    }
}
