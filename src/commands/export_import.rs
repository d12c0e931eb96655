// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Export and import commands

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use colored::*;

use super::{resolve_context, resolve_credential};
use crate::cli::ConnectionArgs;
use crate::codec;
use crate::engine;
use crate::error::VgSyncError;
use crate::models::{ExportFormat, ExportPolicy, ImportIntent};
use crate::registry::{AzureDevOpsRegistry, VariableGroupRegistry};

/// Export one variable group to a file
pub async fn export_group_cmd(
    conn: &ConnectionArgs,
    id: Option<u64>,
    name: Option<&str>,
    format: &str,
    include_secrets: bool,
    out: Option<&str>,
) -> Result<()> {
    let ctx = resolve_context(conn)?;
    let pat = resolve_credential(conn, &ctx)?;
    let registry = AzureDevOpsRegistry::new(&ctx.organization_url)?;

    let format = match format {
        "env" => ExportFormat::Env,
        "json" => ExportFormat::Json,
        other => bail!("Unknown format: {}. Use env or json", other),
    };

    let group_id = match (id, name) {
        (Some(id), _) => id,
        (None, Some(name)) => {
            let groups = registry.list_all_groups(&pat, &ctx.project_name).await?;
            let lower = name.to_lowercase();
            groups
                .iter()
                .find(|group| group.name.to_lowercase() == lower)
                .map(|group| group.id)
                .ok_or_else(|| VgSyncError::GroupNotFound(name.to_string()))?
        }
        (None, None) => bail!("Must specify either --id or --name"),
    };

    let policy = ExportPolicy {
        format,
        include_secrets,
    };
    let file = engine::export_group(&registry, &pat, &ctx.project_name, group_id, &policy).await?;

    let out_path = out
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&file.file_name));
    std::fs::write(&out_path, &file.content)
        .with_context(|| format!("Failed to write {}", out_path.display()))?;

    println!(
        "{} Exported variable group to {}",
        "[OK]".green(),
        out_path.display()
    );
    if !include_secrets {
        println!("Secret values were redacted. Pass --include-secrets to write them.");
    }

    Ok(())
}

/// Import a .env or JSON file as a variable group
pub async fn import_file(
    conn: &ConnectionArgs,
    path: &str,
    name: Option<&str>,
    replace: bool,
    ignore_secrets: bool,
) -> Result<()> {
    let ctx = resolve_context(conn)?;
    let project_id = ctx
        .project_id
        .clone()
        .context("Project id required for imports: pass --project-id or set VGSYNC_PROJECT_ID")?;
    let pat = resolve_credential(conn, &ctx)?;

    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path))?;
    let file_name = Path::new(path)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(path);

    let parsed = codec::parse(&bytes, file_name, ignore_secrets)?;
    let target_name = name
        .map(str::to_string)
        .unwrap_or_else(|| parsed.suggested_name.clone());

    let intent = ImportIntent {
        target_name: target_name.clone(),
        variables: parsed.variables,
        replace_existing: replace,
    };

    let registry = AzureDevOpsRegistry::new(&ctx.organization_url)?;
    let outcome =
        engine::import_library(&registry, &pat, &ctx.project_name, &project_id, intent).await?;

    if outcome.replaced {
        println!(
            "{} Replaced variable group \"{}\"",
            "[OK]".green(),
            target_name
        );
    } else {
        println!(
            "{} Created variable group \"{}\"",
            "[OK]".green(),
            target_name
        );
    }

    Ok(())
}
