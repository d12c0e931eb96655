// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Variable group listing command

use anyhow::Result;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use super::{resolve_context, resolve_credential};
use crate::cli::ConnectionArgs;
use crate::registry::{AzureDevOpsRegistry, VariableGroupRegistry};

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Modified On")]
    modified_on: String,
    #[tabled(rename = "Modified By")]
    modified_by: String,
}

/// List every variable group in the project
pub async fn list_groups(conn: &ConnectionArgs) -> Result<()> {
    let ctx = resolve_context(conn)?;
    let pat = resolve_credential(conn, &ctx)?;
    let registry = AzureDevOpsRegistry::new(&ctx.organization_url)?;

    let groups = registry.list_all_groups(&pat, &ctx.project_name).await?;

    if groups.is_empty() {
        println!("No variable groups found.");
        return Ok(());
    }

    let rows: Vec<GroupRow> = groups
        .iter()
        .map(|group| GroupRow {
            id: group.id,
            name: group.name.clone(),
            description: group.description.clone().unwrap_or_default(),
            modified_on: group
                .modified_on
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
            modified_by: group.modified_by.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    let table = Table::new(rows)
        .with(TableStyle::ascii_rounded())
        .to_string();

    println!("{}", table);
    println!("\nTotal variable groups: {}", groups.len());

    Ok(())
}
