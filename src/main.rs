// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Variable Group Sync (vgsync) - Main entry point
//!
//! A CLI tool to sync Azure DevOps variable groups with local .env and JSON
//! files.

use anyhow::Result;
use clap::Parser;

use vgsync::cli::{AuthCommands, Cli, Commands};
use vgsync::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // ====================================================================
        // List Commands
        // ====================================================================
        Commands::List => {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            rt.block_on(commands::list_groups(&cli.connection))
        }

        // ====================================================================
        // Export Commands
        // ====================================================================
        Commands::Export {
            id,
            name,
            format,
            include_secrets,
            out,
        } => {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            rt.block_on(commands::export_group_cmd(
                &cli.connection,
                id,
                name.as_deref(),
                &format,
                include_secrets,
                out.as_deref(),
            ))
        }

        // ====================================================================
        // Import Commands
        // ====================================================================
        Commands::Import {
            file,
            name,
            replace,
            ignore_secrets,
        } => {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            rt.block_on(commands::import_file(
                &cli.connection,
                &file,
                name.as_deref(),
                replace,
                ignore_secrets,
            ))
        }

        // ====================================================================
        // Auth Commands
        // ====================================================================
        Commands::Auth { command } => match command {
            AuthCommands::Set { token } => commands::auth_set(&cli.connection, &token),
            AuthCommands::Clear => commands::auth_clear(&cli.connection),
            AuthCommands::Show => commands::auth_show(&cli.connection),
        },
    }
}
