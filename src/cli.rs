// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! CLI argument definitions using clap derive macros

use clap::{Args, Parser, Subcommand};

/// vgsync - Sync Azure DevOps variable groups with .env and JSON files
#[derive(Parser)]
#[command(name = "vgsync")]
#[command(author = "Nervosys")]
#[command(version)]
#[command(about = "Sync Azure DevOps variable groups with .env and JSON files", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Connection settings shared by every command
#[derive(Args)]
pub struct ConnectionArgs {
    /// Organization URL, e.g. https://dev.azure.com/my-org
    #[arg(long, env = "VGSYNC_ORG_URL", global = true)]
    pub org_url: Option<String>,

    /// Project name
    #[arg(long, env = "VGSYNC_PROJECT", global = true)]
    pub project: Option<String>,

    /// Project id (GUID), required for imports
    #[arg(long, env = "VGSYNC_PROJECT_ID", global = true)]
    pub project_id: Option<String>,

    /// Identity keying the stored credential
    #[arg(long, env = "VGSYNC_USER", default_value = "default", global = true)]
    pub user: String,

    /// Personal access token (overrides the stored credential)
    #[arg(long, env = "VGSYNC_PAT", global = true, hide_env_values = true)]
    pub pat: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    // ========================================================================
    // List Commands
    // ========================================================================
    /// List the project's variable groups
    #[command(visible_alias = "ls")]
    List,

    // ========================================================================
    // Export Commands
    // ========================================================================
    /// Export one variable group to a .env or JSON file
    Export {
        /// Group id
        #[arg(long, conflicts_with = "name")]
        id: Option<u64>,

        /// Group name (resolved case-insensitively)
        #[arg(long)]
        name: Option<String>,

        /// Output format: env or json
        #[arg(long, default_value = "env")]
        format: String,

        /// Write secret values instead of redacting them
        #[arg(long)]
        include_secrets: bool,

        /// Output path (defaults to <group>.<format> in the current directory)
        #[arg(long)]
        out: Option<String>,
    },

    // ========================================================================
    // Import Commands
    // ========================================================================
    /// Import a .env or JSON file as a variable group
    Import {
        /// File to import
        file: String,

        /// Target group name (defaults to the file-suggested name)
        #[arg(long)]
        name: Option<String>,

        /// Replace an existing group with the same name
        #[arg(long)]
        replace: bool,

        /// Blank secret values while parsing
        #[arg(long)]
        ignore_secrets: bool,
    },

    // ========================================================================
    // Auth Commands
    // ========================================================================
    /// Manage the stored personal access token
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
}

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Store a token for the current project and user
    Set {
        /// The personal access token
        token: String,
    },
    /// Remove the stored token
    Clear,
    /// Show whether a token is stored
    Show,
}
