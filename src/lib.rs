// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Variable Group Sync (vgsync) - Library
//!
//! Synchronizes Azure DevOps variable groups ("libraries") with local files
//! in two interchange formats: line-oriented `.env` text and structured JSON.
//!
//! ## Components
//!
//! - **Codec** (`codec`) - parse/serialize between files and the canonical
//!   variable list, with secret redaction on export
//! - **Registry client** (`registry`) - authenticated, paginated access to
//!   the variable group REST API behind the `VariableGroupRegistry` trait
//! - **Engines** (`engine`) - create-vs-replace reconciliation for imports,
//!   read+format for exports
//! - **Credential store** (`credentials`) - one PAT per (project, user)
//!
//! The engines are pure request/response functions: collaborators are passed
//! in per call and nothing is retained between calls beyond the pagination
//! cursor a listing session holds.

pub mod cli;
pub mod codec;
pub mod commands;
pub mod config;
pub mod credentials;
pub mod engine;
pub mod error;
pub mod models;
pub mod registry;

// Re-export commonly used items
pub use cli::{AuthCommands, Cli, Commands, ConnectionArgs};
pub use codec::{FileKind, ParsedImport, SerializedFile};
pub use config::ProjectContext;
pub use credentials::{CredentialStore, FileCredentialStore};
pub use engine::{export_group, import_library};
pub use error::{Result, VgSyncError};
pub use models::{
    ExportFormat, ExportPolicy, ImportIntent, ImportOutcome, Variable, VariableGroup,
    VariableGroupSummary,
};
pub use registry::{AzureDevOpsRegistry, GroupPage, PageCursor, VariableGroupRegistry};
