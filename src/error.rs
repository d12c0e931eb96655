// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Error types for vgsync

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VgSyncError {
    #[error("Unsupported file format: {0}. Use .env or .json")]
    UnsupportedFormat(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("A variable group named \"{0}\" already exists. Pick another name or enable replacement")]
    NameCollision(String),

    #[error("Registry request failed: HTTP {status}")]
    RegistryUnavailable { status: u16 },

    #[error("No personal access token stored for project \"{project}\" and user \"{user}\"")]
    CredentialMissing { project: String, user: String },

    #[error("Variable group not found: {0}")]
    GroupNotFound(String),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VgSyncError>;
