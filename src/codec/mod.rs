// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Interchange codec for variable group files
//!
//! Converts between the canonical in-memory variable list and two file
//! formats:
//! - Line-oriented `.env` text
//! - Structured JSON (`{name, variables: [{name, value, type}]}`)

pub mod env;
pub mod json;

use std::path::Path;

use crate::error::{Result, VgSyncError};
use crate::models::{ExportFormat, ExportPolicy, Variable};

/// Supported import file kinds, detected from the extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Env,
    Json,
}

impl FileKind {
    /// Detect the file kind from its extension (case-insensitive)
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("env") => Ok(Self::Env),
            Some("json") => Ok(Self::Json),
            Some(other) => Err(VgSyncError::UnsupportedFormat(other.to_string())),
            None => Err(VgSyncError::UnsupportedFormat(file_name.to_string())),
        }
    }
}

/// Result of parsing an import file
#[derive(Debug, Clone)]
pub struct ParsedImport {
    /// Group name suggested by the file: the embedded name for the structured
    /// object form, the file stem otherwise
    pub suggested_name: String,
    pub variables: Vec<Variable>,
}

/// A serialized export ready to hand back to the caller
#[derive(Debug, Clone)]
pub struct SerializedFile {
    pub content: String,
    pub mime_type: &'static str,
    pub file_name: String,
}

fn file_stem(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
        .to_string()
}

/// Parse an import file into the canonical variable set
///
/// `ignore_secrets` blanks the parsed value of heuristically-secret variables
/// in the line-oriented format; the secret flag itself is preserved.
pub fn parse(bytes: &[u8], file_name: &str, ignore_secrets: bool) -> Result<ParsedImport> {
    let kind = FileKind::from_file_name(file_name)?;
    let text = std::str::from_utf8(bytes)
        .map_err(|_| VgSyncError::MalformedInput("file is not valid UTF-8".to_string()))?;

    match kind {
        FileKind::Env => {
            let variables = env::parse(text, ignore_secrets)?;
            Ok(ParsedImport {
                suggested_name: file_stem(file_name),
                variables,
            })
        }
        FileKind::Json => json::parse(text, &file_stem(file_name)),
    }
}

/// Serialize a variable set according to the export policy
pub fn serialize(
    collection_name: &str,
    variables: &[Variable],
    policy: &ExportPolicy,
) -> Result<SerializedFile> {
    let content = match policy.format {
        ExportFormat::Env => env::serialize(variables, policy.include_secrets),
        ExportFormat::Json => json::serialize(collection_name, variables, policy.include_secrets)?,
    };

    Ok(SerializedFile {
        content,
        mime_type: policy.format.mime_type(),
        file_name: format!("{}.{}", collection_name, policy.format.extension()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_detection() {
        assert_eq!(FileKind::from_file_name("vars.env").unwrap(), FileKind::Env);
        assert_eq!(FileKind::from_file_name("VARS.ENV").unwrap(), FileKind::Env);
        assert_eq!(FileKind::from_file_name("vars.json").unwrap(), FileKind::Json);

        assert!(matches!(
            FileKind::from_file_name("vars.yaml"),
            Err(VgSyncError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            FileKind::from_file_name("vars"),
            Err(VgSyncError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_suggested_name_is_file_stem() {
        let parsed = parse(b"A=1\n", "backend.env", false).unwrap();
        assert_eq!(parsed.suggested_name, "backend");
    }

    #[test]
    fn test_serialize_names_file_after_collection() {
        let vars = vec![Variable::new("A", "1", false)];
        let policy = ExportPolicy {
            format: ExportFormat::Json,
            include_secrets: true,
        };
        let file = serialize("backend", &vars, &policy).unwrap();
        assert_eq!(file.file_name, "backend.json");
        assert_eq!(file.mime_type, "application/json");
    }
}
