// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Structured JSON codec
//!
//! Canonical shape: `{ "name": ..., "variables": [{name, value, type}] }`.
//! A bare array of records is accepted on read for compatibility with
//! exports that predate the wrapper object.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ParsedImport;
use crate::error::{Result, VgSyncError};
use crate::models::Variable;

/// One record in the structured interchange form
#[derive(Debug, Clone, Serialize, Deserialize)]
struct VariableRecord {
    name: String,
    #[serde(default)]
    value: String,
    #[serde(rename = "type", default = "default_kind")]
    kind: String,
}

fn default_kind() -> String {
    "normal".to_string()
}

#[derive(Debug, Serialize)]
struct Document<'a> {
    name: &'a str,
    variables: Vec<VariableRecord>,
}

/// Parse structured JSON; `fallback_name` is the file stem
pub fn parse(text: &str, fallback_name: &str) -> Result<ParsedImport> {
    let root: Value = serde_json::from_str(text)
        .map_err(|e| VgSyncError::MalformedInput(format!("invalid JSON: {}", e)))?;

    match root {
        // Legacy bare-array export
        Value::Array(items) => Ok(ParsedImport {
            suggested_name: fallback_name.to_string(),
            variables: parse_records(items)?,
        }),
        Value::Object(mut obj) => {
            let Some(Value::Array(items)) = obj.remove("variables") else {
                return Err(VgSyncError::MalformedInput(
                    "expected a 'variables' array".to_string(),
                ));
            };
            let suggested_name = obj
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| fallback_name.to_string());
            Ok(ParsedImport {
                suggested_name,
                variables: parse_records(items)?,
            })
        }
        _ => Err(VgSyncError::MalformedInput(
            "expected an object or array at the JSON root".to_string(),
        )),
    }
}

fn parse_records(items: Vec<Value>) -> Result<Vec<Variable>> {
    items
        .into_iter()
        .map(|item| {
            let record: VariableRecord = serde_json::from_value(item)
                .map_err(|e| VgSyncError::MalformedInput(format!("bad variable record: {}", e)))?;
            Ok(Variable {
                name: record.name,
                value: record.value,
                is_secret: record.kind == "secret",
            })
        })
        .collect()
}

/// Serialize to the canonical wrapper form
///
/// With `include_secrets=false`, secret values are emitted as empty strings
/// but the records stay in the array, so a later import still sees the
/// variable and its secret flag.
pub fn serialize(collection_name: &str, variables: &[Variable], include_secrets: bool) -> Result<String> {
    let records = variables
        .iter()
        .map(|var| VariableRecord {
            name: var.name.clone(),
            value: if var.is_secret && !include_secrets {
                String::new()
            } else {
                var.value.clone()
            },
            kind: if var.is_secret { "secret" } else { "normal" }.to_string(),
        })
        .collect();

    let doc = Document {
        name: collection_name,
        variables: records,
    };
    Ok(serde_json::to_string(&doc)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wrapper_object() {
        let text = r#"{"name":"backend","variables":[{"name":"A","value":"1","type":"normal"}]}"#;
        let parsed = parse(text, "file-stem").unwrap();
        assert_eq!(parsed.suggested_name, "backend");
        assert_eq!(parsed.variables.len(), 1);
        assert_eq!(parsed.variables[0].name, "A");
        assert!(!parsed.variables[0].is_secret);
    }

    #[test]
    fn test_parse_wrapper_without_name_uses_fallback() {
        let text = r#"{"variables":[{"name":"A","value":"1","type":"secret"}]}"#;
        let parsed = parse(text, "file-stem").unwrap();
        assert_eq!(parsed.suggested_name, "file-stem");
        assert!(parsed.variables[0].is_secret);
    }

    #[test]
    fn test_parse_legacy_bare_array() {
        let text = r#"[{"name":"A","value":"1","type":"normal"},{"name":"B","value":"2"}]"#;
        let parsed = parse(text, "legacy").unwrap();
        assert_eq!(parsed.suggested_name, "legacy");
        assert_eq!(parsed.variables.len(), 2);
        // Missing type defaults to normal
        assert!(!parsed.variables[1].is_secret);
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(matches!(
            parse(r#"{"foo":"bar"}"#, "x"),
            Err(VgSyncError::MalformedInput(_))
        ));
        assert!(matches!(
            parse(r#""just a string""#, "x"),
            Err(VgSyncError::MalformedInput(_))
        ));
        assert!(matches!(
            parse("{not json", "x"),
            Err(VgSyncError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_serialize_redacts_secret_values_but_keeps_records() {
        let vars = vec![
            Variable::new("DB_SECRET", "x", true),
            Variable::new("PORT", "80", false),
        ];
        let out = serialize("backend", &vars, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["name"], "backend");
        let records = value["variables"].as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["name"], "DB_SECRET");
        assert_eq!(records[0]["value"], "");
        assert_eq!(records[0]["type"], "secret");
        assert!(!out.contains("\"x\""));
    }

    #[test]
    fn test_round_trip_preserves_metadata() {
        let vars = vec![
            Variable::new("A", "1", false),
            Variable::new("DB_SECRET", "s3cr3t", true),
        ];
        let out = serialize("grp", &vars, true).unwrap();
        let parsed = parse(&out, "ignored").unwrap();
        assert_eq!(parsed.suggested_name, "grp");
        assert_eq!(parsed.variables, vars);
    }
}
