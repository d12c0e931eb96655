// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Line-oriented `.env` codec

use crate::error::{Result, VgSyncError};
use crate::models::Variable;

/// Heuristic secret classification: a variable is secret if its name
/// contains `secret` or `token` (case-insensitive). Export/import
/// round-tripping depends on this classification staying stable.
pub fn is_secret_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.contains("secret") || lower.contains("token")
}

/// Parse `.env` text into variables, preserving line order
///
/// Blank lines and `#` comment lines are skipped. Every remaining line must
/// contain at least one `=`; only the first `=` splits key from value, so
/// values may themselves contain `=`.
pub fn parse(text: &str, ignore_secrets: bool) -> Result<Vec<Variable>> {
    let mut variables = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((key, raw_value)) = trimmed.split_once('=') else {
            return Err(VgSyncError::MalformedInput(format!(
                "line {}: expected KEY=VALUE",
                index + 1
            )));
        };

        let name = key.trim().to_string();
        if name.is_empty() {
            return Err(VgSyncError::MalformedInput(format!(
                "line {}: missing variable name",
                index + 1
            )));
        }

        let is_secret = is_secret_name(&name);
        let value = if ignore_secrets && is_secret {
            String::new()
        } else {
            unquote(raw_value.trim()).to_string()
        };

        variables.push(Variable {
            name,
            value,
            is_secret,
        });
    }

    Ok(variables)
}

/// Strip one matching pair of surrounding double quotes
fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Serialize variables to `.env` text, insertion order preserved
///
/// With `include_secrets=false` a secret variable is written as the comment
/// line `# KEY=`: its presence stays visible, its value is never written.
pub fn serialize(variables: &[Variable], include_secrets: bool) -> String {
    variables
        .iter()
        .map(|var| {
            if var.is_secret && !include_secrets {
                format!("# {}=", var.name)
            } else {
                format!("{}={}", var.name, var.value)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let text = "HOST=localhost\nPORT=8080\n";
        let vars = parse(text, false).unwrap();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[0].name, "HOST");
        assert_eq!(vars[0].value, "localhost");
        assert!(!vars[0].is_secret);
    }

    #[test]
    fn test_parse_splits_on_first_equals_only() {
        let vars = parse("URL=https://a.b/c=d", false).unwrap();
        assert_eq!(vars[0].name, "URL");
        assert_eq!(vars[0].value, "https://a.b/c=d");
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let text = "\n# FOO=bar\n   # indented comment\nREAL=1\n\n";
        let vars = parse(text, false).unwrap();
        assert_eq!(vars.len(), 1);
        assert_eq!(vars[0].name, "REAL");
    }

    #[test]
    fn test_parse_secret_heuristic() {
        let vars = parse("API_TOKEN=abc\nMY_SECRET=xyz\nPORT=80", false).unwrap();
        assert!(vars[0].is_secret);
        assert!(vars[1].is_secret);
        assert!(!vars[2].is_secret);
    }

    #[test]
    fn test_parse_ignore_secrets_blanks_value_keeps_flag() {
        let vars = parse("API_TOKEN=abc\nPORT=80", true).unwrap();
        assert_eq!(vars[0].value, "");
        assert!(vars[0].is_secret);
        assert_eq!(vars[1].value, "80");
    }

    #[test]
    fn test_parse_strips_matching_quotes() {
        let vars = parse("A=\"quoted value\"\nB=\"unbalanced", false).unwrap();
        assert_eq!(vars[0].value, "quoted value");
        assert_eq!(vars[1].value, "\"unbalanced");
    }

    #[test]
    fn test_parse_rejects_line_without_equals() {
        let err = parse("JUSTAKEY", false).unwrap_err();
        assert!(matches!(err, VgSyncError::MalformedInput(_)));
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        let err = parse("=orphan-value", false).unwrap_err();
        assert!(matches!(err, VgSyncError::MalformedInput(_)));
    }

    #[test]
    fn test_parse_crlf_line_endings() {
        let vars = parse("A=1\r\nB=2\r\n", false).unwrap();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[1].value, "2");
    }

    #[test]
    fn test_serialize_redacts_secrets_as_comments() {
        let vars = vec![
            Variable::new("DB_SECRET", "x", true),
            Variable::new("PORT", "80", false),
        ];
        let out = serialize(&vars, false);
        assert_eq!(out, "# DB_SECRET=\nPORT=80");
        assert!(!out.contains('x'));
    }

    #[test]
    fn test_round_trip_preserves_triples_in_order() {
        let text = "HOST=db.internal\nAPI_TOKEN=tkn\nFLAGS=a=b=c";
        let parsed = parse(text, false).unwrap();
        let reserialized = serialize(&parsed, true);
        let reparsed = parse(&reserialized, false).unwrap();
        assert_eq!(parsed, reparsed);
    }
}
