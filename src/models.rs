// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Data models for Azure DevOps variable groups

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Canonical Types
// ============================================================================

/// One named value within a variable group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// Reconciliation key within the group (non-empty, case-sensitive)
    pub name: String,
    pub value: String,
    pub is_secret: bool,
}

impl Variable {
    pub fn new(name: impl Into<String>, value: impl Into<String>, is_secret: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            is_secret,
        }
    }
}

/// A variable group ("library") as held by the remote registry
///
/// Groups are created and destroyed only by the registry. The engine never
/// mutates one in place; writes always submit a full payload.
#[derive(Debug, Clone)]
pub struct VariableGroup {
    /// Server-assigned id, present only once persisted
    pub id: Option<u64>,
    /// Unique within a project, compared case-insensitively
    pub name: String,
    /// Variables in the order the server returned them
    pub variables: Vec<Variable>,
    pub modified_on: Option<DateTime<Utc>>,
    pub modified_by: Option<String>,
}

/// Listing row for a variable group (variables not included)
#[derive(Debug, Clone)]
pub struct VariableGroupSummary {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub modified_on: Option<DateTime<Utc>>,
    pub modified_by: Option<String>,
}

/// One import operation, constructed per call and consumed once
#[derive(Debug, Clone)]
pub struct ImportIntent {
    pub target_name: String,
    pub variables: Vec<Variable>,
    pub replace_existing: bool,
}

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Env,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Env => "env",
            Self::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Env => "text/plain",
            Self::Json => "application/json",
        }
    }
}

/// Redaction policy for one export call
#[derive(Debug, Clone, Copy)]
pub struct ExportPolicy {
    pub format: ExportFormat,
    pub include_secrets: bool,
}

/// Outcome of a reconciled import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOutcome {
    pub created: bool,
    pub replaced: bool,
}

// ============================================================================
// Wire Types (Azure DevOps REST 7.0)
// ============================================================================

/// Variable group as returned by the REST API
///
/// Variables arrive as a JSON object keyed by name; a secret variable carries
/// `isSecret: true` and no `value` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireGroup {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub variables: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub modified_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified_by: Option<WireIdentity>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireIdentity {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub unique_name: Option<String>,
}

impl WireIdentity {
    fn label(&self) -> Option<String> {
        self.display_name
            .clone()
            .or_else(|| self.unique_name.clone())
    }
}

/// One variable inside the wire object form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireVariable {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub is_secret: Option<bool>,
}

/// Body of the paged GET listing
#[derive(Debug, Deserialize)]
pub struct ListGroupsResponse {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub value: Vec<WireGroup>,
}

impl From<WireGroup> for VariableGroup {
    fn from(wire: WireGroup) -> Self {
        let modified_by = wire.modified_by.as_ref().and_then(WireIdentity::label);
        let variables = wire
            .variables
            .into_iter()
            .map(|(name, value)| {
                let var: WireVariable = serde_json::from_value(value).unwrap_or_default();
                Variable {
                    name,
                    // Secret values are withheld by the server
                    value: var.value.unwrap_or_default(),
                    is_secret: var.is_secret.unwrap_or(false),
                }
            })
            .collect();

        VariableGroup {
            id: Some(wire.id),
            name: wire.name,
            variables,
            modified_on: wire.modified_on,
            modified_by,
        }
    }
}

impl From<WireGroup> for VariableGroupSummary {
    fn from(wire: WireGroup) -> Self {
        let modified_by = wire.modified_by.as_ref().and_then(WireIdentity::label);
        VariableGroupSummary {
            id: wire.id,
            name: wire.name,
            description: wire.description,
            modified_on: wire.modified_on,
            modified_by,
        }
    }
}

// ============================================================================
// Write Payload
// ============================================================================

/// POST/PUT body for create and replace
///
/// The project reference block is required by the registry's authorization
/// model; without it the write is rejected.
#[derive(Debug, Clone, Serialize)]
pub struct GroupPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub group_type: String,
    pub variables: serde_json::Map<String, serde_json::Value>,
    #[serde(rename = "variableGroupProjectReferences")]
    pub project_references: Vec<GroupProjectReference>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupProjectReference {
    pub name: String,
    #[serde(rename = "projectReference")]
    pub project_reference: ProjectReference,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectReference {
    pub id: String,
    pub name: String,
}

impl GroupPayload {
    /// Build a full write payload scoped to one project
    pub fn new(name: &str, variables: &[Variable], project_id: &str, project_name: &str) -> Self {
        let mut wire_vars = serde_json::Map::new();
        for var in variables {
            wire_vars.insert(
                var.name.clone(),
                serde_json::json!({
                    "value": var.value,
                    "isSecret": var.is_secret,
                }),
            );
        }

        GroupPayload {
            name: name.to_string(),
            group_type: "Vsts".to_string(),
            variables: wire_vars,
            project_references: vec![GroupProjectReference {
                name: name.to_string(),
                project_reference: ProjectReference {
                    id: project_id.to_string(),
                    name: project_name.to_string(),
                },
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_group_to_variable_group() {
        let json = serde_json::json!({
            "id": 12,
            "name": "backend-vars",
            "variables": {
                "DB_HOST": { "value": "db.internal" },
                "DB_SECRET": { "isSecret": true }
            },
            "modifiedBy": { "displayName": "Jo Dev" }
        });

        let wire: WireGroup = serde_json::from_value(json).unwrap();
        let group: VariableGroup = wire.into();

        assert_eq!(group.id, Some(12));
        assert_eq!(group.name, "backend-vars");
        assert_eq!(group.modified_by.as_deref(), Some("Jo Dev"));
        assert_eq!(group.variables.len(), 2);

        let secret = group.variables.iter().find(|v| v.name == "DB_SECRET").unwrap();
        assert!(secret.is_secret);
        // Withheld secret value maps to empty string
        assert_eq!(secret.value, "");
    }

    #[test]
    fn test_payload_shape() {
        let vars = vec![
            Variable::new("PORT", "8080", false),
            Variable::new("API_TOKEN", "t0k3n", true),
        ];
        let payload = GroupPayload::new("web-config", &vars, "proj-guid", "WebProject");
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["type"], "Vsts");
        assert_eq!(json["name"], "web-config");
        assert_eq!(json["variables"]["PORT"]["value"], "8080");
        assert_eq!(json["variables"]["PORT"]["isSecret"], false);
        assert_eq!(json["variables"]["API_TOKEN"]["isSecret"], true);

        let refs = json["variableGroupProjectReferences"].as_array().unwrap();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0]["name"], "web-config");
        assert_eq!(refs[0]["projectReference"]["id"], "proj-guid");
        assert_eq!(refs[0]["projectReference"]["name"], "WebProject");
    }
}
