// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Create-vs-replace reconciliation for imports

use crate::error::{Result, VgSyncError};
use crate::models::{GroupPayload, ImportIntent, ImportOutcome};
use crate::registry::VariableGroupRegistry;

/// Reconcile an import intent against the remote namespace and execute it
///
/// The full namespace is listed before deciding; names compare
/// case-insensitively. The list-then-write sequence is not transactional —
/// a concurrent create of a same-named group by another actor can slip
/// between the two steps. That race is accepted; no optimistic-concurrency
/// check is sent with the replace.
///
/// All-or-nothing from the caller's perspective: the registry applies the
/// create/replace atomically, so a write failure leaves it in its prior
/// state and is reported without retry.
pub async fn import_library(
    registry: &dyn VariableGroupRegistry,
    credential: &str,
    project_name: &str,
    project_id: &str,
    intent: ImportIntent,
) -> Result<ImportOutcome> {
    let existing = registry.list_all_groups(credential, project_name).await?;

    let target_lower = intent.target_name.to_lowercase();
    let matches: Vec<_> = existing
        .iter()
        .filter(|group| group.name.to_lowercase() == target_lower)
        .collect();

    // Names are supposed to be unique within a project; if the registry
    // holds duplicates anyway, the first listing match wins.
    if matches.len() > 1 {
        log::warn!(
            "Registry holds {} groups matching \"{}\"; using id {}",
            matches.len(),
            intent.target_name,
            matches[0].id
        );
    }

    match matches.first() {
        Some(group) => {
            if !intent.replace_existing {
                return Err(VgSyncError::NameCollision(intent.target_name));
            }

            let payload = build_payload(&intent, project_id, project_name);
            registry
                .replace_group(credential, project_name, group.id, &payload)
                .await?;
            Ok(ImportOutcome {
                created: false,
                replaced: true,
            })
        }
        None => {
            let payload = build_payload(&intent, project_id, project_name);
            registry
                .create_group(credential, project_name, &payload)
                .await?;
            Ok(ImportOutcome {
                created: true,
                replaced: false,
            })
        }
    }
}

fn build_payload(intent: &ImportIntent, project_id: &str, project_name: &str) -> GroupPayload {
    GroupPayload::new(
        &intent.target_name,
        &intent.variables,
        project_id,
        project_name,
    )
}
