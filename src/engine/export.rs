// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Export one variable group to an interchange file

use crate::codec::{self, SerializedFile};
use crate::error::Result;
use crate::models::ExportPolicy;
use crate::registry::VariableGroupRegistry;

/// Read one full group and serialize it per policy
///
/// A single fetch is enough: a group's variable set is bounded and returned
/// whole. The caller only receives bytes after a complete, successful
/// read+format cycle — a failed read surfaces as `RegistryUnavailable` and
/// nothing is produced.
pub async fn export_group(
    registry: &dyn VariableGroupRegistry,
    credential: &str,
    project: &str,
    group_id: u64,
    policy: &ExportPolicy,
) -> Result<SerializedFile> {
    let group = registry.read_group(credential, project, group_id).await?;
    codec::serialize(&group.name, &group.variables, policy)
}
