// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Authenticated, paginated access to the variable group registry

pub mod azure;

pub use azure::AzureDevOpsRegistry;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{GroupPayload, VariableGroup, VariableGroupSummary};

/// Opaque continuation token for a paged listing
///
/// Owned by exactly one logical listing session; must not be reused across
/// sessions with different parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor(String);

impl PageCursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One page of a group listing
#[derive(Debug)]
pub struct GroupPage {
    pub groups: Vec<VariableGroupSummary>,
    /// Cursor for the next page; absent on the last page
    pub continuation: Option<PageCursor>,
}

/// Page size used when walking a full listing
pub const DEFAULT_PAGE_SIZE: u32 = 200;

/// Read/write access to the remote variable group registry
///
/// The credential is supplied per call and never cached by an
/// implementation. Any non-success remote response surfaces as
/// `RegistryUnavailable`; nothing here retries — the remote is a rate-limited
/// third-party API and retry policy belongs to the caller. Callers must also
/// serialize successive page fetches of one listing session.
#[async_trait]
pub trait VariableGroupRegistry: Send + Sync {
    /// Fetch one page of the project's variable groups
    ///
    /// Safe to repeat with the same cursor (no server mutation); the
    /// continuation cursor is surfaced unchanged.
    async fn list_groups(
        &self,
        credential: &str,
        project: &str,
        top: u32,
        cursor: Option<&PageCursor>,
    ) -> Result<GroupPage>;

    /// Read one full variable group, variables included
    async fn read_group(&self, credential: &str, project: &str, id: u64) -> Result<VariableGroup>;

    /// Create a new variable group from a full payload
    async fn create_group(
        &self,
        credential: &str,
        project: &str,
        payload: &GroupPayload,
    ) -> Result<VariableGroup>;

    /// Replace an existing variable group with a full payload
    async fn replace_group(
        &self,
        credential: &str,
        project: &str,
        id: u64,
        payload: &GroupPayload,
    ) -> Result<VariableGroup>;

    /// Walk every page of the project's namespace, strictly in cursor order
    async fn list_all_groups(
        &self,
        credential: &str,
        project: &str,
    ) -> Result<Vec<VariableGroupSummary>> {
        let mut groups = Vec::new();
        let mut cursor: Option<PageCursor> = None;

        loop {
            let page = self
                .list_groups(credential, project, DEFAULT_PAGE_SIZE, cursor.as_ref())
                .await?;
            groups.extend(page.groups);

            match page.continuation {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        Ok(groups)
    }
}
