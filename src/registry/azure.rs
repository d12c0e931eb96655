// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Azure DevOps REST implementation of the variable group registry
//!
//! Wire contract (api-version 7.0):
//! - List: `GET {org}/{project}/_apis/distributedtask/variablegroups?api-version=7.0&$top={n}[&continuationToken={t}]`
//! - Read: `GET .../variablegroups/{id}?api-version=7.0`
//! - Create: `POST .../variablegroups?api-version=7.0`
//! - Replace: `PUT .../variablegroups/{id}?api-version=7.0`
//!
//! Authentication is a PAT sent as `Authorization: Basic base64(":" + pat)`;
//! the continuation cursor arrives in the `x-ms-continuationtoken` response
//! header.

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use super::{GroupPage, PageCursor, VariableGroupRegistry};
use crate::error::{Result, VgSyncError};
use crate::models::{GroupPayload, ListGroupsResponse, VariableGroup, WireGroup};

const API_VERSION: &str = "7.0";
const CONTINUATION_HEADER: &str = "x-ms-continuationtoken";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Registry client bound to one explicit organization URL
pub struct AzureDevOpsRegistry {
    organization_url: String,
    client: reqwest::Client,
}

impl AzureDevOpsRegistry {
    /// Build a client for the given organization URL
    ///
    /// The URL is always explicit; there is no process-wide default
    /// organization.
    pub fn new(organization_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(format!("vgsync/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            organization_url: organization_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn groups_url(&self, project: &str) -> String {
        format!(
            "{}/{}/_apis/distributedtask/variablegroups",
            self.organization_url, project
        )
    }

    fn list_url(&self, project: &str, top: u32, cursor: Option<&PageCursor>) -> String {
        let mut url = format!(
            "{}?api-version={}&$top={}",
            self.groups_url(project),
            API_VERSION,
            top
        );
        if let Some(cursor) = cursor {
            url.push_str("&continuationToken=");
            url.push_str(&urlencoding::encode(cursor.as_str()));
        }
        url
    }

    fn group_url(&self, project: &str, id: u64) -> String {
        format!(
            "{}/{}?api-version={}",
            self.groups_url(project),
            id,
            API_VERSION
        )
    }

    fn auth_header(pat: &str) -> String {
        format!("Basic {}", BASE64.encode(format!(":{}", pat)))
    }
}

fn ensure_success(status: reqwest::StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(VgSyncError::RegistryUnavailable {
            status: status.as_u16(),
        })
    }
}

#[async_trait]
impl VariableGroupRegistry for AzureDevOpsRegistry {
    async fn list_groups(
        &self,
        credential: &str,
        project: &str,
        top: u32,
        cursor: Option<&PageCursor>,
    ) -> Result<GroupPage> {
        let url = self.list_url(project, top, cursor);
        log::debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", Self::auth_header(credential))
            .header("Accept", "application/json")
            .send()
            .await?;

        ensure_success(response.status())?;

        let continuation = response
            .headers()
            .get(CONTINUATION_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|token| !token.is_empty())
            .map(PageCursor::new);

        let body: ListGroupsResponse = response.json().await?;

        Ok(GroupPage {
            groups: body.value.into_iter().map(Into::into).collect(),
            continuation,
        })
    }

    async fn read_group(&self, credential: &str, project: &str, id: u64) -> Result<VariableGroup> {
        let url = self.group_url(project, id);
        log::debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", Self::auth_header(credential))
            .header("Accept", "application/json")
            .send()
            .await?;

        ensure_success(response.status())?;

        let wire: WireGroup = response.json().await?;
        Ok(wire.into())
    }

    async fn create_group(
        &self,
        credential: &str,
        project: &str,
        payload: &GroupPayload,
    ) -> Result<VariableGroup> {
        let url = format!("{}?api-version={}", self.groups_url(project), API_VERSION);
        log::debug!("Creating variable group \"{}\"", payload.name);

        let response = self
            .client
            .post(&url)
            .header("Authorization", Self::auth_header(credential))
            .json(payload)
            .send()
            .await?;

        ensure_success(response.status())?;

        let wire: WireGroup = response.json().await?;
        Ok(wire.into())
    }

    async fn replace_group(
        &self,
        credential: &str,
        project: &str,
        id: u64,
        payload: &GroupPayload,
    ) -> Result<VariableGroup> {
        let url = self.group_url(project, id);
        log::debug!("Replacing variable group {} (\"{}\")", id, payload.name);

        let response = self
            .client
            .put(&url)
            .header("Authorization", Self::auth_header(credential))
            .json(payload)
            .send()
            .await?;

        ensure_success(response.status())?;

        let wire: WireGroup = response.json().await?;
        Ok(wire.into())
    }
}
