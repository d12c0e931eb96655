// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Project context configuration

use serde::{Deserialize, Serialize};

/// Connection and scope for one registry session
///
/// The organization URL is always supplied explicitly and threaded through
/// every entry point; there is no process-wide default organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectContext {
    /// Base organization URL, e.g. `https://dev.azure.com/acme`
    pub organization_url: String,
    pub project_name: String,
    /// Project GUID; required for write payload project references
    pub project_id: Option<String>,
    /// Identity keying the credential store
    pub user: String,
}

impl ProjectContext {
    pub fn new(
        organization_url: impl Into<String>,
        project_name: impl Into<String>,
        project_id: Option<String>,
        user: impl Into<String>,
    ) -> Self {
        let organization_url = organization_url.into();
        Self {
            organization_url: organization_url.trim_end_matches('/').to_string(),
            project_name: project_name.into(),
            project_id,
            user: user.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_normalized() {
        let ctx = ProjectContext::new("https://dev.azure.com/acme/", "proj", None, "me");
        assert_eq!(ctx.organization_url, "https://dev.azure.com/acme");
    }
}
