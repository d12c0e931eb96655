// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Personal access token storage
//!
//! The engine only ever sees the `CredentialStore` interface: one secret per
//! (project, user), fetched for the duration of a single authenticated call.
//! A missing secret is `Ok(None)`, never an empty string — the caller decides
//! how to prompt for one.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::error::Result;

/// One stored secret per (project, user)
pub trait CredentialStore {
    fn get(&self, project: &str, user: &str) -> Result<Option<String>>;
    fn set(&self, project: &str, user: &str, secret: &str) -> Result<()>;
    fn clear(&self, project: &str, user: &str) -> Result<()>;
}

/// JSON-file-backed store under the platform config directory
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Store at `{config_dir}/vgsync/credentials.json`
    pub fn default_location() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join("vgsync").join("credentials.json"),
        }
    }

    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn key(project: &str, user: &str) -> String {
        format!("{}/{}", project, user)
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let text = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn save(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(map)?)?;

        // Owner-only on platforms that support it
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, project: &str, user: &str) -> Result<Option<String>> {
        Ok(self.load()?.get(&Self::key(project, user)).cloned())
    }

    fn set(&self, project: &str, user: &str, secret: &str) -> Result<()> {
        let mut map = self.load()?;
        map.insert(Self::key(project, user), secret.to_string());
        self.save(&map)
    }

    fn clear(&self, project: &str, user: &str) -> Result<()> {
        let mut map = self.load()?;
        map.remove(&Self::key(project, user));
        self.save(&map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_get_clear_round_trip() {
        let dir = tempdir().unwrap();
        let store = FileCredentialStore::at_path(dir.path().join("creds.json"));

        assert_eq!(store.get("proj", "alice").unwrap(), None);

        store.set("proj", "alice", "pat-123").unwrap();
        assert_eq!(store.get("proj", "alice").unwrap().as_deref(), Some("pat-123"));

        // Keys are scoped by project and user
        assert_eq!(store.get("proj", "bob").unwrap(), None);
        assert_eq!(store.get("other", "alice").unwrap(), None);

        store.clear("proj", "alice").unwrap();
        assert_eq!(store.get("proj", "alice").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites_existing_secret() {
        let dir = tempdir().unwrap();
        let store = FileCredentialStore::at_path(dir.path().join("creds.json"));

        store.set("proj", "alice", "old").unwrap();
        store.set("proj", "alice", "new").unwrap();
        assert_eq!(store.get("proj", "alice").unwrap().as_deref(), Some("new"));
    }

    #[cfg(unix)]
    #[test]
    fn test_credentials_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("creds.json");
        let store = FileCredentialStore::at_path(path.clone());
        store.set("proj", "alice", "pat").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
