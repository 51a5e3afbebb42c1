// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::directory::Directory;
use crate::error::DirectoryError;
use crate::geo::data::region_ix_arc;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Files written before versioning was introduced have no `schema_version`
/// and read as 0; they are rewritten at this version on load.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub schema_version: u32,
    /// Custom dataset to use instead of the built-in Region IX directory.
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,
    /// Province preselected in cascading pickers.
    #[serde(default)]
    pub default_province: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            dataset_path: None,
            default_province: None,
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("org", "region9", "region9")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .unwrap_or_else(|| PathBuf::from("settings.json"))
    }

    /// Loads from the platform config dir, falling back to defaults.
    pub fn load() -> Self {
        Self::load_or_default(&Self::config_path())
    }

    /// Like `load_from`, but a missing or corrupt file yields defaults.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            log::error!("[Settings] Could not read {:?}, using defaults: {}", path, e);
            Self::default()
        })
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("[Settings] No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let mut settings: Settings = serde_json::from_str(&content).map_err(|e| {
            log::error!("[Settings] JSON Parse error for {:?}: {}", path, e);
            e
        })?;

        if settings.schema_version < CURRENT_SCHEMA_VERSION {
            log::info!(
                "[Settings] Migrating {:?} from schema v{} to v{}",
                path,
                settings.schema_version,
                CURRENT_SCHEMA_VERSION
            );
            settings.schema_version = CURRENT_SCHEMA_VERSION;
            if let Err(e) = settings.save_to(path) {
                log::warn!("[Settings] Could not rewrite migrated settings: {}", e);
            }
        }

        Ok(settings)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        log::debug!("[Settings] Saved to {:?}", path);
        Ok(())
    }

    /// The configured dataset, or the built-in directory when none is set.
    pub fn open_directory(&self) -> Result<Arc<Directory>, DirectoryError> {
        match &self.dataset_path {
            Some(path) => Directory::load(path).map(Arc::new),
            None => Ok(region_ix_arc()),
        }
    }

    /// `default_province`, provided the directory actually has it.
    pub fn default_province_in<'a>(&self, directory: &'a Directory) -> Option<&'a str> {
        let name = self.default_province.as_deref()?;
        match directory.province(name) {
            Some(p) => Some(p.name.as_str()),
            None => {
                log::warn!(
                    "[Settings] Default province '{}' is not in {}",
                    name,
                    directory.name()
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::data::region_ix;

    #[test]
    fn test_default_province_must_exist() {
        let dir = region_ix();
        let mut s = Settings::default();
        assert_eq!(s.default_province_in(dir), None);

        s.default_province = Some("Zamboanga Sibugay".to_string());
        assert_eq!(s.default_province_in(dir), Some("Zamboanga Sibugay"));

        s.default_province = Some("Cebu".to_string());
        assert_eq!(s.default_province_in(dir), None);
    }

    #[test]
    fn test_open_directory_defaults_to_builtin() {
        let dir = Settings::default().open_directory().unwrap();
        assert!(std::ptr::eq(dir.as_ref(), region_ix()));
    }
}
