//! Configuration Management
//!
//! Handles persistent settings storage for azgroups.

use crate::resource::GroupBy;
use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::path::{Path, PathBuf};

/// Keys of the global settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    FocusedGroup,
    GroupBy,
}

impl Setting {
    pub fn key(self) -> &'static str {
        match self {
            Setting::FocusedGroup => "focusedGroup",
            Setting::GroupBy => "groupBy",
        }
    }
}

/// Persisted key-value settings
pub trait SettingsStore {
    /// Write a global setting; `None` stores null
    fn update_global_setting(
        &mut self,
        setting: Setting,
        value: Option<String>,
    ) -> impl Future<Output = Result<()>>;

    fn global_setting(&self, setting: Setting) -> Option<String>;
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Group the tree is focused on
    #[serde(default)]
    pub focused_group: Option<String>,
    /// Last used grouping axis
    #[serde(default)]
    pub group_by: Option<GroupBy>,
    /// File this config was loaded from
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Config {
    /// Get the default config file path (config dir, else `~/.azgroups`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("azgroups"))
            .or_else(|| dirs::home_dir().map(|h| h.join(".azgroups")))
            .map(|dir| dir.join("settings.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::at(path),
            None => {
                tracing::warn!("No config or home directory; settings will not persist");
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit file, defaulting when unreadable
    pub fn at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut config = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed settings {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        config.path = Some(path);
        config
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            bail!("No settings file location available");
        };

        // Create parent directory
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;

        Ok(())
    }

    /// Get effective grouping axis (CLI > config > resource group)
    pub fn effective_group_by(&self, cli: Option<GroupBy>) -> GroupBy {
        cli.or(self.group_by).unwrap_or_default()
    }

    /// Set grouping axis and save
    pub fn set_group_by(&mut self, axis: GroupBy) -> Result<()> {
        self.commit(|config| config.group_by = Some(axis))
    }

    /// Apply `change` in memory only once it has been written to disk
    fn commit(&mut self, change: impl FnOnce(&mut Self)) -> Result<()> {
        let mut staged = self.clone();
        change(&mut staged);
        staged.save()?;
        *self = staged;
        Ok(())
    }
}

impl SettingsStore for Config {
    async fn update_global_setting(
        &mut self,
        setting: Setting,
        value: Option<String>,
    ) -> Result<()> {
        match setting {
            Setting::FocusedGroup => self.commit(|config| config.focused_group = value)?,
            Setting::GroupBy => {
                let axis = match value {
                    Some(v) => Some(
                        serde_json::from_value(serde_json::Value::String(v.clone()))
                            .map_err(|_| anyhow!("Unknown grouping axis: {}", v))?,
                    ),
                    None => None,
                };
                self.commit(|config| config.group_by = axis)?
            }
        }
        tracing::debug!("Updated setting {}", setting.key());
        Ok(())
    }

    fn global_setting(&self, setting: Setting) -> Option<String> {
        match setting {
            Setting::FocusedGroup => self.focused_group.clone(),
            Setting::GroupBy => self
                .group_by
                .and_then(|axis| serde_json::to_value(axis).ok())
                .and_then(|v| v.as_str().map(String::from)),
        }
    }
}
