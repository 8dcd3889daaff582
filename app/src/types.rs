use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::nav::{NavEntry, default_entries};

#[cfg(feature = "ssr")]
use axum::extract::FromRef;
#[cfg(feature = "ssr")]
use leptos::config::LeptosOptions;

#[cfg(feature = "ssr")]
#[derive(FromRef, Debug, Clone)]
pub struct AppState {
    pub nav: std::sync::Arc<NavConfig>,
    pub leptos_options: std::sync::Arc<LeptosOptions>,
}

#[cfg(feature = "ssr")]
impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.as_ref().clone()
    }
}

#[derive(Debug, Error)]
pub enum NavConfigError {
    #[error("failed to read navigation config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse navigation config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("navigation entry at position {position} has an empty label")]
    EmptyLabel { position: usize },
    #[error("navigation group {label:?} has no links")]
    EmptyGroup { label: String },
    #[error("navigation group label {label:?} is used more than once")]
    DuplicateGroupLabel { label: String },
}

/// Navigation lists handed to the header by the page templates.
///
/// `entries` replaces the built-in list when present; `after_entries` is
/// appended after the search slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<NavEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_entries: Option<Vec<NavEntry>>,
}

impl NavConfig {
    /// Parses a JSON navigation config and validates it.
    pub fn from_json(json: &str) -> Result<Self, NavConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON navigation config from disk.
    #[cfg(feature = "ssr")]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, NavConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| NavConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The primary list the header renders: the override if set, else the default.
    pub fn primary_entries(&self) -> Vec<NavEntry> {
        self.entries.clone().unwrap_or_else(default_entries)
    }

    pub fn validate(&self) -> Result<(), NavConfigError> {
        for list in [&self.entries, &self.after_entries].into_iter().flatten() {
            validate_list(list)?;
        }
        Ok(())
    }
}

fn validate_list(entries: &[NavEntry]) -> Result<(), NavConfigError> {
    let mut group_labels = HashSet::new();
    for (position, entry) in entries.iter().enumerate() {
        if entry.content().trim().is_empty() {
            return Err(NavConfigError::EmptyLabel { position });
        }
        if let NavEntry::Group(group) = entry {
            if group.children.is_empty() {
                return Err(NavConfigError::EmptyGroup {
                    label: group.content.clone(),
                });
            }
            if group.children.iter().any(|c| c.content.trim().is_empty()) {
                return Err(NavConfigError::EmptyLabel { position });
            }
            if !group_labels.insert(group.content.as_str()) {
                return Err(NavConfigError::DuplicateGroupLabel {
                    label: group.content.clone(),
                });
            }
        }
    }
    Ok(())
}
