//! Comparator configuration.

use std::path::{Path, PathBuf};

use lp_entries::{DEFAULT_INITIAL_ENTRIES, DEFAULT_MIN_ENTRIES};
use lp_history::{DEFAULT_DATE_FORMAT, HistoryOptions, MAX_HISTORY};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Per-user directory holding the history file.
pub fn default_storage_dir() -> PathBuf {
    if let Some(data) = dirs::data_local_dir() {
        data.join("literprice")
    } else {
        PathBuf::from(".literprice")
    }
}

/// Knobs shared by every front end. All fields are optional in YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComparatorConfig {
    /// Rows that can never be removed.
    pub min_entries: usize,
    /// Blank rows a new form starts with.
    pub initial_entries: usize,
    /// History records kept.
    pub max_history: usize,
    /// Where history is stored; `None` means [`default_storage_dir`].
    pub storage_dir: Option<PathBuf>,
    pub currency_symbol: String,
    /// strftime pattern for history timestamps.
    pub date_format: String,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            min_entries: DEFAULT_MIN_ENTRIES,
            initial_entries: DEFAULT_INITIAL_ENTRIES,
            max_history: MAX_HISTORY,
            storage_dir: None,
            currency_symbol: "R$".to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl ComparatorConfig {
    /// Load and validate a YAML config file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigFileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        let config: ComparatorConfig = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.min_entries == 0 {
            return Err(AppError::Config(
                "min_entries must be at least 1".to_string(),
            ));
        }
        if self.initial_entries < self.min_entries {
            return Err(AppError::Config(format!(
                "initial_entries ({}) must not be below min_entries ({})",
                self.initial_entries, self.min_entries
            )));
        }
        if let Some(problem) = self.history_options().problem() {
            return Err(AppError::Config(problem));
        }
        Ok(())
    }

    pub fn resolved_storage_dir(&self) -> PathBuf {
        self.storage_dir.clone().unwrap_or_else(default_storage_dir)
    }

    pub fn history_options(&self) -> HistoryOptions {
        HistoryOptions {
            max_records: self.max_history,
            date_format: self.date_format.clone(),
        }
    }
}
