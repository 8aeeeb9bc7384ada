use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Defaults applied to every data table in the dashboard.
///
/// Loaded from the `[table]` section of `dashboard.toml`. Every field has a
/// default so that a missing or partial config file still yields usable
/// tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TableConfig {
    /// Quiet period before a text filter emits its value.
    pub debounce_ms: u64,
    pub default_page_size: u64,
    pub page_size_options: Vec<u64>,
    pub loading_message: String,
    pub empty_message: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            default_page_size: 20,
            page_size_options: vec![10, 20, 50, 100],
            loading_message: "Loading...".to_string(),
            empty_message: "No data available".to_string(),
        }
    }
}

/// Top-level config file structure matching `dashboard.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DashboardConfig {
    #[serde(default)]
    pub table: TableConfig,
}

impl DashboardConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(source)?)
    }
}
