//! Configuration types for the office attendance engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::path::PathBuf;

use serde::Deserialize;

use crate::calculation::DEFAULT_MIN_RATE;
use crate::calendar::HolidayTable;

fn default_region() -> String {
    "england".to_string()
}

fn default_min_rate() -> f64 {
    DEFAULT_MIN_RATE
}

fn default_store_path() -> PathBuf {
    PathBuf::from("./data/attendance.json")
}

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

/// Settings loaded from `settings.yaml`.
///
/// Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Name of the region the holiday table covers (e.g., "england").
    #[serde(default = "default_region")]
    pub region: String,
    /// Minimum attendance rate target, between 0 and 1.
    #[serde(default = "default_min_rate")]
    pub min_rate: f64,
    /// Where the attendance store is persisted.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    /// Address the HTTP server listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            region: default_region(),
            min_rate: default_min_rate(),
            store_path: default_store_path(),
            bind_address: default_bind_address(),
        }
    }
}

/// The complete configuration loaded from a config directory.
#[derive(Debug, Clone)]
pub struct AppConfig {
    settings: Settings,
    holidays: HolidayTable,
}

impl AppConfig {
    /// Creates an AppConfig from its component parts.
    pub fn new(settings: Settings, holidays: HolidayTable) -> Self {
        Self { settings, holidays }
    }

    /// Returns the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the bank holiday table.
    pub fn holidays(&self) -> &HolidayTable {
        &self.holidays
    }
}
