//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading settings and
//! the bank holiday table from YAML files.

use std::fs;
use std::path::Path;

use crate::calendar::HolidayTable;
use crate::error::{AttendanceError, AttendanceResult};

use super::types::{AppConfig, Settings};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/england/
/// ├── settings.yaml       # Region, target rate, store path, bind address
/// └── bank_holidays.yaml  # Bank holidays keyed by four-digit year
/// ```
///
/// # Example
///
/// ```no_run
/// use office_attendance::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/england").unwrap();
/// println!("Target rate: {}", loader.min_rate());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Either file is missing
    /// - Either file contains invalid YAML or an invalid date
    /// - `min_rate` lies outside `[0, 1]`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use office_attendance::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/england")?;
    /// # Ok::<(), office_attendance::error::AttendanceError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> AttendanceResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<Settings>(&path.join("settings.yaml"))?;
        let holidays = Self::load_yaml::<HolidayTable>(&path.join("bank_holidays.yaml"))?;

        Self::from_parts(settings, holidays)
    }

    /// Builds a loader from in-memory parts, applying the same validation as
    /// [`ConfigLoader::load`].
    pub fn from_parts(settings: Settings, holidays: HolidayTable) -> AttendanceResult<Self> {
        if !(0.0..=1.0).contains(&settings.min_rate) {
            return Err(AttendanceError::InvalidConfig {
                field: "min_rate".to_string(),
                message: format!("{} is not between 0 and 1", settings.min_rate),
            });
        }

        Ok(Self {
            config: AppConfig::new(settings, holidays),
        })
    }

    /// Default settings with the built-in England holiday table.
    pub fn england() -> Self {
        Self {
            config: AppConfig::new(Settings::default(), HolidayTable::england()),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> AttendanceResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AttendanceError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| AttendanceError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the settings.
    pub fn settings(&self) -> &Settings {
        self.config.settings()
    }

    /// Returns the bank holiday table.
    pub fn holidays(&self) -> &HolidayTable {
        self.config.holidays()
    }

    /// Returns the minimum attendance rate target.
    pub fn min_rate(&self) -> f64 {
        self.config.settings().min_rate
    }
}
