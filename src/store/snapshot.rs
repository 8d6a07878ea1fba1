//! Store persistence.
//!
//! The store is saved as a flat JSON document with one date-keyed boolean map
//! per status:
//!
//! ```text
//! {
//!   "current_month": "2024-05",
//!   "attended_days": { "2024-05-07": true },
//!   "annual_leave_days": { "2024-05-08": true },
//!   "selected_weekday": "wednesday"
//! }
//! ```
//!
//! Loading and saving happen explicitly at session boundaries, never as a side
//! effect of a mutation.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{AttendanceError, AttendanceResult};
use crate::models::{DateKey, DayStatus, MonthScope, Workday};

use super::AttendanceStore;

/// On-disk form of an [`AttendanceStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// The month being viewed.
    pub current_month: MonthScope,
    /// Dates marked attended.
    #[serde(default)]
    pub attended_days: BTreeMap<DateKey, bool>,
    /// Dates marked as annual leave.
    #[serde(default)]
    pub annual_leave_days: BTreeMap<DateKey, bool>,
    /// The weekday used by the most recent bulk mark.
    #[serde(default)]
    pub selected_weekday: Option<Workday>,
}

impl From<&AttendanceStore> for StoreSnapshot {
    fn from(store: &AttendanceStore) -> Self {
        let mut attended_days = BTreeMap::new();
        let mut annual_leave_days = BTreeMap::new();
        for (date, status) in store.recorded_days() {
            match status {
                DayStatus::Attended => {
                    attended_days.insert(date, true);
                }
                DayStatus::OnLeave => {
                    annual_leave_days.insert(date, true);
                }
                DayStatus::Unmarked => {}
            }
        }

        Self {
            current_month: store.current_month(),
            attended_days,
            annual_leave_days,
            selected_weekday: store.selected_weekday(),
        }
    }
}

impl From<StoreSnapshot> for AttendanceStore {
    /// Entries mapped to `false` are ignored. A date present in both maps is
    /// kept as leave.
    fn from(snapshot: StoreSnapshot) -> Self {
        let mut days: BTreeMap<DateKey, DayStatus> = snapshot
            .attended_days
            .into_iter()
            .filter(|(_, marked)| *marked)
            .map(|(date, _)| (date, DayStatus::Attended))
            .collect();

        for (date, marked) in snapshot.annual_leave_days {
            if !marked {
                continue;
            }
            if days.insert(date, DayStatus::OnLeave) == Some(DayStatus::Attended) {
                warn!(date = %date, "Date stored as both attended and on leave, keeping leave");
            }
        }

        AttendanceStore::from_parts(snapshot.current_month, days, snapshot.selected_weekday)
    }
}

impl AttendanceStore {
    /// Loads a store from `path`.
    ///
    /// A missing file is not an error: a fresh store viewing `fallback_month`
    /// is returned instead.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use office_attendance::models::MonthScope;
    /// use office_attendance::store::AttendanceStore;
    ///
    /// let store = AttendanceStore::load("./data/attendance.json", MonthScope::new(2024, 5)?)?;
    /// # Ok::<(), office_attendance::error::AttendanceError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P, fallback_month: MonthScope) -> AttendanceResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        if !path.exists() {
            info!(path = %path_str, "No attendance store found, starting empty");
            return Ok(Self::new(fallback_month));
        }

        let content = fs::read_to_string(path).map_err(|e| AttendanceError::StoreIo {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        let store = Self::from_json(&content).map_err(|e| match e {
            AttendanceError::StoreParse { message, .. } => AttendanceError::StoreParse {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        info!(
            path = %path_str,
            records = store.recorded_days().count(),
            month = %store.current_month(),
            "Loaded attendance store"
        );
        Ok(store)
    }

    /// Writes the store to `path`, replacing any previous file.
    ///
    /// The document is written to a sibling temporary file first and then
    /// renamed into place.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> AttendanceResult<()> {
        let path = path.as_ref();
        let path_str = path.display().to_string();
        let io_error = |e: std::io::Error| AttendanceError::StoreIo {
            path: path_str.clone(),
            message: e.to_string(),
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let json = self.to_json()?;
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(io_error)?;
        fs::rename(&tmp_path, path).map_err(io_error)?;

        info!(
            path = %path_str,
            records = self.recorded_days().count(),
            "Saved attendance store"
        );
        Ok(())
    }

    /// Serializes the store as pretty-printed snapshot JSON.
    pub fn to_json(&self) -> AttendanceResult<String> {
        serde_json::to_string_pretty(&StoreSnapshot::from(self)).map_err(|e| {
            AttendanceError::StoreParse {
                path: "<memory>".to_string(),
                message: e.to_string(),
            }
        })
    }

    /// Parses snapshot JSON.
    pub fn from_json(json: &str) -> AttendanceResult<Self> {
        let snapshot: StoreSnapshot =
            serde_json::from_str(json).map_err(|e| AttendanceError::StoreParse {
                path: "<memory>".to_string(),
                message: e.to_string(),
            })?;
        Ok(snapshot.into())
    }
}
