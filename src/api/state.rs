//! Application state for the office attendance API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ConfigLoader;
use crate::error::{AttendanceError, AttendanceResult};
use crate::store::AttendanceStore;

/// Shared application state.
///
/// Holds the loaded configuration and the single attendance store. The store
/// sits behind a lock so concurrent requests see whole mutations only.
#[derive(Clone)]
pub struct AppState {
    /// The loaded configuration.
    config: Arc<ConfigLoader>,
    /// The attendance store.
    store: Arc<RwLock<AttendanceStore>>,
    /// Where `save` writes the store, if anywhere.
    store_path: Option<PathBuf>,
}

impl AppState {
    /// Creates application state with an in-memory store only.
    pub fn new(config: ConfigLoader, store: AttendanceStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(RwLock::new(store)),
            store_path: None,
        }
    }

    /// Sets the file the store is saved to.
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = Some(path.into());
        self
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the store lock.
    pub fn store(&self) -> &RwLock<AttendanceStore> {
        &self.store
    }

    /// Returns the configured store file.
    pub fn store_path(&self) -> Option<&Path> {
        self.store_path.as_deref()
    }

    /// Writes the store to its configured file.
    ///
    /// The store is copied under the read lock and written on the blocking
    /// pool, so requests are not held up by the file system.
    ///
    /// Returns the path written, or `None` when the state has no store file.
    pub async fn save(&self) -> AttendanceResult<Option<PathBuf>> {
        let Some(path) = self.store_path.clone() else {
            return Ok(None);
        };
        let store = self.store.read().await.clone();

        let target = path.clone();
        tokio::task::spawn_blocking(move || store.save(&target))
            .await
            .map_err(|e| AttendanceError::StoreIo {
                path: path.display().to_string(),
                message: e.to_string(),
            })??;
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthScope;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_save_without_path_is_noop() {
        let state = AppState::new(
            ConfigLoader::england(),
            AttendanceStore::new(MonthScope::new(2024, 5).unwrap()),
        );
        assert_eq!(state.save().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_writes_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attendance.json");
        let state = AppState::new(
            ConfigLoader::england(),
            AttendanceStore::new(MonthScope::new(2024, 5).unwrap()),
        )
        .with_store_path(&path);

        assert_eq!(state.save().await.unwrap(), Some(path.clone()));
        assert!(path.exists());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_save_does_not_block_writers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attendance.json");
        let state = AppState::new(
            ConfigLoader::england(),
            AttendanceStore::new(MonthScope::new(2024, 5).unwrap()),
        )
        .with_store_path(&path);

        let writer = async {
            state.store().write().await.next_month();
        };
        let (saved, _) = tokio::time::timeout(
            std::time::Duration::from_secs(5),
            async { tokio::join!(state.save(), writer) },
        )
        .await
        .unwrap();

        assert_eq!(saved.unwrap(), Some(path.clone()));
        let loaded = AttendanceStore::load(&path, MonthScope::new(2000, 1).unwrap()).unwrap();
        assert!(["2024-05", "2024-06"].contains(&loaded.current_month().to_string().as_str()));
        assert_eq!(
            state.store().read().await.current_month(),
            MonthScope::new(2024, 6).unwrap()
        );
    }

    #[tokio::test]
    async fn test_save_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let state = AppState::new(
            ConfigLoader::england(),
            AttendanceStore::new(MonthScope::new(2024, 5).unwrap()),
        )
        .with_store_path(blocker.join("attendance.json"));

        assert!(matches!(
            state.save().await,
            Err(AttendanceError::StoreIo { .. })
        ));
    }
}
