//! # Snapshot Store
//!
//! Load/save of the whole application state as one JSON document.
//!
//! ## Persistence Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Snapshot Store                                    │
//! │                                                                         │
//! │  load()                                                                 │
//! │    ├── file missing        → Snapshot::default()  (first run)          │
//! │    ├── file unreadable     → StoreError::Io                            │
//! │    └── file corrupt        → StoreError::Corrupt                       │
//! │                                                                         │
//! │  load_or_default()                                                      │
//! │    └── any failure         → warn + Snapshot::default()                │
//! │                                                                         │
//! │  save(&snapshot)                                                        │
//! │    └── write .tmp sibling, then atomic rename over the target          │
//! │                                                                         │
//! │  The store owns the canonical collections; the core only reads         │
//! │  snapshots and returns derived values for the store to persist.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Missing fields inside an otherwise valid document are NOT corruption:
//! every `Snapshot` field has a serde default, so blobs written by older
//! versions load cleanly. That is the full extent of schema migration.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, info, warn};

use bookly_core::Snapshot;

use crate::error::{StoreError, StoreResult};

/// File name of the snapshot document.
///
/// Carries the version suffix of the blob key it replaces; bumping it
/// abandons old state on purpose rather than migrating it.
pub const SNAPSHOT_FILE_NAME: &str = "bookly_state_v3.json";

// =============================================================================
// Store Config
// =============================================================================

/// Configuration for the snapshot store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Full path of the snapshot file.
    pub path: PathBuf,
}

impl StoreConfig {
    /// Creates a config pointing at an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig { path: path.into() }
    }

    /// Resolves the default per-user location
    /// (e.g. `~/.local/share/bookly/bookly_state_v3.json` on Linux).
    pub fn default_path() -> StoreResult<Self> {
        let dirs = ProjectDirs::from("com", "bookly", "bookly").ok_or(StoreError::NoDataDir)?;
        Ok(StoreConfig {
            path: dirs.data_dir().join(SNAPSHOT_FILE_NAME),
        })
    }
}

// =============================================================================
// Snapshot Store
// =============================================================================

/// The persistence collaborator: `load() -> Snapshot`, `save(&Snapshot)`.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    config: StoreConfig,
}

impl SnapshotStore {
    /// Creates a store over the given config.
    pub fn new(config: StoreConfig) -> Self {
        SnapshotStore { config }
    }

    /// The snapshot file path.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Loads the persisted snapshot.
    ///
    /// A missing file is a first run and yields the default snapshot; an
    /// unreadable or corrupt file is a typed error for the caller to
    /// surface (or degrade via [`SnapshotStore::load_or_default`]).
    pub async fn load(&self) -> StoreResult<Snapshot> {
        let path = &self.config.path;

        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no snapshot on disk, starting fresh");
                return Ok(Snapshot::default());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.clone(),
                    source,
                })
            }
        };

        let snapshot: Snapshot =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
                path: path.clone(),
                source,
            })?;

        debug!(
            path = %path.display(),
            orders = snapshot.orders.len(),
            products = snapshot.products.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Loads the snapshot, degrading every failure to the default state.
    ///
    /// "Try, and fall back to a default": a corrupt or unreadable file
    /// must not brick the app on startup. The failure is logged so the
    /// data is not silently forgotten.
    pub async fn load_or_default(&self) -> Snapshot {
        match self.load().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "failed to load snapshot, falling back to default state");
                Snapshot::default()
            }
        }
    }

    /// Persists the snapshot.
    ///
    /// Writes to a temporary sibling file and renames it over the target so
    /// a crash mid-write leaves the previous document intact. Parent
    /// directories are created on first save.
    pub async fn save(&self, snapshot: &Snapshot) -> StoreResult<()> {
        let path = &self.config.path;
        let json = serde_json::to_vec_pretty(snapshot).map_err(StoreError::Serialize)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &json)
            .await
            .map_err(|source| StoreError::Io {
                path: tmp_path.clone(),
                source,
            })?;

        tokio::fs::rename(&tmp_path, path)
            .await
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;

        debug!(
            path = %path.display(),
            bytes = json.len(),
            orders = snapshot.orders.len(),
            "snapshot saved"
        );
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bookly_core::{Order, OrderStatus, PaymentMethod, SalesSource};
    use chrono::{TimeZone, Utc};

    fn store_in(dir: &tempfile::TempDir) -> SnapshotStore {
        SnapshotStore::new(StoreConfig::new(dir.path().join(SNAPSHOT_FILE_NAME)))
    }

    fn sample_order() -> Order {
        Order {
            id: "ord_001".to_string(),
            customer_id: None,
            customer_name: "Chidi Okafor".to_string(),
            items: vec![],
            total_minor: 3_500_000,
            date: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            status: OrderStatus::Paid,
            source: SalesSource::WhatsApp,
            payment_method: PaymentMethod::Transfer,
            note: None,
        }
    }

    #[tokio::test]
    async fn test_load_missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let snapshot = store.load().await.unwrap();
        assert!(snapshot.orders.is_empty());
        assert_eq!(snapshot.profile.vip_threshold, 5);
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut snapshot = Snapshot::default();
        snapshot.profile.name = "Lagos Urban Styles".to_string();
        snapshot.orders.push(sample_order());

        store.save(&snapshot).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded.profile.name, "Lagos Urban Styles");
        assert_eq!(loaded.orders.len(), 1);
        assert_eq!(loaded.orders[0].total_minor, 3_500_000);
    }

    #[tokio::test]
    async fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join(SNAPSHOT_FILE_NAME);
        let store = SnapshotStore::new(StoreConfig::new(nested));

        store.save(&Snapshot::default()).await.unwrap();
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_save_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&Snapshot::default()).await.unwrap();
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![SNAPSHOT_FILE_NAME]);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_typed_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        tokio::fs::write(store.path(), b"{ not json")
            .await
            .unwrap();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[tokio::test]
    async fn test_load_or_default_degrades_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        tokio::fs::write(store.path(), b"garbage").await.unwrap();

        let snapshot = store.load_or_default().await;
        assert!(snapshot.orders.is_empty());
    }

    #[tokio::test]
    async fn test_legacy_blob_with_missing_fields_loads() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        // An older version that only knew about profile and orders
        tokio::fs::write(
            store.path(),
            br#"{"profile":{"name":"Old Shop","currency":"NGN","phone":"","email":"","footerNote":"","vipThreshold":3},"orders":[]}"#,
        )
        .await
        .unwrap();

        let snapshot = store.load().await.unwrap();
        assert_eq!(snapshot.profile.name, "Old Shop");
        assert!(snapshot.products.is_empty());
        assert!(snapshot.settings.show_fab);
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut snapshot = Snapshot::default();
        snapshot.orders.push(sample_order());
        store.save(&snapshot).await.unwrap();

        snapshot.orders.clear();
        store.save(&snapshot).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert!(loaded.orders.is_empty());
    }
}
