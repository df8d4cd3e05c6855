//! # bookly-store: Snapshot Persistence for Bookly
//!
//! This crate persists the Bookly application state as a single JSON
//! document on local disk, the on-device equivalent of the browser blob
//! it replaces.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bookly Data Flow                                 │
//! │                                                                         │
//! │  App startup                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   bookly-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   load() ──────► Snapshot ──────► bookly-core aggregators      │   │
//! │  │                                        │                        │   │
//! │  │   save(&snapshot) ◄──── new Order / Expense appended ◄─────────┘   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ~/.local/share/bookly/bookly_state_v3.json                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bookly_store::{SnapshotStore, StoreConfig};
//!
//! # async fn demo() -> Result<(), bookly_store::StoreError> {
//! let store = SnapshotStore::new(StoreConfig::default_path()?);
//! let mut snapshot = store.load().await?;
//!
//! snapshot.profile.name = "Lagos Urban Styles".to_string();
//! store.save(&snapshot).await?;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::{SnapshotStore, StoreConfig, SNAPSHOT_FILE_NAME};
