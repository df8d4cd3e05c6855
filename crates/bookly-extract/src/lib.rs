//! # bookly-extract: Free-Text Order Extraction
//!
//! The "AI capture" collaborator: turns a pasted customer message into an
//! [`ExtractedOrder`] suggestion that the bookly-core draft builder then
//! re-validates and re-totals.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Capture Flow                                       │
//! │                                                                         │
//! │  "I want 2 pairs of Ankara Heels. Delivery to Lekki."                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 bookly-extract (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   FallbackExtractor                                             │   │
//! │  │    ├── GeminiExtractor   (network, bounded timeout)            │   │
//! │  │    └── HeuristicExtractor (deterministic, offline)             │   │
//! │  └───────────────────────────┬─────────────────────────────────────┘   │
//! │                              │ ExtractedOrder::into_draft()             │
//! │                              ▼                                          │
//! │                 bookly-core build_order(), the trust boundary           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One extraction is in flight at a time, every request has a bounded
//! timeout, and a failed or timed-out primary degrades to the heuristic
//! suggestion instead of an error.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod contract;
pub mod error;
pub mod fallback;
pub mod gemini;
pub mod heuristic;

// =============================================================================
// Re-exports
// =============================================================================

pub use contract::{ExtractedItem, ExtractedOrder, OrderExtractor};
pub use error::{ExtractionError, ExtractionResult};
pub use fallback::{FallbackExtractor, DEFAULT_EXTRACTION_TIMEOUT};
pub use gemini::GeminiExtractor;
pub use heuristic::HeuristicExtractor;
