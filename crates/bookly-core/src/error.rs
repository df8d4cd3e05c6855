//! # Error Types
//!
//! Domain-specific error types for bookly-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bookly-core errors (this file)                                        │
//! │  ├── CoreError        - Rejected order drafts, rule violations         │
//! │  └── ValidationError  - Field-level input validation failures          │
//! │                                                                         │
//! │  bookly-store errors (separate crate)                                  │
//! │  └── StoreError       - Snapshot load/save failures                    │
//! │                                                                         │
//! │  bookly-extract errors (separate crate)                                │
//! │  └── ExtractionError  - AI extraction failures (degraded, not fatal)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookup misses are deliberately NOT errors: an order item referencing a
//! deleted product contributes zero cost, and aggregations over empty
//! collections return zero/empty values. The only hard failures in this
//! crate come from the order draft builder.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, limits)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The draft would produce an order worth nothing.
    ///
    /// ## When This Occurs
    /// - Quick-sale path with a flat amount of zero (or missing)
    /// - Itemized path where every line totals zero
    ///
    /// The caller is expected to re-prompt the user; a zero-value order is
    /// never silently recorded.
    #[error("order draft has no positive amount")]
    ZeroValueOrder,

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level input validation errors.
///
/// Raised when draft input doesn't meet requirements, before any order is
/// constructed.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
