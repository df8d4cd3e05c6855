//! # Fallback Extractor
//!
//! Wraps a primary (network) extractor with the reliability policy the
//! capture flow needs:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      FallbackExtractor                                  │
//! │                                                                         │
//! │  extract_order(text)                                                    │
//! │     │                                                                   │
//! │     ├── acquire in-flight lock (one extraction at a time)              │
//! │     │                                                                   │
//! │     ├── primary.extract_order(text) under tokio timeout                │
//! │     │        │                                                          │
//! │     │        ├── Ok(order)        → return it                          │
//! │     │        └── Err / timed out  → warn + heuristic suggestion        │
//! │     │                                                                   │
//! │     └── EmptyInput is the only error callers ever see                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Degraded extraction is not propagated as a hard error: the user gets a
//! best-effort partial draft and continues into the manual-edit flow.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::warn;

use crate::contract::{ExtractedOrder, OrderExtractor};
use crate::error::{ExtractionError, ExtractionResult};
use crate::heuristic::HeuristicExtractor;

/// Default bound on a single extraction round trip.
pub const DEFAULT_EXTRACTION_TIMEOUT: Duration = Duration::from_secs(20);

/// Primary extractor + bounded timeout + deterministic degraded path.
#[derive(Debug)]
pub struct FallbackExtractor<P> {
    primary: P,
    heuristic: HeuristicExtractor,
    timeout: Duration,
    /// Serializes extractions: a second capture waits for the first.
    in_flight: Mutex<()>,
}

impl<P: OrderExtractor> FallbackExtractor<P> {
    /// Wraps a primary extractor with the default timeout.
    pub fn new(primary: P) -> Self {
        Self::with_timeout(primary, DEFAULT_EXTRACTION_TIMEOUT)
    }

    /// Wraps a primary extractor with an explicit timeout.
    pub fn with_timeout(primary: P, timeout: Duration) -> Self {
        FallbackExtractor {
            primary,
            heuristic: HeuristicExtractor::new(),
            timeout,
            in_flight: Mutex::new(()),
        }
    }
}

#[async_trait]
impl<P: OrderExtractor> OrderExtractor for FallbackExtractor<P> {
    async fn extract_order(&self, text: &str) -> ExtractionResult<ExtractedOrder> {
        if text.trim().is_empty() {
            return Err(ExtractionError::EmptyInput);
        }

        let _guard = self.in_flight.lock().await;

        match tokio::time::timeout(self.timeout, self.primary.extract_order(text)).await {
            Ok(Ok(order)) => Ok(order),
            Ok(Err(e)) => {
                warn!(error = %e, "primary extraction failed, using heuristic suggestion");
                self.heuristic.extract_order(text).await
            }
            Err(_) => {
                warn!(timeout = ?self.timeout, "primary extraction timed out, using heuristic suggestion");
                self.heuristic.extract_order(text).await
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
