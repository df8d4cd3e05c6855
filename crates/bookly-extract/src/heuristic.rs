//! # Heuristic Extractor
//!
//! A deterministic, offline order extractor: the degraded path when the
//! AI service is unreachable, and the test double for the suite.
//!
//! The rules are intentionally crude: first number in the text becomes the
//! amount, keyword lookups pick an item name and a channel. The point is a
//! best-effort partial draft the user edits before confirming, not a
//! correct parse.

use async_trait::async_trait;
use regex::Regex;
use tracing::debug;

use bookly_core::SalesSource;

use crate::contract::{ExtractedItem, ExtractedOrder, OrderExtractor};
use crate::error::{ExtractionError, ExtractionResult};

/// Amount assumed when the text contains no number at all, in minor units
/// (a 5,000 major-unit guess, carried over from the original mock service).
const FALLBACK_AMOUNT_MINOR: i64 = 500_000;

/// Offline keyword-based extractor. Deterministic: identical text always
/// yields an identical suggestion.
#[derive(Debug, Clone)]
pub struct HeuristicExtractor {
    number: Regex,
}

impl HeuristicExtractor {
    pub fn new() -> Self {
        HeuristicExtractor {
            // A run of digits, ignoring thousands separators
            number: Regex::new(r"\d[\d,]*").expect("static regex"),
        }
    }

    /// First number in the text, read as major units, converted to minor.
    fn guess_amount_minor(&self, text: &str) -> i64 {
        self.number
            .find(text)
            .and_then(|m| m.as_str().replace(',', "").parse::<i64>().ok())
            .map(|major| major.saturating_mul(100))
            .unwrap_or(FALLBACK_AMOUNT_MINOR)
    }

    /// Item name guess from product keywords.
    fn guess_item_name(lower: &str) -> &'static str {
        if lower.contains("cap") {
            "Native Cap"
        } else if lower.contains("shoe") || lower.contains("heel") {
            "Fashion Footwear"
        } else {
            "Fashion Item"
        }
    }

    /// Channel guess from platform keywords; WhatsApp when nothing matches,
    /// since that is where pasted order messages overwhelmingly come from.
    fn guess_source(lower: &str) -> SalesSource {
        if lower.contains("instagram") || lower.contains(" ig ") {
            SalesSource::Instagram
        } else if lower.contains("facebook") {
            SalesSource::Facebook
        } else if lower.contains("tiktok") {
            SalesSource::TikTok
        } else {
            SalesSource::WhatsApp
        }
    }
}

impl Default for HeuristicExtractor {
    fn default() -> Self {
        HeuristicExtractor::new()
    }
}

#[async_trait]
impl OrderExtractor for HeuristicExtractor {
    async fn extract_order(&self, text: &str) -> ExtractionResult<ExtractedOrder> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ExtractionError::EmptyInput);
        }

        let lower = text.to_lowercase();
        let amount_minor = self.guess_amount_minor(text);

        debug!(amount_minor, "heuristic extraction");

        Ok(ExtractedOrder {
            customer_name: None,
            items: vec![ExtractedItem {
                name: Self::guess_item_name(&lower).to_string(),
                quantity: 1,
                price_minor: amount_minor,
            }],
            total_amount_minor: amount_minor,
            source: Some(Self::guess_source(&lower)),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
