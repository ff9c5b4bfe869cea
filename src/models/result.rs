use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::seller::SellerMatch;
use crate::error::Result;

// ---------------------------------------------------------------------------
// CardDiagnostic — Per-card lookup outcome reported by the search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDiagnostic {
    #[serde(default)]
    pub variants_count: u32,
    /// Present when this card's upstream lookup failed. Non-fatal.
    #[serde(default)]
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// SearchStats — Aggregate counts reported by the search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    #[serde(default)]
    pub total_sellers_scanned: u64,
    #[serde(default)]
    pub matching_sellers: u64,
    #[serde(default)]
    pub cards_requested: u64,
}

// ---------------------------------------------------------------------------
// SearchResult — The full response of one multi-card seller search
// ---------------------------------------------------------------------------

/// Immutable dataset for one search submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub sellers: Vec<SellerMatch>,
    #[serde(default)]
    pub card_details: BTreeMap<String, CardDiagnostic>,
    #[serde(default)]
    pub stats: SearchStats,
}

impl SearchResult {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Load a captured search response from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::from_slice(&bytes)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// `(card name, error)` for every card whose upstream lookup failed.
    pub fn card_errors(&self) -> Vec<(&str, &str)> {
        self.card_details
            .iter()
            .filter_map(|(name, d)| d.error.as_deref().map(|e| (name.as_str(), e)))
            .collect()
    }

    pub fn has_card_errors(&self) -> bool {
        self.card_details.values().any(|d| d.error.is_some())
    }

    pub fn seller(&self, nickname: &str) -> Option<&SellerMatch> {
        self.sellers.iter().find(|s| s.nickname == nickname)
    }
}
