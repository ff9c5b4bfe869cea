use serde::{Deserialize, Serialize};

use crate::config;

// ---------------------------------------------------------------------------
// Listing — One seller's stock of one printing of one card
// ---------------------------------------------------------------------------

/// A priced offer as returned by the seller search.
///
/// Listings are snapshots and never mutated after deserialization. On the wire
/// the print run name and rarity arrive as `variant_pack_name` and
/// `variant_rare`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub card_key: String,
    #[serde(default)]
    pub card_name: String,
    #[serde(default)]
    pub pack_id: String,
    #[serde(default)]
    pub pack_card_id: String,
    #[serde(default, rename = "variant_pack_name")]
    pub pack_name: String,
    #[serde(default, rename = "variant_rare")]
    pub rarity: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub condition_label: String,
    pub price: u64,
    pub stock: u32,
}

impl Listing {
    /// Human-readable condition, falling back to the built-in label table.
    pub fn condition_label(&self) -> &str {
        if !self.condition_label.is_empty() {
            return &self.condition_label;
        }
        config::condition_labels()
            .get(self.condition.as_str())
            .copied()
            .unwrap_or(self.condition.as_str())
    }
}
