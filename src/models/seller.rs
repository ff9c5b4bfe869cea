use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::listing::Listing;

// ---------------------------------------------------------------------------
// SellerCardDetail — Per (seller, requested card) fulfilment summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerCardDetail {
    #[serde(default)]
    pub total_stock: u64,
    #[serde(default)]
    pub lowest_price: u64,
    #[serde(default)]
    pub estimated_cost: u64,
    /// Matching listings, cheapest first.
    #[serde(default, rename = "products")]
    pub listings: Vec<Listing>,
    /// Distinct underlying card names behind the requested name, sorted.
    #[serde(default, rename = "found_card_names")]
    pub found_names: Vec<String>,
}

// ---------------------------------------------------------------------------
// SellerMatch — A seller able to fill the whole basket
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerMatch {
    #[serde(rename = "seller_nickname")]
    pub nickname: String,
    #[serde(default, rename = "seller_area")]
    pub area: String,
    #[serde(default)]
    pub credit: i64,
    #[serde(default, rename = "order_complete")]
    pub order_complete_count: i64,
    /// Requested card name to the seller's detail for that card.
    #[serde(default)]
    pub cards: BTreeMap<String, SellerCardDetail>,
    #[serde(default)]
    pub total_cost: u64,
}

impl SellerMatch {
    /// The seller's listings for a requested card, or an empty slice when the
    /// seller carries nothing under that name.
    pub fn listings_for(&self, card_name: &str) -> &[Listing] {
        self.cards
            .get(card_name)
            .map(|d| d.listings.as_slice())
            .unwrap_or(&[])
    }
}
