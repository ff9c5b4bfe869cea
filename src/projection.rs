//! Ordering and summary counts for the displayed seller list.

use serde::{Deserialize, Serialize};

use crate::models::{SearchStats, SellerMatch};

/// Key the seller list is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Cheapest basket first.
    #[default]
    TotalCost,
    /// Highest seller credit first.
    Credit,
    /// Most completed orders first.
    OrderComplete,
}

/// Sort sellers in place. Ties may land in any order.
pub fn sort_sellers(sellers: &mut [SellerMatch], key: SortKey) {
    match key {
        SortKey::TotalCost => sellers.sort_unstable_by_key(|s| s.total_cost),
        SortKey::Credit => sellers.sort_unstable_by(|a, b| b.credit.cmp(&a.credit)),
        SortKey::OrderComplete => {
            sellers.sort_unstable_by(|a, b| b.order_complete_count.cmp(&a.order_complete_count))
        }
    }
}

/// Sorted copy of `sellers`.
pub fn sorted_sellers(sellers: &[SellerMatch], key: SortKey) -> Vec<SellerMatch> {
    let mut sorted = sellers.to_vec();
    sort_sellers(&mut sorted, key);
    sorted
}

/// Counts shown above the seller list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    /// Sellers the search looked at. Fixed per search.
    pub sellers_scanned: u64,
    /// Sellers the search itself matched, before any facet filter.
    pub matching_sellers: u64,
    /// Sellers left after the current facet filters.
    pub filtered_sellers: usize,
    pub filters_active: bool,
}

impl MatchSummary {
    pub fn new(stats: &SearchStats, filtered_sellers: usize, filters_active: bool) -> Self {
        Self {
            sellers_scanned: stats.total_sellers_scanned,
            matching_sellers: stats.matching_sellers,
            filtered_sellers,
            filters_active,
        }
    }

    /// True when filters are on and the list is "narrowed from N".
    pub fn is_narrowed(&self) -> bool {
        self.filters_active && (self.filtered_sellers as u64) < self.matching_sellers
    }
}
