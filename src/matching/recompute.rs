//! Re-derive the seller list under the current facet selection.

use std::collections::BTreeMap;

use log::debug;

use super::allocation::allocate;
use crate::facets::FacetSelection;
use crate::models::{RequestedCard, SearchResult, SellerMatch};

/// Produce the sellers that can still fill every requested card.
///
/// With no active restriction the search's own sellers and totals are returned
/// untouched. Otherwise every seller is re-priced card by card; a seller that
/// cannot cover any one card is dropped. The input is never mutated.
pub fn recompute_sellers(
    result: &SearchResult,
    requested: &[RequestedCard],
    selection: &FacetSelection,
) -> Vec<SellerMatch> {
    if !selection.has_active_filters() {
        return result.sellers.clone();
    }

    let sellers: Vec<SellerMatch> = result
        .sellers
        .iter()
        .filter_map(|seller| rematch_seller(seller, requested, selection))
        .collect();

    debug!(
        "recomputed sellers under active filters: {} of {} remain",
        sellers.len(),
        result.sellers.len()
    );
    sellers
}

/// Re-price one seller, or `None` if any requested card is unsatisfiable.
pub fn rematch_seller(
    seller: &SellerMatch,
    requested: &[RequestedCard],
    selection: &FacetSelection,
) -> Option<SellerMatch> {
    let mut cards = BTreeMap::new();
    let mut total_cost = 0u64;

    for card in requested {
        let allocation = allocate(
            seller.listings_for(&card.name),
            selection.restriction(&card.name),
            card.quantity,
        );
        if !allocation.satisfiable {
            return None;
        }
        total_cost = total_cost.saturating_add(allocation.estimated_cost);
        cards.insert(card.name.clone(), allocation.into_detail());
    }

    Some(SellerMatch {
        nickname: seller.nickname.clone(),
        area: seller.area.clone(),
        credit: seller.credit,
        order_complete_count: seller.order_complete_count,
        cards,
        total_cost,
    })
}
