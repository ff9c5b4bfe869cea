//! Cheapest-first allocation of one requested card against one seller's listings.

use std::collections::BTreeSet;

use crate::facets::FacetRestriction;
use crate::models::{Listing, SellerCardDetail};

/// Outcome of allocating a required quantity from a seller's listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub satisfiable: bool,
    pub total_stock: u64,
    /// Lowest unit price among surviving listings; `None` when nothing survived.
    pub lowest_price: Option<u64>,
    /// Cost of the cheapest fill. Zero when unsatisfiable.
    pub estimated_cost: u64,
    /// Surviving listings, ascending by price (ties keep their input order).
    pub listings: Vec<Listing>,
    pub found_names: Vec<String>,
}

impl Allocation {
    /// Convert into the per-card detail attached to a seller.
    pub fn into_detail(self) -> SellerCardDetail {
        SellerCardDetail {
            total_stock: self.total_stock,
            lowest_price: self.lowest_price.unwrap_or(0),
            estimated_cost: self.estimated_cost,
            listings: self.listings,
            found_names: self.found_names,
        }
    }
}

/// Filter `listings` by `restriction` and price `quantity` units cheapest-first.
///
/// Cost is linear in units bought with no per-listing minimums, so taking the
/// cheapest units first yields the minimum total.
pub fn allocate(listings: &[Listing], restriction: FacetRestriction<'_>, quantity: u32) -> Allocation {
    let mut surviving: Vec<Listing> = listings
        .iter()
        .filter(|l| restriction.admits(&l.pack_id, &l.rarity))
        .cloned()
        .collect();
    surviving.sort_by_key(|l| l.price);

    let total_stock: u64 = surviving
        .iter()
        .fold(0u64, |acc, l| acc.saturating_add(l.stock as u64));
    let lowest_price = surviving.first().map(|l| l.price);
    let found_names: Vec<String> = surviving
        .iter()
        .filter(|l| !l.card_name.is_empty())
        .map(|l| l.card_name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let satisfiable = !surviving.is_empty() && total_stock >= quantity as u64;
    let estimated_cost = if satisfiable {
        cheapest_fill_cost(&surviving, quantity)
    } else {
        0
    };

    Allocation {
        satisfiable,
        total_stock,
        lowest_price,
        estimated_cost,
        listings: surviving,
        found_names,
    }
}

/// Walk price-sorted listings, buying until `quantity` units are covered.
///
/// Saturates at `u64::MAX` rather than overflowing on extreme prices.
fn cheapest_fill_cost(sorted: &[Listing], quantity: u32) -> u64 {
    let mut remaining = quantity as u64;
    let mut cost = 0u64;
    for listing in sorted {
        if remaining == 0 {
            break;
        }
        let take = remaining.min(listing.stock as u64);
        cost = cost.saturating_add(take.saturating_mul(listing.price));
        remaining -= take;
    }
    cost
}
