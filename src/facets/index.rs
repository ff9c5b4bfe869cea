//! Facet index: every pack and rarity offered anywhere in a search result.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::models::{Listing, SearchResult};

/// A print run option shown in the pack filter.
///
/// Options are keyed by `pack_id`. If the same id shows up under different
/// names, the first name seen is kept and later ones are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackOption {
    pub pack_id: String,
    pub pack_name: String,
}

/// Distinct facet values observed for one requested card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardFacets {
    pub packs: Vec<PackOption>,
    pub rarities: Vec<String>,
    #[serde(skip)]
    seen_packs: HashSet<String>,
    #[serde(skip)]
    seen_rarities: HashSet<String>,
}

impl CardFacets {
    fn observe(&mut self, listing: &Listing) {
        if self.seen_packs.insert(listing.pack_id.clone()) {
            self.packs.push(PackOption {
                pack_id: listing.pack_id.clone(),
                pack_name: listing.pack_name.clone(),
            });
        }
        if self.seen_rarities.insert(listing.rarity.clone()) {
            self.rarities.push(listing.rarity.clone());
        }
    }

    /// Filter controls are only worth showing when there is a choice to make.
    pub fn is_filterable(&self) -> bool {
        self.packs.len() > 1 || self.rarities.len() > 1
    }

    pub fn has_pack(&self, pack_id: &str) -> bool {
        self.seen_packs.contains(pack_id)
    }

    pub fn has_rarity(&self, rarity: &str) -> bool {
        self.seen_rarities.contains(rarity)
    }
}

/// Per-card facet options, in first-seen order across sellers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetIndex {
    cards: BTreeMap<String, CardFacets>,
}

impl FacetIndex {
    /// Collect facet options from every seller's listings.
    ///
    /// Sellers are visited in the order the search returned them, so the first
    /// seller to list a pack or rarity decides its position.
    pub fn build(result: &SearchResult) -> Self {
        let mut index = Self::default();
        for seller in &result.sellers {
            for (card_name, detail) in &seller.cards {
                for listing in &detail.listings {
                    index.observe(card_name, listing);
                }
            }
        }
        index
    }

    /// Build from a card name to listings mapping.
    pub fn from_listings<'a, I>(listings: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a Listing)>,
    {
        let mut index = Self::default();
        for (card_name, listing) in listings {
            index.observe(card_name, listing);
        }
        index
    }

    fn observe(&mut self, card_name: &str, listing: &Listing) {
        self.cards
            .entry(card_name.to_string())
            .or_default()
            .observe(listing);
    }

    pub fn card(&self, card_name: &str) -> Option<&CardFacets> {
        self.cards.get(card_name)
    }

    pub fn packs(&self, card_name: &str) -> &[PackOption] {
        self.card(card_name).map(|c| c.packs.as_slice()).unwrap_or(&[])
    }

    pub fn rarities(&self, card_name: &str) -> &[String] {
        self.card(card_name)
            .map(|c| c.rarities.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_filterable(&self, card_name: &str) -> bool {
        self.card(card_name).is_some_and(CardFacets::is_filterable)
    }

    /// Names of every card that gets filter controls.
    pub fn filterable_cards(&self) -> Vec<&str> {
        self.cards
            .iter()
            .filter(|(_, facets)| facets.is_filterable())
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
