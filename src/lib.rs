//! Multi-card seller matching for Rust.
//!
//! Given the sellers a multi-card search found for a set of requested cards,
//! lets callers narrow the result by print run ("pack") and rarity per card
//! and re-derives, on every change, which sellers can still fill the whole
//! basket and at what minimum cost.
//!
//! # Quick start
//!
//! ```no_run
//! use seller_match::{CardRequestList, MatchSession, SortKey, StaticSearch};
//!
//! let mut request = CardRequestList::new();
//! request.add("Pikachu ex").unwrap();
//! request.add_with_quantity("Rare Candy", 4).unwrap();
//!
//! let search = StaticSearch::from_path("response.json").unwrap();
//! let mut session = MatchSession::search(&search, &request).unwrap();
//!
//! session.toggle_rarity("Pikachu ex", "SAR");
//! session.set_sort_key(SortKey::Credit);
//! for seller in session.sellers() {
//!     println!("{} {}", seller.nickname, seller.total_cost);
//! }
//! ```

pub mod config;
pub mod error;
pub mod facets;
pub mod matching;
pub mod models;
pub mod projection;
pub mod search;

pub use error::{MatchError, Result};
pub use facets::{FacetIndex, FacetKind, FacetSelection};
pub use models::{CardRequestList, Listing, RequestedCard, SearchResult, SellerCardDetail, SellerMatch};
pub use projection::{MatchSummary, SortKey};
pub use search::{SellerSearch, StaticSearch};

use std::fmt;

use log::{debug, trace, warn};

// ---------------------------------------------------------------------------
// MatchSessionBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`MatchSession`].
///
/// Use [`MatchSession::builder()`] to obtain a builder.
#[derive(Debug, Clone, Default)]
pub struct MatchSessionBuilder {
    sort_key: SortKey,
}

impl MatchSessionBuilder {
    /// Set the initial sort key. Defaults to [`SortKey::TotalCost`].
    pub fn sort_key(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }

    /// Build a session over an already obtained search result.
    pub fn build(self, result: SearchResult, request: &CardRequestList) -> MatchSession {
        let mut session = MatchSession {
            result: SearchResult::default(),
            requested: Vec::new(),
            index: FacetIndex::default(),
            selection: FacetSelection::new(),
            sort_key: self.sort_key,
        };
        session.load(result, request);
        session
    }

    /// Submit `request` to `search` and build a session over the response.
    ///
    /// Fails if the request is empty or the search itself fails.
    pub fn search<S: SellerSearch + ?Sized>(
        self,
        search: &S,
        request: &CardRequestList,
    ) -> Result<MatchSession> {
        let result = submit(search, request)?;
        Ok(self.build(result, request))
    }
}

// ---------------------------------------------------------------------------
// MatchSession
// ---------------------------------------------------------------------------

/// State for one submitted multi-card search.
///
/// Owns the immutable search result, the request snapshot it was made with,
/// the facet options derived from it, and the user's facet selection. Seller
/// lists are derived on demand and never cached.
#[derive(Debug, Clone)]
pub struct MatchSession {
    result: SearchResult,
    requested: Vec<RequestedCard>,
    index: FacetIndex,
    selection: FacetSelection,
    sort_key: SortKey,
}

impl MatchSession {
    /// Create a new builder for configuring a session.
    pub fn builder() -> MatchSessionBuilder {
        MatchSessionBuilder::default()
    }

    /// Submit `request` with default settings.
    pub fn search<S: SellerSearch + ?Sized>(search: &S, request: &CardRequestList) -> Result<Self> {
        Self::builder().search(search, request)
    }

    /// Re-submit to `search`, replacing this session's data and clearing filters.
    ///
    /// On failure the current data is kept.
    pub fn resubmit<S: SellerSearch + ?Sized>(
        &mut self,
        search: &S,
        request: &CardRequestList,
    ) -> Result<()> {
        let result = submit(search, request)?;
        self.load(result, request);
        Ok(())
    }

    /// Replace the dataset for a new search. All facet restrictions are dropped.
    pub fn load(&mut self, result: SearchResult, request: &CardRequestList) {
        for (name, error) in result.card_errors() {
            warn!("card lookup failed for '{}': {}", name, error);
        }
        self.index = FacetIndex::build(&result);
        self.requested = request.as_slice().to_vec();
        self.result = result;
        self.selection.reset_all();
        debug!(
            "loaded search result: {} sellers for {} cards",
            self.result.sellers.len(),
            self.requested.len()
        );
    }

    // -- Data accessors ----------------------------------------------------

    pub fn result(&self) -> &SearchResult {
        &self.result
    }

    pub fn requested(&self) -> &[RequestedCard] {
        &self.requested
    }

    pub fn facets(&self) -> &FacetIndex {
        &self.index
    }

    pub fn selection(&self) -> &FacetSelection {
        &self.selection
    }

    /// Requested cards that get filter controls, in request order.
    pub fn filterable_cards(&self) -> Vec<&str> {
        self.requested
            .iter()
            .map(|c| c.name.as_str())
            .filter(|name| self.index.is_filterable(name))
            .collect()
    }

    // -- Facet selection ---------------------------------------------------

    /// Toggle a pack for a card. Returns `false` (and does nothing) if the
    /// pack is not offered for that card.
    pub fn toggle_pack(&mut self, card_name: &str, pack_id: &str) -> bool {
        self.toggle(FacetKind::Pack, card_name, pack_id)
    }

    /// Toggle a rarity for a card. Returns `false` (and does nothing) if the
    /// rarity is not offered for that card.
    pub fn toggle_rarity(&mut self, card_name: &str, rarity: &str) -> bool {
        self.toggle(FacetKind::Rarity, card_name, rarity)
    }

    pub fn toggle(&mut self, kind: FacetKind, card_name: &str, value: &str) -> bool {
        let known = self.index.card(card_name).is_some_and(|facets| match kind {
            FacetKind::Pack => facets.has_pack(value),
            FacetKind::Rarity => facets.has_rarity(value),
        });
        if !known {
            trace!("ignoring toggle of unknown {:?} '{}' on '{}'", kind, value, card_name);
            return false;
        }
        self.selection.toggle(kind, card_name, value);
        trace!("toggled {:?} '{}' on '{}'", kind, value, card_name);
        true
    }

    pub fn is_pack_selected(&self, card_name: &str, pack_id: &str) -> bool {
        self.selection.is_pack_selected(card_name, pack_id)
    }

    pub fn is_rarity_selected(&self, card_name: &str, rarity: &str) -> bool {
        self.selection.is_rarity_selected(card_name, rarity)
    }

    pub fn reset_card(&mut self, card_name: &str) {
        self.selection.reset(card_name);
    }

    pub fn reset_filters(&mut self) {
        self.selection.reset_all();
    }

    pub fn has_active_filters(&self) -> bool {
        self.selection.has_active_filters()
    }

    // -- Projection --------------------------------------------------------

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    /// Sellers able to fill the basket under the current filters, sorted.
    pub fn sellers(&self) -> Vec<SellerMatch> {
        let mut sellers =
            matching::recompute_sellers(&self.result, &self.requested, &self.selection);
        projection::sort_sellers(&mut sellers, self.sort_key);
        sellers
    }

    pub fn summary(&self) -> MatchSummary {
        let filtered =
            matching::recompute_sellers(&self.result, &self.requested, &self.selection).len();
        MatchSummary::new(&self.result.stats, filtered, self.has_active_filters())
    }
}

fn submit<S: SellerSearch + ?Sized>(search: &S, request: &CardRequestList) -> Result<SearchResult> {
    if request.is_empty() {
        return Err(MatchError::InvalidArgument(
            "at least one card must be requested".to_string(),
        ));
    }
    debug!("submitting seller search for {} cards", request.len());
    search.search(request.as_slice())
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for MatchSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.requested.iter().map(|c| c.name.as_str()).collect();
        write!(
            f,
            "MatchSession(cards=[{}], sellers={}, filters_active={}, sort={:?})",
            names.join(", "),
            self.result.sellers.len(),
            self.has_active_filters(),
            self.sort_key
        )
    }
}
