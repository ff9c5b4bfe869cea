//! The multi-card seller search collaborator.
//!
//! Seller discovery happens elsewhere; this module only defines the seam a
//! [`MatchSession`](crate::MatchSession) submits requests through.

use std::path::Path;

use crate::error::Result;
use crate::models::{RequestedCard, SearchResult};

/// Finds sellers who stock every requested card.
///
/// One call per search submission. Failures for individual cards are reported
/// inside the returned [`SearchResult`]; an `Err` means the search as a whole
/// failed.
pub trait SellerSearch {
    fn search(&self, cards: &[RequestedCard]) -> Result<SearchResult>;
}

impl<F> SellerSearch for F
where
    F: Fn(&[RequestedCard]) -> Result<SearchResult>,
{
    fn search(&self, cards: &[RequestedCard]) -> Result<SearchResult> {
        self(cards)
    }
}

/// Serves one preloaded result regardless of the request.
#[derive(Debug, Clone, Default)]
pub struct StaticSearch {
    result: SearchResult,
}

impl StaticSearch {
    pub fn new(result: SearchResult) -> Self {
        Self { result }
    }

    /// Replay a captured JSON response from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(SearchResult::from_path(path)?))
    }
}

impl SellerSearch for StaticSearch {
    fn search(&self, _cards: &[RequestedCard]) -> Result<SearchResult> {
        Ok(self.result.clone())
    }
}
