use serde::{Deserialize, Serialize};

use crate::config::{self, DEFAULT_QUANTITY, MAX_REQUESTED_CARDS};
use crate::error::{MatchError, Result};

// ---------------------------------------------------------------------------
// RequestedCard — One card name and how many copies are wanted
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RequestedCardFields")]
pub struct RequestedCard {
    pub name: String,
    pub quantity: u32,
}

/// Deserialized fields, routed through [`RequestedCard::new`] for clamping.
#[derive(Deserialize)]
struct RequestedCardFields {
    name: String,
    quantity: u32,
}

impl From<RequestedCardFields> for RequestedCard {
    fn from(fields: RequestedCardFields) -> Self {
        Self::new(fields.name, fields.quantity)
    }
}

impl RequestedCard {
    /// Create a request, clamping `quantity` into the accepted range.
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity: config::clamp_quantity(quantity as i64),
        }
    }
}

// ---------------------------------------------------------------------------
// CardRequestList — The editable list submitted to a multi-card search
// ---------------------------------------------------------------------------

/// Ordered, case-insensitively deduplicated list of requested cards.
///
/// Holds at most [`MAX_REQUESTED_CARDS`] entries. Quantities are always kept
/// within `[MIN_QUANTITY, MAX_QUANTITY]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CardRequestList {
    cards: Vec<RequestedCard>,
}

impl CardRequestList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card with the default quantity of one.
    pub fn add(&mut self, name: &str) -> Result<()> {
        self.add_with_quantity(name, DEFAULT_QUANTITY)
    }

    /// Add a card with an explicit quantity (clamped).
    ///
    /// The name is trimmed first. Empty names, case-insensitive duplicates and
    /// additions beyond the list limit are rejected.
    pub fn add_with_quantity(&mut self, name: &str, quantity: u32) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MatchError::InvalidArgument(
                "card name must not be empty".to_string(),
            ));
        }
        if self.position(name).is_some() {
            return Err(MatchError::DuplicateCard(name.to_string()));
        }
        if self.is_full() {
            return Err(MatchError::TooManyCards {
                limit: MAX_REQUESTED_CARDS,
            });
        }
        self.cards.push(RequestedCard::new(name, quantity));
        Ok(())
    }

    /// Remove a card by name (case-insensitive). Returns `true` if removed.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(idx) => {
                self.cards.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Shift a card's quantity by `delta`, clamped. Returns the new quantity.
    pub fn adjust_quantity(&mut self, name: &str, delta: i64) -> Option<u32> {
        let idx = self.position(name)?;
        let card = &mut self.cards[idx];
        let shifted = (card.quantity as i64).saturating_add(delta);
        card.quantity = config::clamp_quantity(shifted);
        Some(card.quantity)
    }

    /// Overwrite a card's quantity, clamped. Returns the stored quantity.
    pub fn set_quantity(&mut self, name: &str, quantity: u32) -> Option<u32> {
        let idx = self.position(name)?;
        let card = &mut self.cards[idx];
        card.quantity = config::clamp_quantity(quantity as i64);
        Some(card.quantity)
    }

    pub fn quantity_of(&self, name: &str) -> Option<u32> {
        self.position(name).map(|idx| self.cards[idx].quantity)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cards.len() >= MAX_REQUESTED_CARDS
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RequestedCard> {
        self.cards.iter()
    }

    pub fn as_slice(&self) -> &[RequestedCard] {
        &self.cards
    }

    fn position(&self, name: &str) -> Option<usize> {
        let needle = name.trim().to_lowercase();
        self.cards
            .iter()
            .position(|c| c.name.to_lowercase() == needle)
    }
}

impl<'a> IntoIterator for &'a CardRequestList {
    type Item = &'a RequestedCard;
    type IntoIter = std::slice::Iter<'a, RequestedCard>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
