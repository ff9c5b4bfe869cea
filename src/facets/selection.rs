//! Per-card pack and rarity inclusion sets.
//!
//! An absent set means "no restriction". The first toggle on an unrestricted
//! facet narrows it to exactly the toggled value, and removing the last value
//! from a set deletes the set instead of leaving it empty.

use std::collections::{HashMap, HashSet};

/// Which facet of a card a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetKind {
    Pack,
    Rarity,
}

/// Borrowed view of the restrictions applying to one card.
#[derive(Debug, Clone, Copy, Default)]
pub struct FacetRestriction<'a> {
    pub packs: Option<&'a HashSet<String>>,
    pub rarities: Option<&'a HashSet<String>>,
}

impl<'a> FacetRestriction<'a> {
    /// No restriction on either facet.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn is_unrestricted(&self) -> bool {
        self.packs.is_none() && self.rarities.is_none()
    }

    /// Both facets must admit the value (logical AND).
    pub fn admits(&self, pack_id: &str, rarity: &str) -> bool {
        self.packs.map_or(true, |set| set.contains(pack_id))
            && self.rarities.map_or(true, |set| set.contains(rarity))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSelection {
    packs: HashMap<String, HashSet<String>>,
    rarities: HashMap<String, HashSet<String>>,
}

impl FacetSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_pack(&mut self, card_name: &str, pack_id: &str) {
        toggle(&mut self.packs, card_name, pack_id);
    }

    pub fn toggle_rarity(&mut self, card_name: &str, rarity: &str) {
        toggle(&mut self.rarities, card_name, rarity);
    }

    pub fn toggle(&mut self, kind: FacetKind, card_name: &str, value: &str) {
        match kind {
            FacetKind::Pack => self.toggle_pack(card_name, value),
            FacetKind::Rarity => self.toggle_rarity(card_name, value),
        }
    }

    pub fn is_pack_selected(&self, card_name: &str, pack_id: &str) -> bool {
        is_selected(&self.packs, card_name, pack_id)
    }

    pub fn is_rarity_selected(&self, card_name: &str, rarity: &str) -> bool {
        is_selected(&self.rarities, card_name, rarity)
    }

    pub fn is_selected(&self, kind: FacetKind, card_name: &str, value: &str) -> bool {
        match kind {
            FacetKind::Pack => self.is_pack_selected(card_name, value),
            FacetKind::Rarity => self.is_rarity_selected(card_name, value),
        }
    }

    /// Drop both restriction sets for one card.
    pub fn reset(&mut self, card_name: &str) {
        self.packs.remove(card_name);
        self.rarities.remove(card_name);
    }

    /// Drop every restriction. Called on each new search.
    pub fn reset_all(&mut self) {
        self.packs.clear();
        self.rarities.clear();
    }

    pub fn has_active_filters(&self) -> bool {
        !self.packs.is_empty() || !self.rarities.is_empty()
    }

    pub fn is_card_filtered(&self, card_name: &str) -> bool {
        self.packs.contains_key(card_name) || self.rarities.contains_key(card_name)
    }

    pub fn restriction(&self, card_name: &str) -> FacetRestriction<'_> {
        FacetRestriction {
            packs: self.packs.get(card_name),
            rarities: self.rarities.get(card_name),
        }
    }
}

fn toggle(sets: &mut HashMap<String, HashSet<String>>, card_name: &str, value: &str) {
    match sets.get_mut(card_name) {
        None => {
            sets.insert(card_name.to_string(), HashSet::from([value.to_string()]));
        }
        Some(set) => {
            if !set.remove(value) {
                set.insert(value.to_string());
            } else if set.is_empty() {
                sets.remove(card_name);
            }
        }
    }
}

fn is_selected(sets: &HashMap<String, HashSet<String>>, card_name: &str, value: &str) -> bool {
    sets.get(card_name).map_or(true, |set| set.contains(value))
}
