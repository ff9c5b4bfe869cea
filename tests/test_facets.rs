//! Facet index and facet selection tests.

mod common;

use common::{listing, sample_result, CANDY, PIKACHU};
use seller_match::facets::{FacetIndex, FacetKind, FacetSelection};

// ---------------------------------------------------------------------------
// FacetIndex
// ---------------------------------------------------------------------------

#[test]
fn index_collects_options_across_all_sellers_in_first_seen_order() {
    let index = FacetIndex::build(&sample_result());

    let packs: Vec<&str> = index.packs(PIKACHU).iter().map(|p| p.pack_id.as_str()).collect();
    assert_eq!(packs, vec!["P2", "P1"]);
    assert_eq!(index.rarities(PIKACHU), ["RR", "SAR"]);

    let packs: Vec<&str> = index.packs(CANDY).iter().map(|p| p.pack_id.as_str()).collect();
    assert_eq!(packs, vec!["P1", "P3"]);
    assert_eq!(index.rarities(CANDY), ["U"]);
}

#[test]
fn index_keeps_first_seen_pack_name() {
    let index = FacetIndex::build(&sample_result());
    let first = &index.packs(PIKACHU)[0];
    assert_eq!(first.pack_name, "Pack Two");
}

#[test]
fn unknown_card_has_no_options() {
    let index = FacetIndex::build(&sample_result());
    assert!(index.packs("Nope").is_empty());
    assert!(index.rarities("Nope").is_empty());
    assert!(!index.is_filterable("Nope"));
}

#[test]
fn card_with_single_printing_is_not_filterable() {
    let a = listing("A", "P1", "R", 1, 1);
    let b = listing("A", "P1", "R", 2, 1);
    let c = listing("B", "P1", "R", 1, 1);
    let d = listing("B", "P1", "SR", 1, 1);
    let index = FacetIndex::from_listings([("A", &a), ("A", &b), ("B", &c), ("B", &d)]);

    assert!(!index.is_filterable("A"));
    assert!(index.is_filterable("B"));
    assert_eq!(index.filterable_cards(), vec!["B"]);
}

#[test]
fn filterable_by_pack_alone() {
    let index = FacetIndex::build(&sample_result());
    assert!(index.is_filterable(CANDY));
    assert!(index.card(CANDY).unwrap().has_pack("P3"));
    assert!(!index.card(CANDY).unwrap().has_rarity("RR"));
}

// ---------------------------------------------------------------------------
// FacetSelection
// ---------------------------------------------------------------------------

#[test]
fn everything_is_selected_without_restrictions() {
    let selection = FacetSelection::new();
    assert!(selection.is_pack_selected(PIKACHU, "P1"));
    assert!(selection.is_rarity_selected(PIKACHU, "anything"));
    assert!(!selection.has_active_filters());
    assert!(selection.restriction(PIKACHU).is_unrestricted());
}

#[test]
fn first_toggle_narrows_to_only_that_value() {
    let mut selection = FacetSelection::new();
    selection.toggle_pack(PIKACHU, "P1");

    assert!(selection.is_pack_selected(PIKACHU, "P1"));
    assert!(!selection.is_pack_selected(PIKACHU, "P2"));
    assert!(selection.has_active_filters());
}

#[test]
fn toggling_another_value_adds_it() {
    let mut selection = FacetSelection::new();
    selection.toggle_pack(PIKACHU, "P1");
    selection.toggle_pack(PIKACHU, "P2");

    assert!(selection.is_pack_selected(PIKACHU, "P1"));
    assert!(selection.is_pack_selected(PIKACHU, "P2"));
    assert!(!selection.is_pack_selected(PIKACHU, "P3"));
}

#[test]
fn removing_last_value_reverts_to_unrestricted() {
    let mut selection = FacetSelection::new();
    selection.toggle_rarity(PIKACHU, "SAR");
    selection.toggle_rarity(PIKACHU, "SAR");

    assert!(!selection.has_active_filters());
    assert!(selection.is_rarity_selected(PIKACHU, "SAR"));
    assert!(selection.is_rarity_selected(PIKACHU, "RR"));
    assert!(selection.restriction(PIKACHU).rarities.is_none());
}

#[test]
fn removing_one_of_two_keeps_the_other() {
    let mut selection = FacetSelection::new();
    selection.toggle_rarity(PIKACHU, "SAR");
    selection.toggle_rarity(PIKACHU, "RR");
    selection.toggle_rarity(PIKACHU, "SAR");

    assert!(!selection.is_rarity_selected(PIKACHU, "SAR"));
    assert!(selection.is_rarity_selected(PIKACHU, "RR"));
}

#[test]
fn pack_and_rarity_sets_are_independent() {
    let mut selection = FacetSelection::new();
    selection.toggle(FacetKind::Pack, PIKACHU, "RR");

    assert!(!selection.is_selected(FacetKind::Pack, PIKACHU, "P1"));
    assert!(selection.is_selected(FacetKind::Rarity, PIKACHU, "SAR"));
}

#[test]
fn cards_are_independent() {
    let mut selection = FacetSelection::new();
    selection.toggle_pack(PIKACHU, "P1");

    assert!(selection.is_card_filtered(PIKACHU));
    assert!(!selection.is_card_filtered(CANDY));
    assert!(selection.is_pack_selected(CANDY, "P3"));
}

#[test]
fn reset_clears_one_card_only() {
    let mut selection = FacetSelection::new();
    selection.toggle_pack(PIKACHU, "P1");
    selection.toggle_rarity(PIKACHU, "RR");
    selection.toggle_pack(CANDY, "P3");

    selection.reset(PIKACHU);
    assert!(!selection.is_card_filtered(PIKACHU));
    assert!(selection.is_card_filtered(CANDY));
}

#[test]
fn reset_all_restores_all_selected() {
    let mut selection = FacetSelection::new();
    selection.toggle_pack(PIKACHU, "P1");
    selection.toggle_rarity(CANDY, "U");

    selection.reset_all();
    assert!(!selection.has_active_filters());
    assert_eq!(selection, FacetSelection::new());
}
