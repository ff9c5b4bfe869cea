//! Shared test fixtures for the seller matching integration tests.
//!
//! `sample_result()` is a small search response in wire format: two requested
//! cards ("Pikachu ex" x2, "Rare Candy" x1) and three sellers whose listings
//! span two packs and two rarities.

#![allow(dead_code)]

use seller_match::{CardRequestList, Listing, SearchResult};

pub const PIKACHU: &str = "Pikachu ex";
pub const CANDY: &str = "Rare Candy";

pub fn sample_request() -> CardRequestList {
    let mut request = CardRequestList::new();
    request.add_with_quantity(PIKACHU, 2).unwrap();
    request.add(CANDY).unwrap();
    request
}

pub fn sample_result() -> SearchResult {
    let json = serde_json::json!({
        "sellers": [
            {
                "seller_nickname": "alice",
                "seller_area": "Taipei",
                "credit": 50,
                "order_complete": 120,
                "total_cost": 250,
                "cards": {
                    PIKACHU: {
                        "total_stock": 4,
                        "lowest_price": 120,
                        "estimated_cost": 240,
                        "found_card_names": [PIKACHU],
                        "products": [
                            product(PIKACHU, "P2", "Pack Two", "RR", 120, 3),
                            product(PIKACHU, "P1", "Pack One", "SAR", 500, 1)
                        ]
                    },
                    CANDY: {
                        "total_stock": 4,
                        "lowest_price": 10,
                        "estimated_cost": 10,
                        "found_card_names": [CANDY],
                        "products": [
                            product(CANDY, "P1", "Pack One", "U", 10, 4)
                        ]
                    }
                }
            },
            {
                "seller_nickname": "bob",
                "seller_area": "Taichung",
                "credit": 90,
                "order_complete": 30,
                "total_cost": 265,
                "cards": {
                    PIKACHU: {
                        "total_stock": 2,
                        "lowest_price": 100,
                        "estimated_cost": 250,
                        "found_card_names": [PIKACHU],
                        "products": [
                            product(PIKACHU, "P1", "Pack One", "RR", 100, 1),
                            product(PIKACHU, "P2", "Pack Two", "RR", 150, 1)
                        ]
                    },
                    CANDY: {
                        "total_stock": 1,
                        "lowest_price": 15,
                        "estimated_cost": 15,
                        "found_card_names": [CANDY],
                        "products": [
                            product(CANDY, "P3", "Pack Three", "U", 15, 1)
                        ]
                    }
                }
            },
            {
                "seller_nickname": "carol",
                "seller_area": "Kaohsiung",
                "credit": 20,
                "order_complete": 300,
                "total_cost": 908,
                "cards": {
                    PIKACHU: {
                        "total_stock": 2,
                        "lowest_price": 450,
                        "estimated_cost": 900,
                        "found_card_names": [PIKACHU],
                        "products": [
                            product(PIKACHU, "P2", "Pack Two", "SAR", 450, 2)
                        ]
                    },
                    CANDY: {
                        "total_stock": 7,
                        "lowest_price": 8,
                        "estimated_cost": 8,
                        "found_card_names": [CANDY],
                        "products": [
                            product(CANDY, "P1", "Pack One", "U", 8, 2),
                            product(CANDY, "P3", "Pack Three", "U", 12, 5)
                        ]
                    }
                }
            }
        ],
        "card_details": {
            PIKACHU: {"variants_count": 2, "error": null},
            CANDY: {"variants_count": 2, "error": null}
        },
        "stats": {
            "total_sellers_scanned": 7,
            "matching_sellers": 3,
            "cards_requested": 2
        }
    });

    serde_json::from_value(json).unwrap()
}

/// One product entry exactly as the search serializes it.
pub fn product(
    card_name: &str,
    pack_id: &str,
    pack_name: &str,
    rarity: &str,
    price: u64,
    stock: u32,
) -> serde_json::Value {
    serde_json::json!({
        "price": price,
        "stock": stock,
        "condition": "perfect",
        "condition_label": "",
        "seller_nickname": "ignored",
        "pack_name": "product-level pack name",
        "card_name": card_name,
        "card_key": format!("key-{}", card_name),
        "pack_id": pack_id,
        "pack_card_id": "001",
        "variant_pack_name": pack_name,
        "variant_rare": rarity
    })
}

pub fn listing(card_name: &str, pack_id: &str, rarity: &str, price: u64, stock: u32) -> Listing {
    Listing {
        card_key: format!("key-{}", card_name),
        card_name: card_name.to_string(),
        pack_id: pack_id.to_string(),
        pack_card_id: "001".to_string(),
        pack_name: format!("Pack {}", pack_id),
        rarity: rarity.to_string(),
        condition: "perfect".to_string(),
        condition_label: String::new(),
        price,
        stock,
    }
}

pub fn nicknames(sellers: &[seller_match::SellerMatch]) -> Vec<&str> {
    sellers.iter().map(|s| s.nickname.as_str()).collect()
}
