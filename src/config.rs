use std::collections::HashMap;

/// Maximum number of distinct cards in one multi-card search.
pub const MAX_REQUESTED_CARDS: usize = 10;

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 99;
pub const DEFAULT_QUANTITY: u32 = 1;

pub fn condition_labels() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("perfect", "完美品"),
        ("near_perfect", "近完美"),
        ("good", "良好"),
        ("fair", "普通"),
        ("poor", "差"),
        ("flawed", "瑕疵品"),
    ])
}

/// Clamp a requested quantity into the accepted `[MIN_QUANTITY, MAX_QUANTITY]` range.
pub fn clamp_quantity(quantity: i64) -> u32 {
    quantity.clamp(MIN_QUANTITY as i64, MAX_QUANTITY as i64) as u32
}
