//! Seller matching: per-card allocation and whole-basket recomputation.

pub mod allocation;
pub mod recompute;

pub use allocation::{allocate, Allocation};
pub use recompute::{recompute_sellers, rematch_seller};
