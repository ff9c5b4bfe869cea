//! Facet filtering: which packs and rarities exist, and which are selected.

pub mod index;
pub mod selection;

pub use index::{CardFacets, FacetIndex, PackOption};
pub use selection::{FacetKind, FacetRestriction, FacetSelection};
