//! Country-name handling.
//!
//! Two separate concerns share the normalizer: resolving what the player
//! types (`alias`) and rewriting what the map dataset calls a territory
//! (`dataset`). The tables are static configuration, built into lookup
//! structures once and read-only afterwards.

pub mod alias;
pub mod dataset;
pub mod normalize;

pub use alias::AliasTable;
pub use dataset::remap_label;
pub use normalize::normalize;
