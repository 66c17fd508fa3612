//! Graph flattening engine for Rowpress.
//!
//! This crate walks an in-memory graph of related entities depth-first and
//! produces a table-keyed collection of normalized rows ready for bulk
//! insertion: data rows for every reachable entity, synthesized association
//! rows for many-to-many edges, with cycle termination and a final
//! structural deduplication pass.

pub mod dedup;
pub mod engine;
pub mod normalize;

pub use dedup::deduplicate;
pub use engine::Flattener;
pub use normalize::normalize;
