//! CLI command implementations.

pub mod backfill;
pub mod migrate;
