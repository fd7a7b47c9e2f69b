//! Cartera Core - Shared types library.
//!
//! This crate provides common types used across all Cartera components:
//! - `server` - REST API and static front end
//! - `cli` - Command-line tools for migrations and data backfills
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and portal credentials

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
