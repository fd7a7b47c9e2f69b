//! Wire and domain models for the directory API.
//!
//! The JSON field names are camelCase to match the API this service replaced;
//! the bundled front end and any external callers rely on them.

pub mod client;
pub mod contact;
pub mod supplier;

pub use client::{Client, ClientDetail, ClientSummary, ClientUpdate, NewClient};
pub use contact::{Contact, ContactUpdate, NewContact};
pub use supplier::{NewSupplier, Supplier, SupplierUpdate};
