//! Shared value types for Cartera entities.

pub mod id;
pub mod portal;

pub use id::{ClientId, ContactId, SupplierId};
pub use portal::PortalCredentials;
