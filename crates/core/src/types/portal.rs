//! Portal credential bookkeeping.
//!
//! Clients and suppliers can each carry a set of credentials for an external
//! web portal. The fields are plain optional strings: the legacy data this
//! system manages has gaps in all three, and the UI renders whatever exists.

use serde::{Deserialize, Serialize};

/// Credentials for an external portal (URL, username, password).
///
/// All fields are optional; `is_empty` distinguishes "no portal recorded"
/// from a partially filled set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct PortalCredentials {
    /// Portal login page URL.
    pub portal_url: Option<String>,
    /// Portal account username.
    pub portal_user: Option<String>,
    /// Portal account password (stored and served in plaintext; the system
    /// has no authentication layer by design).
    pub portal_pass: Option<String>,
}

impl PortalCredentials {
    /// Create a credential set from its three parts.
    #[must_use]
    pub const fn new(
        portal_url: Option<String>,
        portal_user: Option<String>,
        portal_pass: Option<String>,
    ) -> Self {
        Self {
            portal_url,
            portal_user,
            portal_pass,
        }
    }

    /// True when no field carries a value.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.portal_url.is_none() && self.portal_user.is_none() && self.portal_pass.is_none()
    }
}
