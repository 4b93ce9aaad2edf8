//! Viewer identity as reported by the authentication provider.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use serde::{Deserialize, Serialize};

/// Role flags resolved for the current viewer.
///
/// Missing flags in the provider payload default to `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Roles {
    /// Signed in with a marketplace account.
    pub is_user: bool,
    /// Account verified as a listing agent.
    pub is_verified: bool,
    /// Marketplace administrator.
    pub is_admin: bool,
}

impl Roles {
    /// Roles of a signed-in, unverified viewer.
    #[must_use]
    pub fn user() -> Self {
        Self { is_user: true, ..Self::default() }
    }

    /// Roles of a verified agent.
    #[must_use]
    pub fn verified_agent() -> Self {
        Self { is_user: true, is_verified: true, is_admin: false }
    }

    /// Roles of an administrator.
    #[must_use]
    pub fn admin() -> Self {
        Self { is_user: true, is_verified: true, is_admin: true }
    }
}

/// Decoded session payload identifying the viewer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Provider-scoped subject identifier.
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Expiry as seconds since the Unix epoch.
    #[serde(default)]
    pub exp: Option<i64>,
}
