//! REST helpers for the auth provider's session endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): no browser session exists, so lookups report
//! [`SessionError::NoSession`]. Guards only resolve in the browser.
//!
//! ERROR HANDLING
//! ==============
//! A 401 maps to `NoSession`; transport errors, other non-success statuses,
//! and undecodable bodies map to `Lookup` so guards never mistake an outage
//! for a signed-out viewer.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use access::{Claims, RoleSource, Roles, SessionError};
use async_trait::async_trait;

/// Default mount point of the auth provider's session API.
pub const DEFAULT_AUTH_BASE: &str = "/api/auth";

/// [`RoleSource`] backed by the auth provider's HTTP endpoints.
#[derive(Clone, Debug)]
pub struct HttpRoleSource {
    base: String,
}

impl Default for HttpRoleSource {
    fn default() -> Self {
        Self::new(DEFAULT_AUTH_BASE)
    }
}

impl HttpRoleSource {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self { base: base.trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn roles_endpoint(&self) -> String {
        format!("{}/roles", self.base)
    }

    #[must_use]
    pub fn claims_endpoint(&self) -> String {
        format!("{}/claims", self.base)
    }
}

/// Map a response status onto the session error taxonomy.
#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
fn classify_status(status: u16) -> Result<(), SessionError> {
    match status {
        200..=299 => Ok(()),
        401 => Err(SessionError::NoSession),
        _ => Err(SessionError::Lookup(format!("session endpoint returned {status}"))),
    }
}

/// Decode a claims body; `null` or an empty body means no claims.
#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
fn parse_claims(body: &str) -> Result<Option<Claims>, SessionError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<Claims>>(body).map_err(|e| SessionError::Lookup(format!("malformed claims: {e}")))
}

#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
fn parse_roles(body: &str) -> Result<Roles, SessionError> {
    serde_json::from_str::<Roles>(body).map_err(|e| SessionError::Lookup(format!("malformed roles: {e}")))
}

#[cfg(feature = "hydrate")]
async fn get_body(url: &str) -> Result<String, SessionError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| SessionError::Lookup(e.to_string()))?;
    classify_status(resp.status())?;
    resp.text().await.map_err(|e| SessionError::Lookup(e.to_string()))
}

#[async_trait(?Send)]
impl RoleSource for HttpRoleSource {
    async fn get_roles(&self) -> Result<Roles, SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let body = get_body(&self.roles_endpoint()).await?;
            parse_roles(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(SessionError::NoSession)
        }
    }

    async fn get_claims(&self) -> Result<Option<Claims>, SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let body = get_body(&self.claims_endpoint()).await?;
            parse_claims(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(SessionError::NoSession)
        }
    }
}
