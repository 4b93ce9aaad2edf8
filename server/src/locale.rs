//! Locale-prefix middleware.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page lives under `/{locale}`. Requests for unprefixed page paths
//! are redirected to the viewer's locale before the Leptos router sees them;
//! prefixed requests refresh the locale cookie so the next bare visit lands
//! in the same language. API, asset, and health paths pass through.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use std::sync::Arc;

use access::{Locale, localized_href};
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::config::Config;

const PASSTHROUGH_PREFIXES: &[&str] = &["/api", "/pkg", "/healthz"];

/// Paths served without a locale prefix: API, assets, health, and files.
pub fn is_passthrough(path: &str) -> bool {
    let reserved = PASSTHROUGH_PREFIXES
        .iter()
        .any(|prefix| path.strip_prefix(prefix).is_some_and(|rest| rest.is_empty() || rest.starts_with('/')));
    reserved || path.rsplit('/').next().is_some_and(|segment| segment.contains('.'))
}

/// Cookie first, then `Accept-Language`, then the configured default.
pub fn pick_locale(cookie: Option<&str>, accept_language: Option<&str>, default: Locale) -> Locale {
    cookie
        .and_then(Locale::from_code)
        .or_else(|| accept_language.and_then(Locale::negotiate))
        .unwrap_or(default)
}

/// Locale-prefixed redirect target preserving the query string.
pub fn redirect_target(path: &str, query: Option<&str>, locale: Locale) -> String {
    let mut target = localized_href(locale, path);
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        target.push('?');
        target.push_str(query);
    }
    target
}

/// Axum middleware enforcing the locale prefix on page requests.
pub async fn negotiate_locale(
    State(config): State<Arc<Config>>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    if is_passthrough(&path) {
        return next.run(request).await;
    }

    let cookie_locale = jar.get(&config.locale_cookie).map(|c| c.value().to_owned());

    if let Some((locale, _)) = Locale::split_path(&path) {
        let response = next.run(request).await;
        if cookie_locale.as_deref() == Some(locale.code()) {
            return response;
        }
        let cookie = Cookie::build((config.locale_cookie.clone(), locale.code()))
            .path("/")
            .same_site(SameSite::Lax);
        return (jar.add(cookie), response).into_response();
    }

    let accept_language = request
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    let locale = pick_locale(cookie_locale.as_deref(), accept_language, config.default_locale);
    let target = redirect_target(&path, request.uri().query(), locale);
    tracing::debug!(%path, location = %target, "redirecting to locale-prefixed path");
    Redirect::temporary(&target).into_response()
}
