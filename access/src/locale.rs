//! Supported UI languages and locale-prefixed paths.
//!
//! DESIGN
//! ======
//! The active locale always lives in the first URL path segment
//! (`/en/...`, `/fr/...`). Every navigation produced by this crate goes
//! through [`localized_href`] so a redirect never drops the language.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use serde::{Deserialize, Serialize};

/// A language the marketplace is translated into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    /// Every supported locale, in routing order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    /// Path segment / language code for this locale.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Parse a language tag, accepting region variants such as `fr-CA`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        let primary = code.split(['-', '_']).next().unwrap_or(code);
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }

    /// Split a request path into its locale prefix and the remaining path.
    ///
    /// Returns `None` when the first segment is not exactly a supported code.
    /// The remainder always starts with `/`.
    #[must_use]
    pub fn split_path(path: &str) -> Option<(Self, &str)> {
        let trimmed = path.strip_prefix('/')?;
        let (segment, rest) = match trimmed.find('/') {
            Some(idx) => (&trimmed[..idx], &trimmed[idx..]),
            None => (trimmed, "/"),
        };
        let locale = Self::ALL.into_iter().find(|l| l.code() == segment)?;
        Some((locale, rest))
    }

    /// Pick the best supported locale from an `Accept-Language` header value.
    ///
    /// Entries are ranked by their `q` weight; equal weights keep header order.
    #[must_use]
    pub fn negotiate(accept_language: &str) -> Option<Self> {
        let mut best: Option<(Self, f32)> = None;
        for entry in accept_language.split(',') {
            let mut parts = entry.split(';');
            let Some(tag) = parts.next() else { continue };
            let weight = parts
                .find_map(|p| p.trim().strip_prefix("q="))
                .map_or(Some(1.0), |q| q.trim().parse::<f32>().ok());
            let (Some(locale), Some(weight)) = (Self::from_code(tag), weight) else {
                continue;
            };
            if weight <= 0.0 {
                continue;
            }
            if best.map_or(true, |(_, w)| weight > w) {
                best = Some((locale, weight));
            }
        }
        best.map(|(locale, _)| locale)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Prefix `href` with the locale segment.
///
/// The root path maps to the bare prefix: `("/", Fr)` becomes `/fr`.
#[must_use]
pub fn localized_href(locale: Locale, href: &str) -> String {
    let href = href.trim();
    if href.is_empty() || href == "/" {
        return format!("/{}", locale.code());
    }
    if href.starts_with('/') {
        format!("/{}{href}", locale.code())
    } else {
        format!("/{}/{href}", locale.code())
    }
}
