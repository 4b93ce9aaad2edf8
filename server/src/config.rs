//! Process configuration loaded from the environment.
//!
//! `.env` is read first (via `dotenvy`) so local development can keep
//! settings out of the shell.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use access::Locale;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOCALE_COOKIE: &str = "locale";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("unsupported DEFAULT_LOCALE: {0}")]
    UnknownLocale(String),
    #[error("LOCALE_COOKIE must not be empty")]
    EmptyCookieName,
}

/// Server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Locale used when neither cookie nor `Accept-Language` decides.
    pub default_locale: Locale,
    /// Cookie remembering the viewer's last locale.
    pub locale_cookie: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, default_locale: Locale::default(), locale_cookie: DEFAULT_LOCALE_COOKIE.to_owned() }
    }
}

impl Config {
    /// Load from `PORT`, `DEFAULT_LOCALE`, `LOCALE_COOKIE`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Unset keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a value is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup("PORT") {
            config.port = raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw.clone()))?;
        }
        if let Some(raw) = lookup("DEFAULT_LOCALE") {
            config.default_locale = Locale::from_code(&raw).ok_or_else(|| ConfigError::UnknownLocale(raw.clone()))?;
        }
        if let Some(raw) = lookup("LOCALE_COOKIE") {
            let name = raw.trim();
            if name.is_empty() {
                return Err(ConfigError::EmptyCookieName);
            }
            config.locale_cookie = name.to_owned();
        }
        Ok(config)
    }
}
