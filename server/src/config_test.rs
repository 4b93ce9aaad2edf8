use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn unset_keys_take_defaults() {
    let config = Config::from_lookup(lookup(&[])).expect("config");
    assert_eq!(config, Config::default());
    assert_eq!(config.port, 3000);
    assert_eq!(config.default_locale, Locale::En);
    assert_eq!(config.locale_cookie, "locale");
}

#[test]
fn explicit_values_override_defaults() {
    let config =
        Config::from_lookup(lookup(&[("PORT", "8080"), ("DEFAULT_LOCALE", "fr-FR"), ("LOCALE_COOKIE", "lang")]))
            .expect("config");
    assert_eq!(config.port, 8080);
    assert_eq!(config.default_locale, Locale::Fr);
    assert_eq!(config.locale_cookie, "lang");
}

#[test]
fn invalid_port_is_rejected() {
    let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).expect_err("bad port");
    assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));
}

#[test]
fn unsupported_locale_is_rejected() {
    let err = Config::from_lookup(lookup(&[("DEFAULT_LOCALE", "de")])).expect_err("bad locale");
    assert_eq!(err.to_string(), "unsupported DEFAULT_LOCALE: de");
}

#[test]
fn blank_cookie_name_is_rejected() {
    let err = Config::from_lookup(lookup(&[("LOCALE_COOKIE", "  ")])).expect_err("blank cookie");
    assert_eq!(err, ConfigError::EmptyCookieName);
}
