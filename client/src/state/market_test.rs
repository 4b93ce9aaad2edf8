use std::sync::{Arc, Mutex};

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn market_state_default_snapshot() {
    let state = MarketState::default();
    assert!(!state.login);
    assert_eq!(state.category, PropertyCategory::Housing);
    assert_eq!(state.country, None);
    assert_eq!(state.city, None);
    assert_eq!(state.property_type, None);
}

// =============================================================
// Categories and types
// =============================================================

#[test]
fn category_codes_round_trip() {
    for category in PropertyCategory::ALL {
        assert_eq!(PropertyCategory::from_code(category.code()), Some(category));
    }
    assert_eq!(PropertyCategory::from_code("castle"), None);
}

#[test]
fn type_codes_round_trip() {
    for property_type in PropertyType::ALL {
        assert_eq!(PropertyType::from_code(property_type.code()), Some(property_type));
    }
}

#[test]
fn every_category_lists_its_own_types() {
    for category in PropertyCategory::ALL {
        let types = category.types();
        assert!(!types.is_empty(), "{category:?} has no types");
        assert!(types.iter().all(|t| t.category() == category));
    }
}

#[test]
fn vehicle_types() {
    assert_eq!(
        PropertyCategory::Vehicle.types(),
        vec![PropertyType::Car, PropertyType::Motorbike, PropertyType::Truck]
    );
}

#[test]
fn category_serializes_as_code() {
    let json = serde_json::to_string(&PropertyCategory::Vehicle).expect("serialize");
    assert_eq!(json, "\"vehicle\"");
}

#[test]
fn type_fits_category_checks_selection() {
    let mut state = MarketState { property_type: Some(PropertyType::Villa), ..MarketState::default() };
    assert!(state.type_fits_category());
    state.category = PropertyCategory::Land;
    assert!(!state.type_fits_category());
    state.property_type = None;
    assert!(state.type_fits_category());
}

// =============================================================
// MarketActions
// =============================================================

#[test]
fn setters_replace_one_field_each() {
    let store = Store::new(MarketState::default());
    store.set_login(true);
    store.set_city(Some("Douala".to_owned()));
    store.set_type(Some(PropertyType::Studio));
    assert_eq!(
        store.get(),
        MarketState {
            login: true,
            category: PropertyCategory::Housing,
            country: None,
            city: Some("Douala".to_owned()),
            property_type: Some(PropertyType::Studio),
        }
    );
}

#[test]
fn set_category_leaves_type_untouched() {
    let store = Store::new(MarketState::default());
    store.set_type(Some(PropertyType::House));
    store.set_category(PropertyCategory::Vehicle);
    assert_eq!(store.select(|s| s.property_type), Some(PropertyType::House));
}

#[test]
fn filters_clear_independently() {
    let store = Store::new(MarketState::default());
    store.set_country(Some("Cameroon".to_owned()));
    store.set_city(Some("Douala".to_owned()));
    store.set_city(None);
    assert_eq!(store.select(|s| s.country.clone()), Some("Cameroon".to_owned()));
    assert_eq!(store.select(|s| s.city.clone()), None);
}

#[test]
fn category_then_country_then_reset_scenario() {
    let store = Store::new(MarketState::default());
    store.set_category(PropertyCategory::Vehicle);
    store.set_country(Some("Cameroon".to_owned()));
    assert_eq!(
        store.get(),
        MarketState {
            login: false,
            category: PropertyCategory::Vehicle,
            country: Some("Cameroon".to_owned()),
            city: None,
            property_type: None,
        }
    );
    store.reset();
    assert_eq!(store.get(), MarketState::default());
}

#[test]
fn category_subscriber_ignores_country_changes() {
    let store = Store::new(MarketState::default());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = store.subscribe(
        |s: &MarketState| s.category,
        move |c: &PropertyCategory| sink.lock().expect("sink").push(*c),
    );

    store.set_country(Some("Cameroon".to_owned()));
    assert!(seen.lock().expect("seen").is_empty());

    store.set_category(PropertyCategory::Event);
    assert_eq!(*seen.lock().expect("seen"), vec![PropertyCategory::Event]);
}
