//! Listing search selection shared across the page tree.
//!
//! DESIGN
//! ======
//! Holds only transient UI selection (category, location filters, the
//! cosmetic login flag). The authoritative session lives with the auth
//! provider; `login` just drives header chrome.

#[cfg(test)]
#[path = "market_test.rs"]
mod market_test;

use serde::{Deserialize, Serialize};
use store::Store;

/// Top-level listing category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyCategory {
    #[default]
    Housing,
    Land,
    Vehicle,
    Event,
    Office,
}

impl PropertyCategory {
    pub const ALL: [PropertyCategory; 5] = [Self::Housing, Self::Land, Self::Vehicle, Self::Event, Self::Office];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Housing => "housing",
            Self::Land => "land",
            Self::Vehicle => "vehicle",
            Self::Event => "event",
            Self::Office => "office",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Property types listed under this category.
    #[must_use]
    pub fn types(self) -> Vec<PropertyType> {
        PropertyType::ALL.into_iter().filter(|t| t.category() == self).collect()
    }
}

/// Listing type, each belonging to exactly one [`PropertyCategory`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Studio,
    Villa,
    Plot,
    Farmland,
    Car,
    Motorbike,
    Truck,
    Hall,
    Garden,
    Desk,
    Warehouse,
}

impl PropertyType {
    pub const ALL: [PropertyType; 13] = [
        Self::Apartment,
        Self::House,
        Self::Studio,
        Self::Villa,
        Self::Plot,
        Self::Farmland,
        Self::Car,
        Self::Motorbike,
        Self::Truck,
        Self::Hall,
        Self::Garden,
        Self::Desk,
        Self::Warehouse,
    ];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::House => "house",
            Self::Studio => "studio",
            Self::Villa => "villa",
            Self::Plot => "plot",
            Self::Farmland => "farmland",
            Self::Car => "car",
            Self::Motorbike => "motorbike",
            Self::Truck => "truck",
            Self::Hall => "hall",
            Self::Garden => "garden",
            Self::Desk => "desk",
            Self::Warehouse => "warehouse",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    #[must_use]
    pub fn category(self) -> PropertyCategory {
        match self {
            Self::Apartment | Self::House | Self::Studio | Self::Villa => PropertyCategory::Housing,
            Self::Plot | Self::Farmland => PropertyCategory::Land,
            Self::Car | Self::Motorbike | Self::Truck => PropertyCategory::Vehicle,
            Self::Hall | Self::Garden => PropertyCategory::Event,
            Self::Desk | Self::Warehouse => PropertyCategory::Office,
        }
    }
}

/// Selection state held by the app and category stores.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarketState {
    pub login: bool,
    pub category: PropertyCategory,
    pub country: Option<String>,
    pub city: Option<String>,
    pub property_type: Option<PropertyType>,
}

impl MarketState {
    /// Whether the selected type, if any, belongs to the selected category.
    #[must_use]
    pub fn type_fits_category(&self) -> bool {
        self.property_type.map_or(true, |t| t.category() == self.category)
    }
}

/// Single-field setters over a market store.
///
/// Each setter replaces exactly one field in one store write.
pub trait MarketActions {
    fn set_login(&self, login: bool);
    fn set_category(&self, category: PropertyCategory);
    fn set_country(&self, country: Option<String>);
    fn set_city(&self, city: Option<String>);
    fn set_type(&self, property_type: Option<PropertyType>);
}

impl MarketActions for Store<MarketState> {
    fn set_login(&self, login: bool) {
        self.update(|s| s.login = login);
    }

    fn set_category(&self, category: PropertyCategory) {
        self.update(|s| s.category = category);
    }

    fn set_country(&self, country: Option<String>) {
        self.update(|s| s.country = country);
    }

    fn set_city(&self, city: Option<String>) {
        self.update(|s| s.city = city);
    }

    fn set_type(&self, property_type: Option<PropertyType>) {
        self.update(|s| s.property_type = property_type);
    }
}
