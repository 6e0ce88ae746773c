//! Route catalog types.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Error returned when a vehicle type name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vehicle type: {0:?} (expected bus, trolleybus, tram or taxi)")]
pub struct UnknownVehicleType(String);

/// Kind of vehicle serving a route.
///
/// The discriminant is the identifier the site uses for its per-type
/// route listing (`/routes-list/{id}/`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Bus = 1,
    Trolleybus = 2,
    Tram = 3,
    /// Fixed-route taxi (marshrutka).
    Taxi = 4,
}

impl VehicleType {
    /// All vehicle types, in listing-id order.
    pub const ALL: [VehicleType; 4] = [
        VehicleType::Bus,
        VehicleType::Trolleybus,
        VehicleType::Tram,
        VehicleType::Taxi,
    ];

    /// Categories recognised at the start of a search-result label.
    ///
    /// Order matters only in that no prefix is a prefix of another.
    pub(crate) const SEARCH_CATEGORIES: [VehicleType; 3] =
        [VehicleType::Bus, VehicleType::Tram, VehicleType::Taxi];

    /// Identifier used in the site's route listing URL.
    pub fn listing_id(self) -> u8 {
        self as u8
    }

    /// Category name that prefixes this type's search-result labels.
    ///
    /// Trolleybus routes never show up with a category prefix, so they
    /// cannot be classified from search results.
    pub fn category_prefix(self) -> Option<&'static str> {
        match self {
            VehicleType::Bus => Some("Автобус"),
            VehicleType::Trolleybus => None,
            VehicleType::Tram => Some("Трамвай"),
            VehicleType::Taxi => Some("Маршрутное такси"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VehicleType::Bus => "bus",
            VehicleType::Trolleybus => "trolleybus",
            VehicleType::Tram => "tram",
            VehicleType::Taxi => "taxi",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = UnknownVehicleType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        VehicleType::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| UnknownVehicleType(s.to_string()))
    }
}

/// Opaque reference to a route's detail page, as found in the markup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RouteLocator(String);

impl RouteLocator {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A transit route as listed in the catalog.
///
/// `number` and `literal_suffix` are always derived from the label text
/// the route was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub locator: RouteLocator,
    pub display_name: String,
    pub vehicle_type: VehicleType,
    pub number: u32,
    /// Uppercase variant letter, e.g. the `Т` in `7Т`.
    pub literal_suffix: Option<char>,
}

impl Route {
    /// The route number as shown to passengers: `"80"`, `"7Т"`.
    pub fn designation(&self) -> String {
        match self.literal_suffix {
            Some(letter) => format!("{}{}", self.number, letter),
            None => self.number.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(number: u32, literal_suffix: Option<char>) -> Route {
        Route {
            locator: RouteLocator::new("/route/207/"),
            display_name: "Н.Крым - Центральный рынок".to_string(),
            vehicle_type: VehicleType::Taxi,
            number,
            literal_suffix,
        }
    }

    #[test]
    fn listing_ids_match_site_numbering() {
        assert_eq!(VehicleType::Bus.listing_id(), 1);
        assert_eq!(VehicleType::Trolleybus.listing_id(), 2);
        assert_eq!(VehicleType::Tram.listing_id(), 3);
        assert_eq!(VehicleType::Taxi.listing_id(), 4);
    }

    #[test]
    fn search_categories_have_prefixes() {
        for t in VehicleType::SEARCH_CATEGORIES {
            assert!(t.category_prefix().is_some(), "{t} has no prefix");
        }
        assert!(VehicleType::Trolleybus.category_prefix().is_none());
    }

    #[test]
    fn parse_vehicle_type() {
        assert_eq!("bus".parse::<VehicleType>(), Ok(VehicleType::Bus));
        assert_eq!(" Tram ".parse::<VehicleType>(), Ok(VehicleType::Tram));
        assert_eq!("TAXI".parse::<VehicleType>(), Ok(VehicleType::Taxi));
        assert!("ferry".parse::<VehicleType>().is_err());
    }

    #[test]
    fn designation_with_and_without_suffix() {
        assert_eq!(route(7, Some('Т')).designation(), "7Т");
        assert_eq!(route(80, None).designation(), "80");
    }

    #[test]
    fn serializes_vehicle_type_lowercase() {
        let json = serde_json::to_value(route(7, Some('Т'))).unwrap();
        assert_eq!(json["vehicle_type"], "taxi");
        assert_eq!(json["locator"], "/route/207/");
        assert_eq!(json["literal_suffix"], "Т");
    }
}
