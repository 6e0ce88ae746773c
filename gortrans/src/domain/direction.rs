//! Route directions and their stops.

use std::fmt;

use serde::Serialize;

/// Opaque reference to a stop's timetable page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TimetableLocator(String);

impl TimetableLocator {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimetableLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stop on one direction of a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stop {
    pub name: String,
    pub timetable: TimetableLocator,
}

/// One travel direction of a route.
///
/// Stops are kept in the order they appear on the route page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Direction {
    pub name: String,
    pub stops: Vec<Stop>,
}

impl Direction {
    /// Create a direction with no stops yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stops: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_locator_as_plain_string() {
        let mut dir = Direction::new("ДДК им.Кирова – ул. Милиционера Власова");
        dir.stops.push(Stop {
            name: "Детский дом культуры им.Кирова".to_string(),
            timetable: TimetableLocator::new("/time-table/80/1701"),
        });

        let json = serde_json::to_value(&dir).unwrap();
        assert_eq!(json["name"], "ДДК им.Кирова – ул. Милиционера Власова");
        assert_eq!(json["stops"][0]["name"], "Детский дом культуры им.Кирова");
        assert_eq!(json["stops"][0]["timetable"], "/time-table/80/1701");
    }
}
