//! Perm public transport schedule extraction.
//!
//! Turns pages of the city transport site into typed records: the route
//! catalog, each route's directions with their stops, and each stop's
//! timetable.

pub mod domain;
pub mod extract;
pub mod markup;
pub mod site;
