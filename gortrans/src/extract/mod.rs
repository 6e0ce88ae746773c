//! Page extractors.
//!
//! Each extractor is a single forward pass over a [`MarkupToken`] stream
//! with a small explicit state machine. The page shape is chosen by the
//! caller; nothing here sniffs which kind of page it was given.
//!
//! Error policy is the same everywhere: unrecognised or malformed structure
//! is skipped, an empty stream yields an empty result, and only a required
//! number that is present but unreadable (a timetable hour) fails the call.
//!
//! [`MarkupToken`]: crate::markup::MarkupToken

mod catalog;
mod error;
mod identifier;
mod schedule;
mod stops;


pub use catalog::{ROUTE_PATH_PREFIX, parse_routes};
pub use error::ParseError;
pub use identifier::{RouteIdentifier, extract_identifier};
pub use schedule::parse_schedule;
pub use stops::{TIMETABLE_PATH_PREFIX, parse_directions};
