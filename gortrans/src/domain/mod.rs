//! Domain types for transit schedule data.
//!
//! Records are created fresh by each extraction and carry no identity
//! across calls. Times are date-less; see [`ScheduledTime::on`].

mod direction;
mod route;
mod time;

pub use direction::{Direction, Stop, TimetableLocator};
pub use route::{Route, RouteLocator, UnknownVehicleType, VehicleType};
pub use time::{ScheduledTime, TimeError};
