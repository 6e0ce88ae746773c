//! Access to the Perm municipal transport site.
//!
//! Page fetching is kept behind [`PageSource`] so that URL construction
//! and extraction can run against canned pages. [`GortransClient`] is the
//! HTTP implementation.

mod client;
mod error;
mod pages;

pub use client::{ClientConfig, GortransClient};
pub use error::ClientError;
pub use pages::{Gortrans, PageSource, listing_path};
