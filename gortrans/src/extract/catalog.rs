//! Route catalog extraction.
//!
//! Two page shapes list routes:
//!
//! - the per-type listing, where every route anchor is directly followed by
//!   its label and the vehicle type is known up front;
//! - free-text search results, where the anchor wraps an `<h4>` whose text
//!   starts with a category name (`Автобус «80, …»`) that gives the type.

use tracing::{debug, trace};

use crate::domain::{Route, RouteLocator, VehicleType};
use crate::markup::MarkupToken;

use super::error::ParseError;
use super::identifier::extract_identifier;

/// Link targets of route detail pages start with this.
pub const ROUTE_PATH_PREFIX: &str = "/route";

/// Element carrying the label in search results.
const LABEL_HEADING: &str = "h4";

#[derive(Debug)]
enum State {
    Idle,
    /// Route anchor seen; label comes after the next heading.
    AwaitingHeading(RouteLocator),
    /// The next non-blank text is the label.
    Label(RouteLocator),
}

/// Extract routes from a search-results page (`hint = None`) or a
/// single-type route listing (`hint = Some(type)`).
///
/// Candidates whose label cannot be classified are dropped. Never fails on
/// malformed markup; an empty stream yields no routes.
pub fn parse_routes<I>(tokens: I, hint: Option<VehicleType>) -> Result<Vec<Route>, ParseError>
where
    I: IntoIterator<Item = MarkupToken>,
{
    let mut routes = Vec::new();
    let mut state = State::Idle;

    let tokens = tokens
        .into_iter()
        .take_while(|t| *t != MarkupToken::EndOfStream);

    for token in tokens {
        state = match (token, state) {
            (MarkupToken::StartTag(tag), state) if tag.is("a") => {
                match tag.href().filter(|href| href.starts_with(ROUTE_PATH_PREFIX)) {
                    Some(href) => {
                        let locator = RouteLocator::new(href);
                        match hint {
                            Some(_) => State::Label(locator),
                            None => State::AwaitingHeading(locator),
                        }
                    }
                    None => state,
                }
            }

            (MarkupToken::StartTag(tag), State::AwaitingHeading(locator) | State::Label(locator))
                if hint.is_none() =>
            {
                if tag.is(LABEL_HEADING) {
                    State::Label(locator)
                } else {
                    State::AwaitingHeading(locator)
                }
            }

            (MarkupToken::Text(text), State::Label(locator)) => {
                if text.trim().is_empty() {
                    State::Label(locator)
                } else {
                    if let Some(route) = route_from_label(locator, &text, hint) {
                        routes.push(route);
                    }
                    State::Idle
                }
            }

            (_, state) => state,
        };
    }

    debug!(
        routes = routes.len(),
        hinted = hint.is_some(),
        "parsed route catalog"
    );
    Ok(routes)
}

/// Build a route from its raw label, or `None` if the vehicle type cannot
/// be determined.
fn route_from_label(
    locator: RouteLocator,
    raw: &str,
    hint: Option<VehicleType>,
) -> Option<Route> {
    let label = raw.trim();

    let (vehicle_type, rest) = match hint {
        Some(t) => (t, label),
        None => match classify(label) {
            Some(found) => found,
            None => {
                trace!(label, locator = %locator, "skipping label without category");
                return None;
            }
        },
    };

    let id = extract_identifier(strip_quotes(rest).trim());

    Some(Route {
        locator,
        display_name: id.name,
        vehicle_type,
        number: id.number,
        literal_suffix: id.literal_suffix,
    })
}

/// Match a category prefix, returning the type and the label after it.
fn classify(label: &str) -> Option<(VehicleType, &str)> {
    VehicleType::SEARCH_CATEGORIES.into_iter().find_map(|t| {
        let prefix = t.category_prefix()?;
        label.strip_prefix(prefix).map(|rest| (t, rest))
    })
}

fn strip_quotes(s: &str) -> String {
    s.replace(['«', '»'], "")
}
