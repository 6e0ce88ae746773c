//! Route directions and stop lists from a route detail page.
//!
//! Each direction starts with an `<h3>` holding its name, followed by one
//! timetable anchor per stop. There is no closing marker; a direction stays
//! open until the next `<h3>`.

use tracing::{debug, trace};

use crate::domain::{Direction, Stop, TimetableLocator};
use crate::markup::MarkupToken;

use super::error::ParseError;

/// Link targets of stop timetable pages start with this.
pub const TIMETABLE_PATH_PREFIX: &str = "/time-table";

const DIRECTION_HEADING: &str = "h3";

/// The direction most recently opened by a heading.
///
/// Directions are referenced by their index in the output, so stops are
/// always appended to the one that was last opened. A direction is pushed
/// when its heading is seen and removed again if it never gets a name.
#[derive(Debug)]
struct OpenDirection {
    index: usize,
    /// The next text token, blank or not, is the direction's name.
    awaiting_name: bool,
    /// Timetable anchor seen; the stop's name is the next non-blank text.
    pending_stop: Option<TimetableLocator>,
}

/// Extract every direction of a route, each with its stops in page order.
///
/// Never fails on malformed markup; an empty stream yields no directions.
pub fn parse_directions<I>(tokens: I) -> Result<Vec<Direction>, ParseError>
where
    I: IntoIterator<Item = MarkupToken>,
{
    let mut directions: Vec<Direction> = Vec::new();
    let mut open: Option<OpenDirection> = None;

    let tokens = tokens
        .into_iter()
        .take_while(|t| *t != MarkupToken::EndOfStream);

    for token in tokens {
        match token {
            MarkupToken::StartTag(tag) if tag.is(DIRECTION_HEADING) => {
                drop_unnamed(&mut directions, open.take());
                directions.push(Direction::new(""));
                open = Some(OpenDirection {
                    index: directions.len() - 1,
                    awaiting_name: true,
                    pending_stop: None,
                });
            }

            MarkupToken::StartTag(tag) if tag.is("a") => {
                if let Some(open) = open.as_mut() {
                    open.pending_stop = tag
                        .href()
                        .filter(|href| href.starts_with(TIMETABLE_PATH_PREFIX))
                        .map(TimetableLocator::new);
                }
            }

            MarkupToken::Text(text) => {
                let Some(open) = open.as_mut() else {
                    continue;
                };
                let name = text.trim();
                if open.awaiting_name {
                    directions[open.index].name = name.to_string();
                    open.awaiting_name = false;
                } else if !name.is_empty()
                    && let Some(timetable) = open.pending_stop.take()
                {
                    directions[open.index].stops.push(Stop {
                        name: name.to_string(),
                        timetable,
                    });
                }
            }

            _ => {}
        }
    }

    drop_unnamed(&mut directions, open);

    debug!(
        directions = directions.len(),
        stops = directions.iter().map(|d| d.stops.len()).sum::<usize>(),
        "parsed route directions"
    );
    Ok(directions)
}

/// A heading followed by no text at all never became a direction.
fn drop_unnamed(directions: &mut Vec<Direction>, open: Option<OpenDirection>) {
    if let Some(open) = open
        && open.awaiting_name
    {
        trace!(
            stops = directions[open.index].stops.len(),
            "dropping direction heading without a name"
        );
        directions.truncate(open.index);
    }
}
