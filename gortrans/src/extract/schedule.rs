//! Stop timetable extraction.
//!
//! The timetable is a list of hour rows. Each `<li>` holds a
//! `<div class="hour">` with the hour, and inside it one
//! `<div class="minute trip-with-note">` per departure. Minute text may
//! carry footnote asterisks (`*16`) or be interleaved with note fragments.

use tracing::{debug, trace, warn};

use crate::domain::ScheduledTime;
use crate::markup::{MarkupToken, StartTag};

use super::error::ParseError;

const CONTAINER: &str = "div";
const HOUR_CLASS: &str = "hour";
const MINUTE_CLASS: &str = "minute trip-with-note";
const ROW: &str = "li";

/// Where we are relative to hour/minute blocks.
///
/// A minute block is only meaningful inside an hour block, so there is no
/// way to be in one without the other. Only a row start leaves a minute
/// block; a further hour block inside the same row does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    Hour,
    Minute,
}

/// Extract the scheduled times of a stop, in page order.
///
/// Each minute is paired with the most recently read hour. Unreadable
/// minute fragments are skipped; unreadable hour text aborts with
/// [`ParseError`]. An empty stream yields no times.
pub fn parse_schedule<I>(tokens: I) -> Result<Vec<ScheduledTime>, ParseError>
where
    I: IntoIterator<Item = MarkupToken>,
{
    let mut times = Vec::new();
    let mut state = State::Outside;
    let mut hour = 0;

    let tokens = tokens
        .into_iter()
        .take_while(|t| *t != MarkupToken::EndOfStream);

    for token in tokens {
        match token {
            MarkupToken::StartTag(tag) => state = next_state(state, &tag),
            MarkupToken::Text(text) => match state {
                State::Outside => {}
                State::Hour => {
                    if let Some(h) = read_hour(&text)? {
                        hour = h;
                    }
                }
                State::Minute => {
                    if let Some(time) = read_minute(&text, hour) {
                        times.push(time);
                    }
                }
            },
            MarkupToken::EndOfStream => {}
        }
    }

    debug!(times = times.len(), "parsed stop schedule");
    Ok(times)
}

fn next_state(state: State, tag: &StartTag) -> State {
    if tag.is(ROW) {
        return State::Outside;
    }
    if !tag.is(CONTAINER) {
        return state;
    }
    match tag.attr("class") {
        Some(HOUR_CLASS) if state == State::Outside => State::Hour,
        Some(MINUTE_CLASS) if state != State::Outside => State::Minute,
        _ => state,
    }
}

/// Blank hour text is ignored; anything else must be a valid hour.
fn read_hour(text: &str) -> Result<Option<u32>, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let hour: u32 = trimmed.parse().map_err(|_| {
        warn!(text = trimmed, "unreadable hour in timetable");
        ParseError::InvalidHour(trimmed.to_string())
    })?;
    if hour > 23 {
        warn!(hour, "hour out of range in timetable");
        return Err(ParseError::HourOutOfRange(hour));
    }
    Ok(Some(hour))
}

fn read_minute(text: &str, hour: u32) -> Option<ScheduledTime> {
    let cleaned = text.replace(['*', '\n'], "");
    let cleaned = cleaned.trim();

    let minute: u32 = match cleaned.parse() {
        Ok(m) => m,
        Err(_) => {
            if !cleaned.is_empty() {
                trace!(text = cleaned, "skipping non-numeric minute fragment");
            }
            return None;
        }
    };

    match ScheduledTime::new(hour, minute) {
        Ok(time) => Some(time),
        Err(e) => {
            trace!(hour, minute, error = %e, "skipping out-of-range minute");
            None
        }
    }
}
