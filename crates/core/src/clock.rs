//! Parsing for the stored class time format.
//!
//! Class records carry their meeting window as a display string such as
//! `"09:00 AM - 10:00 AM"`, kept verbatim from the administrative input.
//! The lifecycle engine anchors the parsed range to the current calendar
//! day on the host's local clock; seconds are always zero.
//!
//! Malformed input is a contract violation and fails loudly with
//! [`RollcallError::Validation`]; a silently misparsed range would corrupt
//! every downstream status derivation.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::errors::{RollcallError, RollcallResult};

/// Parses a single clock token in `H:MM AM|PM` form into a [`NaiveTime`].
///
/// `12 AM` maps to hour 0, `12 PM` stays hour 12, and PM hours 1-11 gain 12.
pub fn parse_clock_time(token: &str) -> RollcallResult<NaiveTime> {
    let token = token.trim();

    let (digits, meridiem) = token
        .rsplit_once(' ')
        .ok_or_else(|| RollcallError::Validation(format!("missing meridiem in clock time {token:?}")))?;

    let (hour_part, minute_part) = digits
        .trim()
        .split_once(':')
        .ok_or_else(|| RollcallError::Validation(format!("missing ':' in clock time {token:?}")))?;

    let hour: u32 = hour_part
        .parse()
        .map_err(|_| RollcallError::Validation(format!("non-numeric hour in clock time {token:?}")))?;
    let minute: u32 = minute_part
        .parse()
        .map_err(|_| RollcallError::Validation(format!("non-numeric minute in clock time {token:?}")))?;

    if !(1..=12).contains(&hour) {
        return Err(RollcallError::Validation(format!(
            "hour out of range in clock time {token:?}"
        )));
    }

    let hour = match meridiem.trim().to_ascii_uppercase().as_str() {
        "AM" => {
            if hour == 12 {
                0
            } else {
                hour
            }
        }
        "PM" => {
            if hour == 12 {
                12
            } else {
                hour + 12
            }
        }
        other => {
            return Err(RollcallError::Validation(format!(
                "unknown meridiem {other:?} in clock time {token:?}"
            )));
        }
    };

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
        RollcallError::Validation(format!("minute out of range in clock time {token:?}"))
    })
}

/// A class meeting window within a single day, minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    /// Parses a stored range such as `"09:00 AM - 10:00 AM"`.
    ///
    /// The end must be strictly after the start; overnight ranges are not a
    /// thing in a same-day schedule and are rejected at admission time.
    pub fn parse(raw: &str) -> RollcallResult<Self> {
        let (start, end) = raw
            .split_once('-')
            .ok_or_else(|| RollcallError::Validation(format!("missing '-' in time range {raw:?}")))?;

        let start = parse_clock_time(start)?;
        let end = parse_clock_time(end)?;

        if end <= start {
            return Err(RollcallError::Validation(format!(
                "time range {raw:?} does not end after it starts"
            )));
        }

        Ok(Self { start, end })
    }

    /// Anchors the range to a calendar day, producing concrete instants.
    pub fn anchor(&self, day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        (day.and_time(self.start), day.and_time(self.end))
    }
}
