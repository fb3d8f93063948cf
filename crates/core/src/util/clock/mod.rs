// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use jiff::{Timestamp, civil::Date, tz::TimeZone};

/// Length of a date formatted as `YYYY-MM-DD`.
pub const ISO_DATE_LEN: usize = 10;

/// The current calendar date in UTC.
#[must_use]
pub fn today_utc() -> Date {
    Timestamp::now().to_zoned(TimeZone::UTC).date()
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum ParseIsoDateError {
    #[display("date must be formatted as YYYY-MM-DD")]
    Format,

    #[display("date does not exist")]
    Range,
}

impl std::error::Error for ParseIsoDateError {}

/// Parses a calendar date in the extended ISO 8601 format `YYYY-MM-DD`
///
/// Other formats that are accepted by [`Date::from_str`](std::str::FromStr)
/// like the basic format `YYYYMMDD` or date times are rejected.
pub fn parse_iso_date(input: &str) -> Result<Date, ParseIsoDateError> {
    let bytes = input.as_bytes();
    if bytes.len() != ISO_DATE_LEN {
        return Err(ParseIsoDateError::Format);
    }
    let well_formed = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !well_formed {
        return Err(ParseIsoDateError::Format);
    }
    input.parse().map_err(|_| ParseIsoDateError::Range)
}

#[cfg(test)]
mod tests;
