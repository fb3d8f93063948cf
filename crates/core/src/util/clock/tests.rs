// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use jiff::civil::date;

use super::*;

#[test]
fn parse_iso_date_extended_format() {
    assert_eq!(Ok(date(2024, 2, 29)), parse_iso_date("2024-02-29"));
    assert_eq!(Ok(date(1999, 2, 26)), parse_iso_date("1999-02-26"));
}

#[test]
fn parse_iso_date_rejects_other_formats() {
    assert_eq!(Err(ParseIsoDateError::Format), parse_iso_date(""));
    assert_eq!(Err(ParseIsoDateError::Format), parse_iso_date("20240229"));
    assert_eq!(Err(ParseIsoDateError::Format), parse_iso_date("2024-2-29"));
    assert_eq!(Err(ParseIsoDateError::Format), parse_iso_date("2024/02/29"));
    assert_eq!(
        Err(ParseIsoDateError::Format),
        parse_iso_date("2024-02-29T12:00")
    );
    assert_eq!(Err(ParseIsoDateError::Format), parse_iso_date(" 2024-02-2"));
}

#[test]
fn parse_iso_date_rejects_nonexistent_dates() {
    assert_eq!(Err(ParseIsoDateError::Range), parse_iso_date("2023-02-29"));
    assert_eq!(Err(ParseIsoDateError::Range), parse_iso_date("2024-13-01"));
    assert_eq!(Err(ParseIsoDateError::Range), parse_iso_date("2024-04-31"));
}

#[test]
fn today_is_formatted_as_iso_date() {
    let today = today_utc();
    let formatted = today.to_string();
    assert_eq!(ISO_DATE_LEN, formatted.len());
    assert_eq!(Ok(today), parse_iso_date(&formatted));
}
