//! Date-code generators, one per era.
//!
//! Each era has a field-based form and a calendar-date form. The post-2007
//! era encodes ISO week numbers; the week-based form converts to the Monday
//! of the requested week and delegates to the date-based form, mirroring the
//! historical encoding rules.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::error::{check_range, DateCodeError, Result};
use crate::location::normalize_location_code;

/// Generates an early-1980s code: last two year digits followed by the
/// unpadded month (3 or 4 digits total).
pub fn generate_early_1980_code(year: u32, month: u32) -> Result<String> {
    check_range("manufacturing year", year, 1980, 1989)?;
    check_range("manufacturing month", month, 1, 12)?;

    Ok(format!("{}{}", year % 100, month))
}

/// Calendar-date form of [`generate_early_1980_code`].
pub fn generate_early_1980_code_from_date(date: NaiveDate) -> Result<String> {
    generate_early_1980_code(year_to_u32(date.year()), date.month())
}

/// Generates a late-1980s code: the early-1980s prefix with the factory
/// location code appended.
pub fn generate_late_1980_code(location: &str, year: u32, month: u32) -> Result<String> {
    let prefix = generate_early_1980_code(year, month)?;
    let location = normalize_location_code(location)?;
    Ok(format!("{prefix}{location}"))
}

/// Calendar-date form of [`generate_late_1980_code`].
pub fn generate_late_1980_code_from_date(location: &str, date: NaiveDate) -> Result<String> {
    generate_late_1980_code(location, year_to_u32(date.year()), date.month())
}

/// Generates a 1990–2006 code: location code followed by the zero-padded
/// month and the last two year digits, interleaved month-digit first.
pub fn generate_1990_code(location: &str, year: u32, month: u32) -> Result<String> {
    check_range("manufacturing year", year, 1990, 2006)?;
    check_range("manufacturing month", month, 1, 12)?;
    let location = normalize_location_code(location)?;

    Ok(interleave(&location, month, year))
}

/// Calendar-date form of [`generate_1990_code`].
pub fn generate_1990_code_from_date(location: &str, date: NaiveDate) -> Result<String> {
    generate_1990_code(location, year_to_u32(date.year()), date.month())
}

/// Generates a post-2007 code from a year and ISO week number.
///
/// The week is validated against the number of ISO weeks in that year (52 or
/// 53), then the Monday of the week is encoded.
pub fn generate_2007_code(location: &str, year: u32, week: u32) -> Result<String> {
    check_range("manufacturing year", year, 2007, 2099)?;
    check_range("manufacturing week", week, 1, weeks_in_iso_year(year))?;

    let monday = NaiveDate::from_isoywd_opt(year as i32, week, Weekday::Mon).ok_or_else(|| {
        DateCodeError::OutOfRange {
            field: "manufacturing week",
            value: week,
            min: 1,
            max: weeks_in_iso_year(year),
        }
    })?;
    generate_2007_code_from_date(location, monday)
}

/// Generates a post-2007 code from a calendar date.
///
/// The date's ISO week and ISO week-based year are encoded, so a late
/// December date may stamp the following year's first week.
pub fn generate_2007_code_from_date(location: &str, date: NaiveDate) -> Result<String> {
    check_range("manufacturing year", year_to_u32(date.year()), 2007, 2099)?;
    let location = normalize_location_code(location)?;

    let iso = date.iso_week();
    debug!(%date, iso_year = iso.year(), iso_week = iso.week(), "generating post-2007 code");
    Ok(interleave(&location, iso.week(), year_to_u32(iso.year())))
}

/// Interleaves a zero-padded month or week with the last two year digits:
/// `M1 Y1 M2 Y2`.
fn interleave(location: &str, unit: u32, year: u32) -> String {
    let unit = format!("{unit:02}");
    let year = format!("{year:04}");
    let u = unit.as_bytes();
    let y = year.as_bytes();
    format!(
        "{location}{}{}{}{}",
        u[0] as char, y[2] as char, u[1] as char, y[3] as char
    )
}

/// Number of ISO weeks in a year: 53 when the year has a week 53, else 52.
pub(crate) fn weeks_in_iso_year(year: u32) -> u32 {
    if NaiveDate::from_isoywd_opt(year as i32, 53, Weekday::Mon).is_some() {
        53
    } else {
        52
    }
}

fn year_to_u32(year: i32) -> u32 {
    u32::try_from(year).unwrap_or(0)
}
