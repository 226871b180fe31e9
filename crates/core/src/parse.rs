//! Date-code parsers, one per era.
//!
//! Validation is strict: anything outside the documented grammar is
//! rejected, there is no partial or fuzzy matching. Input codes are
//! case-insensitive; location codes are reported uppercased.

use tracing::debug;

use crate::error::{check_range, DateCodeError, Result};
use crate::generate::weeks_in_iso_year;
use crate::location::normalize_location_code;
use crate::model::{Country, LocatedMonthly, LocatedWeekly, MonthlyPeriod};
use crate::resolver::resolve_country;

/// Parses an early-1980s code (`YY` + unpadded month) into year and month.
pub fn parse_early_1980_code(date_code: &str) -> Result<MonthlyPeriod> {
    if date_code.is_empty() {
        return Err(DateCodeError::InvalidArgument { field: "date code" });
    }
    if date_code.len() != 3 && date_code.len() != 4 {
        return Err(DateCodeError::InvalidFormat {
            value: date_code.to_string(),
            expected: "3 or 4 digits",
        });
    }

    let d = digits(date_code, "3 or 4 digits")?;
    let year = 1900 + d[0] * 10 + d[1];
    let month = d[2..].iter().fold(0, |acc, digit| acc * 10 + digit);
    check_range("manufacturing year", year, 1980, 1989)?;
    check_range("manufacturing month", month, 1, 12)?;

    Ok(MonthlyPeriod { year, month })
}

/// Parses a late-1980s code: an early-1980s prefix with a trailing
/// two-letter factory location code.
pub fn parse_late_1980_code(date_code: &str) -> Result<LocatedMonthly> {
    if date_code.is_empty() {
        return Err(DateCodeError::InvalidArgument { field: "date code" });
    }
    if !date_code.is_ascii() || (date_code.len() != 5 && date_code.len() != 6) {
        return Err(DateCodeError::InvalidFormat {
            value: date_code.to_string(),
            expected: "3 or 4 digits followed by a two-letter factory location code",
        });
    }

    let split = date_code.len() - 2;
    let location = normalize_location_code(&date_code[split..])?;
    let countries = resolve_country(&location)?;
    let period = parse_early_1980_code(&date_code[..split])?;

    Ok(LocatedMonthly {
        location,
        countries,
        year: period.year,
        month: period.month,
    })
}

/// Parses a 1990–2006 code: location code plus interleaved month and year
/// digits.
///
/// The first embedded year digit picks the century: `0` means the 2000s,
/// anything else the 1900s. Only 1990–1999 and 2000–2006 are reachable.
pub fn parse_1990_code(date_code: &str) -> Result<LocatedMonthly> {
    let (location, countries, d) = split_located(date_code)?;

    let month = d[0] * 10 + d[2];
    let century = if d[1] == 0 { 2000 } else { 1900 };
    let year = century + d[1] * 10 + d[3];
    debug!(%location, year, month, "decoded 1990-2006 code");
    check_range("manufacturing year", year, 1990, 2006)?;
    check_range("manufacturing month", month, 1, 12)?;

    Ok(LocatedMonthly {
        location,
        countries,
        year,
        month,
    })
}

/// Parses a post-2007 code: location code plus interleaved ISO week and
/// year digits. The century is always the 2000s.
pub fn parse_2007_code(date_code: &str) -> Result<LocatedWeekly> {
    let (location, countries, d) = split_located(date_code)?;

    let week = d[0] * 10 + d[2];
    let year = 2000 + d[1] * 10 + d[3];
    check_range("manufacturing year", year, 2007, 2099)?;
    check_range("manufacturing week", week, 1, weeks_in_iso_year(year))?;

    Ok(LocatedWeekly {
        location,
        countries,
        year,
        week,
    })
}

/// Splits a six-character located code into its resolved location and the
/// four interleaved digits.
fn split_located(date_code: &str) -> Result<(String, Vec<Country>, Vec<u32>)> {
    if date_code.is_empty() {
        return Err(DateCodeError::InvalidArgument { field: "date code" });
    }
    if !date_code.is_ascii() || date_code.len() != 6 {
        return Err(DateCodeError::InvalidFormat {
            value: date_code.to_string(),
            expected: "a two-letter factory location code followed by 4 digits",
        });
    }

    let location = normalize_location_code(&date_code[..2])?;
    let countries = resolve_country(&location)?;
    let d = digits(
        &date_code[2..],
        "a two-letter factory location code followed by 4 digits",
    )?;

    Ok((location, countries, d))
}

fn digits(part: &str, expected: &'static str) -> Result<Vec<u32>> {
    part.chars()
        .map(|c| {
            c.to_digit(10).ok_or_else(|| DateCodeError::InvalidFormat {
                value: part.to_string(),
                expected,
            })
        })
        .collect()
}
