//! Country resolver: maps a two-letter factory location code to the
//! countries that historically operated it.
//!
//! The table is checked in declaration order, single-country lists before
//! the multi-country combinations, so a code listed under one country is
//! never accidentally classified as ambiguous.

use crate::error::{DateCodeError, Result};
use crate::model::Country;
use crate::model::Country::{France, Germany, Italy, Spain, Switzerland, Usa};

/// Ordered lookup table. Several codes legitimately belong to more than one
/// country; those combinations are their own entries, not derived.
const LOCATION_TABLE: &[(&[&str], &[Country])] = &[
    (
        &[
            "A0", "A1", "A2", "AA", "AH", "AN", "AR", "AS", "BA", "BJ", "BU", "DR", "DU", "DT",
            "CO", "CT", "CX", "ET", "MB", "MI", "NO", "RA", "RI", "SF", "SL", "SN", "SP", "SR",
            "TJ", "TH", "TR", "TS", "VI", "VX",
        ],
        &[France],
    ),
    (
        &["BC", "BO", "CE", "FO", "MA", "OB", "RC", "RE", "SA", "TD"],
        &[Italy],
    ),
    (&["CA", "LO", "LB", "LM", "GI"], &[Spain]),
    (&["FC", "FH", "LA", "OS"], &[Usa]),
    (&["FL", "SD"], &[France, Usa]),
    (&["LP", "OL"], &[Germany]),
    (&["DI", "FA"], &[Switzerland]),
    (&["LW"], &[France, Spain]),
];

/// Returns the countries for a factory location code, in table order.
///
/// Input is matched case-insensitively. Fails with `InvalidArgument` on an
/// empty code and `NotFound` when no country list contains it.
pub fn resolve_country(factory_location_code: &str) -> Result<Vec<Country>> {
    if factory_location_code.is_empty() {
        return Err(DateCodeError::InvalidArgument {
            field: "factory location code",
        });
    }

    let code = factory_location_code.to_ascii_uppercase();
    for (codes, countries) in LOCATION_TABLE {
        if codes.contains(&code.as_str()) {
            return Ok(countries.to_vec());
        }
    }

    Err(DateCodeError::NotFound { code })
}
