//! Domain model: countries of origin, eras and decoded date codes.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parse;

/// Country a factory location code can belong to. Closed set; several
/// location codes map to more than one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Country {
    France,
    Germany,
    Italy,
    Spain,
    Switzerland,
    Usa,
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Country::France => "France",
            Country::Germany => "Germany",
            Country::Italy => "Italy",
            Country::Spain => "Spain",
            Country::Switzerland => "Switzerland",
            Country::Usa => "USA",
        };
        write!(f, "{name}")
    }
}

/// Year and month decoded from an early-1980s code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPeriod {
    pub year: u32,
    pub month: u32,
}

/// Decoded month-based code carrying a factory location (late 1980s and
/// 1990–2006 eras).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatedMonthly {
    pub location: String,
    pub countries: Vec<Country>,
    pub year: u32,
    pub month: u32,
}

/// Decoded ISO-week-based code (post-2007 era).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatedWeekly {
    pub location: String,
    pub countries: Vec<Country>,
    pub year: u32,
    pub week: u32,
}

/// The four date-code grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Era {
    Early1980,
    Late1980,
    Y1990,
    Y2007,
}

impl Era {
    /// Decodes `code` with this era's rules.
    pub fn parse(self, code: &str) -> Result<ParsedDateCode> {
        match self {
            Era::Early1980 => parse::parse_early_1980_code(code).map(ParsedDateCode::Early1980),
            Era::Late1980 => parse::parse_late_1980_code(code).map(ParsedDateCode::Late1980),
            Era::Y1990 => parse::parse_1990_code(code).map(ParsedDateCode::Y1990),
            Era::Y2007 => parse::parse_2007_code(code).map(ParsedDateCode::Y2007),
        }
    }
}

/// A decoded date code, one case per era.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "era", rename_all = "snake_case")]
pub enum ParsedDateCode {
    Early1980(MonthlyPeriod),
    Late1980(LocatedMonthly),
    Y1990(LocatedMonthly),
    Y2007(LocatedWeekly),
}
