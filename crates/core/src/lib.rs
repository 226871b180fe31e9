//! Codec for luxury-goods manufacturing date codes.
//!
//! Date codes are short alphanumeric stamps that encode where and when an
//! item was produced. The format changed four times: early 1980s (year and
//! month only), late 1980s (year, month and factory location), 1990–2006
//! (location-first with interleaved digits) and post-2007 (same layout but
//! ISO-week based). Each era has its own generator/parser pair; the factory
//! location code resolves to one or more countries of origin.
//!
//! All operations are pure functions over their arguments and a compiled-in
//! lookup table; they are reentrant and thread-safe.

pub mod error;
pub mod generate;
pub mod location;
pub mod model;
pub mod parse;
pub mod resolver;

pub use error::{DateCodeError, Result};
pub use generate::{
    generate_1990_code, generate_2007_code, generate_early_1980_code, generate_late_1980_code,
};
pub use model::{Country, Era, LocatedMonthly, LocatedWeekly, MonthlyPeriod, ParsedDateCode};
pub use parse::{parse_1990_code, parse_2007_code, parse_early_1980_code, parse_late_1980_code};
pub use resolver::resolve_country;
