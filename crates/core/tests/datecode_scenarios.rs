// Concrete stamp scenarios and era boundary behavior.

use datecode_core::{
    generate_1990_code, generate_2007_code, generate_early_1980_code, generate_late_1980_code,
    parse_late_1980_code, Country, DateCodeError, Era, ParsedDateCode,
};

#[test]
fn known_stamps_generate_expected_codes() {
    assert_eq!(generate_early_1980_code(1987, 3).unwrap(), "873");
    assert_eq!(generate_late_1980_code("SD", 1988, 11).unwrap(), "8811SD");
    assert_eq!(generate_1990_code("SD", 1995, 3).unwrap(), "SD0935");
    assert_eq!(generate_2007_code("SD", 2015, 6).unwrap(), "SD0165");
}

#[test]
fn late_1980_stamp_decodes_with_countries() {
    let parsed = parse_late_1980_code("8811SD").unwrap();
    assert_eq!(parsed.year, 1988);
    assert_eq!(parsed.month, 11);
    assert_eq!(parsed.location, "SD");
    assert_eq!(parsed.countries, vec![Country::France, Country::Usa]);
}

#[test]
fn early_1980_rejects_years_outside_decade() {
    for year in [1979, 1990] {
        assert!(matches!(
            generate_early_1980_code(year, 5),
            Err(DateCodeError::OutOfRange {
                field: "manufacturing year",
                ..
            })
        ));
    }
}

#[test]
fn early_1980_rejects_month_zero_and_thirteen() {
    for month in [0, 13] {
        assert!(matches!(
            generate_early_1980_code(1985, month),
            Err(DateCodeError::OutOfRange {
                field: "manufacturing month",
                ..
            })
        ));
    }
}

#[test]
fn post_2007_week_bounds_depend_on_year() {
    assert!(generate_2007_code("SD", 2016, 0).is_err());
    // 2016 has 52 ISO weeks, 2015 and 2020 have 53
    assert!(generate_2007_code("SD", 2016, 53).is_err());
    assert!(generate_2007_code("SD", 2020, 53).is_ok());
}

#[test]
fn era_dispatch_produces_tagged_results() {
    match Era::Early1980.parse("873").unwrap() {
        ParsedDateCode::Early1980(period) => {
            assert_eq!(period.year, 1987);
            assert_eq!(period.month, 3);
        }
        other => panic!("unexpected parse result: {other:?}"),
    }

    match Era::Y2007.parse("sd0165").unwrap() {
        ParsedDateCode::Y2007(parsed) => {
            assert_eq!(parsed.year, 2015);
            assert_eq!(parsed.week, 6);
            assert_eq!(parsed.location, "SD");
        }
        other => panic!("unexpected parse result: {other:?}"),
    }
}

#[test]
fn era_dispatch_propagates_unknown_locations() {
    assert!(matches!(
        Era::Y1990.parse("ZZ0935"),
        Err(DateCodeError::NotFound { .. })
    ));
}
