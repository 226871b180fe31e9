use anyhow::Result;
use clap::Parser;
use datecode_core::{Era, ParsedDateCode};

use super::{output_format, EraArg, OutputFormat};

/// Decode a date code with a chosen era's rules
#[derive(Debug, Parser)]
pub struct ParseCommand {
    /// Era rules to apply
    #[arg(long, value_enum)]
    pub era: EraArg,

    /// The date code to decode
    #[arg(value_name = "CODE")]
    pub code: String,

    /// Output format (human, json)
    #[arg(long, value_name = "FORMAT", default_value = "human")]
    pub output: String,
}

impl ParseCommand {
    pub fn execute(&self) -> Result<i32> {
        let output_format = output_format(&self.output)?;

        let parsed = match Era::from(self.era).parse(&self.code) {
            Ok(parsed) => parsed,
            Err(error) => {
                eprintln!("error: {error}");
                return Ok(1);
            }
        };

        match output_format {
            OutputFormat::Human => println!("{}", render_human(&parsed)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&parsed)?),
        }
        Ok(0)
    }
}

fn render_human(parsed: &ParsedDateCode) -> String {
    match parsed {
        ParsedDateCode::Early1980(period) => {
            format!("era:   early 1980s\nyear:  {}\nmonth: {}", period.year, period.month)
        }
        ParsedDateCode::Late1980(code) => format!(
            "era:       late 1980s\nyear:      {}\nmonth:     {}\nlocation:  {}\ncountries: {}",
            code.year,
            code.month,
            code.location,
            join_countries(&code.countries)
        ),
        ParsedDateCode::Y1990(code) => format!(
            "era:       1990-2006\nyear:      {}\nmonth:     {}\nlocation:  {}\ncountries: {}",
            code.year,
            code.month,
            code.location,
            join_countries(&code.countries)
        ),
        ParsedDateCode::Y2007(code) => format!(
            "era:       2007+\nyear:      {}\nweek:      {}\nlocation:  {}\ncountries: {}",
            code.year,
            code.week,
            code.location,
            join_countries(&code.countries)
        ),
    }
}

pub(crate) fn join_countries(countries: &[datecode_core::Country]) -> String {
    countries
        .iter()
        .map(|country| country.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use datecode_core::parse_late_1980_code;

    #[test]
    fn test_render_human_late_1980() {
        let parsed = ParsedDateCode::Late1980(parse_late_1980_code("8811SD").unwrap());
        let rendered = render_human(&parsed);
        assert!(rendered.contains("year:      1988"));
        assert!(rendered.contains("month:     11"));
        assert!(rendered.contains("countries: France, USA"));
    }

    #[test]
    fn test_json_output_is_tagged_by_era() {
        let parsed = ParsedDateCode::Late1980(parse_late_1980_code("8811SD").unwrap());
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["era"], "late1980");
        assert_eq!(json["countries"][0], "france");
    }
}
