use anyhow::Result;
use clap::Parser;
use datecode_core::resolve_country;

use super::{output_format, parse::join_countries, OutputFormat};

/// Resolve a factory location code to its countries
#[derive(Debug, Parser)]
pub struct CountryCommand {
    /// Two-letter factory location code
    #[arg(value_name = "CODE")]
    pub code: String,

    /// Output format (human, json)
    #[arg(long, value_name = "FORMAT", default_value = "human")]
    pub output: String,
}

impl CountryCommand {
    pub fn execute(&self) -> Result<i32> {
        let output_format = output_format(&self.output)?;

        let countries = match resolve_country(&self.code) {
            Ok(countries) => countries,
            Err(error) => {
                eprintln!("error: {error}");
                return Ok(1);
            }
        };

        match output_format {
            OutputFormat::Human => println!(
                "{}: {}",
                self.code.to_ascii_uppercase(),
                join_countries(&countries)
            ),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&countries)?),
        }
        Ok(0)
    }
}
