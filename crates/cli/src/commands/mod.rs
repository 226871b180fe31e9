mod country;
mod generate;
mod parse;

pub use country::CountryCommand;
pub use generate::GenerateCommand;
pub use parse::ParseCommand;

use anyhow::{bail, Result};
use clap::ValueEnum;
use datecode_core::{DateCodeError, Era};

/// Era selector as exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EraArg {
    #[value(name = "early1980")]
    Early1980,
    #[value(name = "late1980")]
    Late1980,
    #[value(name = "1990")]
    Y1990,
    #[value(name = "2007")]
    Y2007,
}

impl From<EraArg> for Era {
    fn from(era: EraArg) -> Self {
        match era {
            EraArg::Early1980 => Era::Early1980,
            EraArg::Late1980 => Era::Late1980,
            EraArg::Y1990 => Era::Y1990,
            EraArg::Y2007 => Era::Y2007,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

pub(crate) fn output_format(value: &str) -> Result<OutputFormat> {
    match value.to_ascii_lowercase().as_str() {
        "human" => Ok(OutputFormat::Human),
        "json" => Ok(OutputFormat::Json),
        other => bail!("Unsupported output format: {other}. Use human or json."),
    }
}

/// Failure modes a command maps to exit codes: usage mistakes exit 2,
/// domain errors from the codec exit 1.
pub(crate) enum Failure {
    Usage(String),
    Domain(DateCodeError),
}

impl From<DateCodeError> for Failure {
    fn from(error: DateCodeError) -> Self {
        Failure::Domain(error)
    }
}
