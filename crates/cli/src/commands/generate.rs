use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use datecode_core::generate::{
    generate_1990_code, generate_1990_code_from_date, generate_2007_code,
    generate_2007_code_from_date, generate_early_1980_code, generate_early_1980_code_from_date,
    generate_late_1980_code, generate_late_1980_code_from_date,
};

use super::{EraArg, Failure};

/// Generate a date code from manufacturing fields
#[derive(Debug, Parser)]
pub struct GenerateCommand {
    /// Era rules to apply
    #[arg(long, value_enum)]
    pub era: EraArg,

    /// Two-letter factory location code (every era after the early 1980s)
    #[arg(long, value_name = "LL")]
    pub location: Option<String>,

    /// Manufacturing year
    #[arg(long)]
    pub year: Option<u32>,

    /// Manufacturing month, 1-12 (pre-2007 eras)
    #[arg(long)]
    pub month: Option<u32>,

    /// Manufacturing ISO week (2007+ era)
    #[arg(long)]
    pub week: Option<u32>,

    /// Manufacturing date, used instead of year/month/week
    #[arg(long, value_name = "YYYY-MM-DD", conflicts_with_all = ["year", "month", "week"])]
    pub date: Option<NaiveDate>,
}

impl GenerateCommand {
    pub fn execute(&self) -> Result<i32> {
        match self.generate() {
            Ok(code) => {
                println!("{code}");
                Ok(0)
            }
            Err(Failure::Usage(message)) => {
                eprintln!("error: {message}");
                Ok(2)
            }
            Err(Failure::Domain(error)) => {
                eprintln!("error: {error}");
                Ok(1)
            }
        }
    }

    fn generate(&self) -> std::result::Result<String, Failure> {
        match (self.era, self.date) {
            (EraArg::Early1980, Some(date)) => Ok(generate_early_1980_code_from_date(date)?),
            (EraArg::Early1980, None) => {
                Ok(generate_early_1980_code(self.year()?, self.month()?)?)
            }
            (EraArg::Late1980, Some(date)) => {
                Ok(generate_late_1980_code_from_date(self.location()?, date)?)
            }
            (EraArg::Late1980, None) => Ok(generate_late_1980_code(
                self.location()?,
                self.year()?,
                self.month()?,
            )?),
            (EraArg::Y1990, Some(date)) => {
                Ok(generate_1990_code_from_date(self.location()?, date)?)
            }
            (EraArg::Y1990, None) => Ok(generate_1990_code(
                self.location()?,
                self.year()?,
                self.month()?,
            )?),
            (EraArg::Y2007, Some(date)) => {
                Ok(generate_2007_code_from_date(self.location()?, date)?)
            }
            (EraArg::Y2007, None) => Ok(generate_2007_code(
                self.location()?,
                self.year()?,
                self.week()?,
            )?),
        }
    }

    fn location(&self) -> std::result::Result<&str, Failure> {
        self.location
            .as_deref()
            .ok_or_else(|| Failure::Usage("--location is required for this era".to_string()))
    }

    fn year(&self) -> std::result::Result<u32, Failure> {
        self.year
            .ok_or_else(|| Failure::Usage("--year is required unless --date is given".to_string()))
    }

    fn month(&self) -> std::result::Result<u32, Failure> {
        self.month.ok_or_else(|| {
            Failure::Usage("--month is required unless --date is given".to_string())
        })
    }

    fn week(&self) -> std::result::Result<u32, Failure> {
        self.week.ok_or_else(|| {
            Failure::Usage("--week is required unless --date is given".to_string())
        })
    }
}
