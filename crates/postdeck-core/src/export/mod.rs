//! Export formatters - render the post collection as CSV or iCalendar.

pub mod csv;
pub mod ics;

use std::str::FromStr;

use crate::error::DomainError;

/// The supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Ics,
}

impl ExportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Ics => "text/calendar",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "posts.csv",
            ExportFormat::Ics => "posts.ics",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(ExportFormat::Csv),
            "ics" => Ok(ExportFormat::Ics),
            other => Err(DomainError::Validation(format!(
                "unknown export type: {other:?}"
            ))),
        }
    }
}
