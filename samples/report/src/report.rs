//! Report types.
//!
//! Both types are only built by the pipeline stages, so their invariants
//! (a non-blank id, a non-empty list of numbers) hold for every value.

use std::fmt;

use lawful::control::Outcome;

use crate::error::ReportError;

/// A validated, non-blank report id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ReportId(String);

impl ReportId {
    /// Validates a raw id. Leading and trailing whitespace is not part of the id.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidReportId`] if `raw` is blank.
    pub fn parse(raw: &str) -> Outcome<ReportError, Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Outcome::Failure(ReportError::InvalidReportId)
        } else {
            Outcome::Success(Self(trimmed.to_string()))
        }
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// A named report with at least one number.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    name: String,
    numbers: Vec<i32>,
}

impl Report {
    /// Builds a report, rejecting an empty list of numbers.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::ReportHasNoNumbers`] if `numbers` is empty.
    pub fn new(name: impl Into<String>, numbers: Vec<i32>) -> Outcome<ReportError, Self> {
        if numbers.is_empty() {
            Outcome::Failure(ReportError::ReportHasNoNumbers)
        } else {
            Outcome::Success(Self { name: name.into(), numbers })
        }
    }

    /// Returns the report name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the numbers of the report.
    pub fn numbers(&self) -> &[i32] {
        &self.numbers
    }

    /// Returns the arithmetic mean of the numbers.
    pub fn average(&self) -> f64 {
        let (total, count) = self
            .numbers
            .iter()
            .fold((0.0, 0.0), |(total, count), &number| {
                (total + f64::from(number), count + 1.0)
            });
        total / count
    }
}
