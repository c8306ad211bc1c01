//! The report lookup pipeline.
//!
//! ```text
//! Option<&str> --validate_report_id--> ReportId
//!              --lookup_report_name--> String
//!              --lookup_report-------> Report
//! ```
//!
//! Each arrow may fail with a [`ReportError`]; the first failure is the
//! result and the remaining stages are skipped.

use lawful::chain;
use lawful::control::{Maybe, Outcome};

use crate::catalog::ReportSource;
use crate::error::ReportError;
use crate::report::{Report, ReportId};

/// Stage one: checks that a raw id is present and non-blank.
///
/// # Errors
///
/// Returns [`ReportError::InvalidReportId`] for `None` or a blank id.
pub fn validate_report_id(raw: Option<&str>) -> Outcome<ReportError, ReportId> {
    tracing::debug!(raw_id = ?raw, "validating report id");
    Maybe::from(raw)
        .ok_or(ReportError::InvalidReportId)
        .flat_map(ReportId::parse)
}

/// Runs all three stages for one raw id.
///
/// # Errors
///
/// Returns the [`ReportError`] of the first failing stage.
pub fn run<S: ReportSource>(source: &S, raw: Option<&str>) -> Outcome<ReportError, Report> {
    let outcome = chain! {
        id <= validate_report_id(raw);
        name <= source.lookup_report_name(&id);
        source.lookup_report(&name)
    };

    outcome.as_ref().fold(
        |error| tracing::warn!(raw_id = ?raw, %error, "report lookup failed"),
        |report| {
            tracing::info!(
                report_name = report.name(),
                average = report.average(),
                "report loaded"
            );
        },
    );
    outcome
}

/// Renders an outcome as one line of output.
///
/// Failures render as `Error: <message>`, successes as
/// `<report name>: average <mean>`.
pub fn render(outcome: &Outcome<ReportError, Report>) -> String {
    outcome.as_ref().fold(
        |error| format!("Error: {error}"),
        |report| format!("{}: average {}", report.name(), report.average()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, Outcome::Failure(ReportError::InvalidReportId))]
    #[case(Some(""), Outcome::Failure(ReportError::InvalidReportId))]
    #[case(Some(" 002 "), Outcome::Success("002"))]
    fn validate_report_id_cases(
        #[case] raw: Option<&str>,
        #[case] expected: Outcome<ReportError, &str>,
    ) {
        let validated = validate_report_id(raw);
        assert_eq!(validated.as_ref().bimap(|error| *error, ReportId::as_str), expected);
    }

    #[rstest]
    fn render_failure() {
        let outcome = Outcome::Failure(ReportError::ReportIdNotFound);
        assert_eq!(render(&outcome), "Error: Report id not found");
    }

    #[rstest]
    fn render_success() {
        let outcome = Report::new("report-002", (1..=10).collect());
        assert_eq!(render(&outcome), "report-002: average 5.5");
    }
}
