//! Report sources and the in-memory catalog.
//!
//! [`ReportSource`] is the seam between the pipeline and storage: the two
//! lookup stages are its methods, and [`ReportCatalog`] implements them over
//! two hash maps.

use std::collections::HashMap;

use lawful::control::{Maybe, Outcome};

use crate::error::ReportError;
use crate::report::{Report, ReportId};

/// The two lookup stages of the pipeline.
pub trait ReportSource {
    /// Stage two: resolves a report id to its report name.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::ReportIdNotFound`] if the id is not registered.
    fn lookup_report_name(&self, id: &ReportId) -> Outcome<ReportError, String>;

    /// Stage three: loads the report called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::ReportHasNoNumbers`] if the report has no numbers.
    fn lookup_report(&self, name: &str) -> Outcome<ReportError, Report>;
}

/// Two lookup tables: report id to report name, and report name to numbers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportCatalog {
    names: HashMap<String, String>,
    numbers: HashMap<String, Vec<i32>>,
}

impl ReportCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog shipped with the sample.
    ///
    /// | id    | name         | numbers   |
    /// |-------|--------------|-----------|
    /// | `001` | `report-001` | none      |
    /// | `002` | `report-002` | 1 to 10   |
    /// | `003` | `report-003` | 1 to 11   |
    pub fn sample() -> Self {
        Self::new()
            .with_report("001", "report-001", Vec::new())
            .with_report("002", "report-002", (1..=10).collect())
            .with_report("003", "report-003", (1..=11).collect())
    }

    /// Registers a report under `id`, replacing any previous entry.
    #[must_use]
    pub fn with_report(
        mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        numbers: Vec<i32>,
    ) -> Self {
        let name = name.into();
        self.names.insert(id.into(), name.clone());
        self.numbers.insert(name, numbers);
        self
    }
}

impl ReportSource for ReportCatalog {
    fn lookup_report_name(&self, id: &ReportId) -> Outcome<ReportError, String> {
        tracing::debug!(report_id = %id, "looking up report name");
        Maybe::from(self.names.get(id.as_str()))
            .map(String::clone)
            .ok_or(ReportError::ReportIdNotFound)
    }

    /// A name with no registered numbers is treated like an empty report.
    fn lookup_report(&self, name: &str) -> Outcome<ReportError, Report> {
        tracing::debug!(report_name = name, "loading report");
        Maybe::from(self.numbers.get(name))
            .map(Vec::clone)
            .ok_or(ReportError::ReportHasNoNumbers)
            .flat_map(|numbers| Report::new(name, numbers))
    }
}
