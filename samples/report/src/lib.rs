//! # Report Lookup Sample Application
//!
//! A three-stage lookup pipeline built on `lawful::control::Outcome`.
//!
//! ## Overview
//!
//! A raw report id goes through three stages, each of which may fail with a
//! shared [`ReportError`]:
//!
//! 1. [`validate_report_id`]: the id must be present and non-blank
//! 2. [`ReportCatalog::lookup_report_name`]: the id must map to a report name
//! 3. [`ReportCatalog::lookup_report`]: the report must have numbers
//!
//! The stages are bound with `flat_map`, so the first failure stops the
//! pipeline and later stages never run. [`render`] folds the outcome into a
//! printable line.
//!
//! ## Module Structure
//!
//! - `error`: Domain and configuration errors
//! - `report`: `ReportId` and `Report` types
//! - `catalog`: The in-memory report tables and lookup stages
//! - `pipeline`: Validation, the composed pipeline and rendering
//! - `config`: Environment configuration

#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;

pub use catalog::{ReportCatalog, ReportSource};
pub use config::{DEFAULT_REPORT_IDS, REPORT_IDS_VAR, ReportConfig};
pub use error::{ConfigError, ReportError};
pub use pipeline::{render, run, validate_report_id};
pub use report::{Report, ReportId};
