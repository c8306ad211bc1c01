//! Algebraic containers.
//!
//! This module provides the two closed sum types of the crate:
//!
//! - [`Maybe`]: zero or one value (`Present` / `Absent`)
//! - [`Outcome`]: exactly one of a failure or a success (`Failure` / `Success`)
//!
//! Both are immutable once constructed: every combinator consumes its input
//! and returns a new container. Absence and failure are ordinary values that
//! short-circuit through `flat_map` chains; the only way to read a payload is
//! an exhaustive `fold` or `match` that also handles the other case.
//!
//! # Examples
//!
//! ```rust
//! use lawful::control::{Maybe, Outcome};
//!
//! let found: Maybe<&str> = Maybe::Present("report-002");
//! let named: Outcome<&str, &str> = found.ok_or("Report id not found");
//!
//! let rendered = named.fold(|error| format!("error: {error}"), |name| format!("found {name}"));
//! assert_eq!(rendered, "found report-002");
//! ```

mod error;
mod maybe;
mod outcome;

pub use error::MissingValueError;
pub use maybe::Maybe;
pub use outcome::Outcome;
