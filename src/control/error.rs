//! Error types for container construction.
//!
//! Absence and failure are values, never errors. The only error this crate
//! reports is programmer misuse at the boundary with nullable data: asking
//! for a present or successful container while handing over `None`.

/// Represents an attempt to build a `Present`, `Success` or `Failure` case
/// from a value that is not there.
///
/// Returned by [`Maybe::try_present`](super::Maybe::try_present),
/// [`Outcome::try_success`](super::Outcome::try_success) and
/// [`Outcome::try_failure`](super::Outcome::try_failure).
///
/// # Examples
///
/// ```rust
/// use lawful::control::{Maybe, MissingValueError};
///
/// let error = Maybe::<i32>::try_present(None).unwrap_err();
/// assert_eq!(error, MissingValueError { container: "Maybe", case: "Present" });
/// assert_eq!(
///     format!("{error}"),
///     "Maybe::Present: value is missing. Use the absent case to express absence."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MissingValueError {
    /// The name of the container being constructed.
    pub container: &'static str,
    /// The case that was requested.
    pub case: &'static str,
}

impl MissingValueError {
    pub(crate) const fn new(container: &'static str, case: &'static str) -> Self {
        Self { container, case }
    }
}

impl std::fmt::Display for MissingValueError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let remedy = match self.container {
            "Maybe" => "Use the absent case to express absence.",
            _ => "Every case of an outcome carries a payload.",
        };
        write!(
            formatter,
            "{}::{}: value is missing. {remedy}",
            self.container, self.case
        )
    }
}

impl std::error::Error for MissingValueError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        MissingValueError::new("Maybe", "Present"),
        "Maybe::Present: value is missing. Use the absent case to express absence."
    )]
    #[case(
        MissingValueError::new("Outcome", "Success"),
        "Outcome::Success: value is missing. Every case of an outcome carries a payload."
    )]
    fn display_names_container_and_case(#[case] error: MissingValueError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&MissingValueError::new("Outcome", "Failure"));
    }
}
