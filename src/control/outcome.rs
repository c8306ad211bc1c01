//! Outcome type - exactly one of a failure or a success.
//!
//! This module provides the `Outcome<E, T>` type, which represents a value
//! that is either a `Failure(E)` or a `Success(T)`. By convention the left
//! parameter is the error path and the right parameter is the happy path,
//! and every single-sided combinator is right-biased.
//!
//! All mapping operators are built from [`Outcome::bimap`], and
//! [`Outcome::flat_map`] is `map` followed by [`Outcome::flatten`]. A failure
//! short-circuits: once a stage fails, no later stage's function runs and the
//! first failure is returned unchanged.
//!
//! # Examples
//!
//! ```rust
//! use lawful::control::Outcome;
//!
//! fn parse(text: &str) -> Outcome<String, i32> {
//!     text.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! fn positive(value: i32) -> Outcome<String, u32> {
//!     u32::try_from(value).map_err(|_| format!("{value} is negative")).into()
//! }
//!
//! assert_eq!(parse("12").flat_map(positive), Outcome::Success(12));
//! assert_eq!(
//!     parse("-3").flat_map(positive),
//!     Outcome::Failure("-3 is negative".to_string())
//! );
//!
//! let rendered = parse("x").flat_map(positive).fold(
//!     |error| format!("failed: {error}"),
//!     |value| format!("ok: {value}"),
//! );
//! assert_eq!(rendered, "failed: invalid digit found in string");
//! ```

use std::fmt;

use super::error::MissingValueError;
use super::maybe::Maybe;
use crate::typeclass::{Applicative, Bifunctor, Functor, Monad, TypeConstructor};

/// A value that is exactly one of a failure or a success.
///
/// There is no default and no third case; `fold` and `match` over the two
/// variants are total.
///
/// # Type Parameters
///
/// * `E` - The type of the failure payload
/// * `T` - The type of the success payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<E, T> {
    /// The error path.
    Failure(E),
    /// The happy path.
    Success(T),
}

impl<E, T> Outcome<E, T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Success` case.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a `Failure` case.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Creates a `Success` case from a value that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`MissingValueError`] if `candidate` is `None`.
    #[inline]
    pub fn try_success(candidate: Option<T>) -> Result<Self, MissingValueError> {
        candidate
            .map(Self::Success)
            .ok_or(MissingValueError::new("Outcome", "Success"))
    }

    /// Creates a `Failure` case from an error that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`MissingValueError`] if `candidate` is `None`.
    #[inline]
    pub fn try_failure(candidate: Option<E>) -> Result<Self, MissingValueError> {
        candidate
            .map(Self::Failure)
            .ok_or(MissingValueError::new("Outcome", "Failure"))
    }

    // =========================================================================
    // Case Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Converts from `&Outcome<E, T>` to `Outcome<&E, &T>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&E, &T> {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => Outcome::Success(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Maps both sides independently.
    ///
    /// `on_failure` runs only for `Failure`, `on_success` only for `Success`.
    /// The other mapping operators are defined in terms of this one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Outcome;
    ///
    /// let failure: Outcome<&str, i32> = Outcome::Failure("bad");
    /// assert_eq!(failure.bimap(str::len, |x| x * 2), Outcome::Failure(3));
    ///
    /// let success: Outcome<&str, i32> = Outcome::Success(4);
    /// assert_eq!(success.bimap(str::len, |x| x * 2), Outcome::Success(8));
    /// ```
    #[inline]
    pub fn bimap<E2, U, F, G>(self, on_failure: F, on_success: G) -> Outcome<E2, U>
    where
        F: FnOnce(E) -> E2,
        G: FnOnce(T) -> U,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(on_failure(error)),
            Self::Success(value) => Outcome::Success(on_success(value)),
        }
    }

    /// Maps the success payload; failures pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Outcome;
    ///
    /// let success: Outcome<&str, i32> = Outcome::Success(2);
    /// assert_eq!(success.map(|x| x + 1), Outcome::Success(3));
    ///
    /// let failure: Outcome<&str, i32> = Outcome::Failure("bad");
    /// assert_eq!(failure.map(|x| x + 1), Outcome::Failure("bad"));
    /// ```
    #[inline]
    pub fn map<U, G>(self, function: G) -> Outcome<E, U>
    where
        G: FnOnce(T) -> U,
    {
        self.bimap(|error| error, function)
    }

    /// Maps the failure payload; successes pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Outcome;
    ///
    /// let failure: Outcome<&str, i32> = Outcome::Failure("bad");
    /// assert_eq!(failure.map_failure(str::to_uppercase), Outcome::Failure("BAD".to_string()));
    /// ```
    #[inline]
    pub fn map_failure<E2, F>(self, function: F) -> Outcome<E2, T>
    where
        F: FnOnce(E) -> E2,
    {
        self.bimap(function, |value| value)
    }

    // =========================================================================
    // Binding
    // =========================================================================

    /// Binds the success payload to a function returning another `Outcome`.
    ///
    /// Equivalent to `self.map(function).flatten()`. On `Failure` the
    /// original failure is returned unchanged and `function` is never
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Outcome;
    ///
    /// let halve = |x: i32| {
    ///     if x % 2 == 0 { Outcome::Success(x / 2) } else { Outcome::Failure("odd") }
    /// };
    /// assert_eq!(Outcome::Success(8).flat_map(halve), Outcome::Success(4));
    /// assert_eq!(Outcome::Success(7).flat_map(halve), Outcome::Failure("odd"));
    /// assert_eq!(Outcome::Failure("early").flat_map(halve), Outcome::Failure("early"));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Outcome<E, U>
    where
        F: FnOnce(T) -> Outcome<E, U>,
    {
        self.map(function).flatten()
    }

    /// Alias for [`Outcome::flat_map`].
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Outcome<E, U>
    where
        F: FnOnce(T) -> Outcome<E, U>,
    {
        self.flat_map(function)
    }

    /// Returns `self` if successful, otherwise the outcome produced from the
    /// failure by `recover`.
    ///
    /// `recover` is only invoked on `Failure`.
    #[inline]
    pub fn or_else<E2, F>(self, recover: F) -> Outcome<E2, T>
    where
        F: FnOnce(E) -> Outcome<E2, T>,
    {
        match self {
            Self::Failure(error) => recover(error),
            Self::Success(value) => Outcome::Success(value),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the `Outcome` by applying one of two functions.
    ///
    /// This is the exhaustive way to extract a payload. Exactly one of the
    /// functions runs.
    #[inline]
    pub fn fold<R, F, G>(self, on_failure: F, on_success: G) -> R
    where
        F: FnOnce(E) -> R,
        G: FnOnce(T) -> R,
    {
        match self {
            Self::Failure(error) => on_failure(error),
            Self::Success(value) => on_success(value),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Swaps the cases: `Failure(e)` becomes `Success(e)` and vice versa.
    #[inline]
    pub fn swap(self) -> Outcome<T, E> {
        match self {
            Self::Failure(error) => Outcome::Success(error),
            Self::Success(value) => Outcome::Failure(value),
        }
    }

    /// Keeps the success payload, discarding any failure.
    #[inline]
    pub fn success_value(self) -> Maybe<T> {
        self.fold(|_| Maybe::Absent, Maybe::Present)
    }

    /// Keeps the failure payload, discarding any success.
    #[inline]
    pub fn failure_value(self) -> Maybe<E> {
        self.fold(Maybe::Present, |_| Maybe::Absent)
    }
}

impl<E, T> Outcome<E, Outcome<E, T>> {
    /// Removes one level of nesting (`join`).
    ///
    /// If the outer value is a `Failure` it wins and the inner value is
    /// never inspected; otherwise the inner `Outcome` is the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Outcome;
    ///
    /// let nested: Outcome<&str, Outcome<&str, i32>> = Outcome::Success(Outcome::Failure("inner"));
    /// assert_eq!(nested.flatten(), Outcome::Failure("inner"));
    ///
    /// let nested: Outcome<&str, Outcome<&str, i32>> = Outcome::Failure("outer");
    /// assert_eq!(nested.flatten(), Outcome::Failure("outer"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<E, T> {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(inner) => inner,
        }
    }
}

impl<E: fmt::Display, T: fmt::Display> fmt::Display for Outcome<E, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failure(error) => write!(formatter, "Failure({error})"),
            Self::Success(value) => write!(formatter, "Success({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<E, T> From<Result<T, E>> for Outcome<E, T> {
    /// `Ok(v)` becomes `Success(v)` and `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<E, T> From<Outcome<E, T>> for Result<T, E> {
    /// Lets an `Outcome` leave through the `?` operator at a `Result` boundary.
    #[inline]
    fn from(outcome: Outcome<E, T>) -> Self {
        match outcome {
            Outcome::Failure(error) => Err(error),
            Outcome::Success(value) => Ok(value),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<E, T> TypeConstructor for Outcome<E, T> {
    type Inner = T;
    type WithType<B> = Outcome<E, B>;
}

impl<E: Clone, T> Functor for Outcome<E, T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().bimap(Clone::clone, function)
    }
}

impl<E: Clone, T> Applicative for Outcome<E, T> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<E, B> {
        Outcome::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<E, B>, function: F) -> Outcome<E, C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Failure(error), _) | (Self::Success(_), Outcome::Failure(error)) => {
                Outcome::Failure(error)
            }
            (Self::Success(first), Outcome::Success(second)) => {
                Outcome::Success(function(first, second))
            }
        }
    }
}

impl<E: Clone, T> Monad for Outcome<E, T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(T) -> Outcome<E, B>,
    {
        Self::flat_map(self, function)
    }
}

/// `Outcome<E, T>` is implemented as `Bifunctor<E, T>`, so `second` agrees
/// with `Functor::fmap` and `first` maps the failure payload.
impl<E, T> Bifunctor<E, T> for Outcome<E, T> {
    type Target<C, D> = Outcome<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Outcome<C, D>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        Self::bimap(self, first_function, second_function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Outcome<C, D>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&T) -> D,
    {
        self.as_ref().bimap(first_function, second_function)
    }
}

static_assertions::assert_impl_all!(Outcome<String, Vec<u8>>: Send, Sync);
static_assertions::assert_not_impl_any!(Outcome<std::rc::Rc<str>, i32>: Send, Sync);
