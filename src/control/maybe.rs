//! Maybe type - zero or one value.
//!
//! This module provides the `Maybe<T>` type, a closed sum of `Present(T)` and
//! `Absent`. It mirrors the shape of the standard `Option` but exposes the
//! functor and monad instances of this crate, and it deliberately offers no
//! unchecked extraction: the payload is read through [`Maybe::fold`] or an
//! exhaustive `match`.
//!
//! # Examples
//!
//! ```rust
//! use lawful::control::Maybe;
//!
//! fn lookup(id: &str) -> Maybe<&'static str> {
//!     match id {
//!         "001" => Maybe::Present("report-001"),
//!         _ => Maybe::Absent,
//!     }
//! }
//!
//! let name = Maybe::Present("001").flat_map(lookup).map(str::len);
//! assert_eq!(name, Maybe::Present(10));
//!
//! let missing = Maybe::Present("999").flat_map(lookup).map(str::len);
//! assert_eq!(missing.fold(|length| length, || 0), 0);
//! ```

use std::fmt;

use super::error::MissingValueError;
use super::outcome::Outcome;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that is either present or absent.
///
/// Equality is structural: two containers are equal when they are the same
/// case and, for `Present`, the payloads compare equal under the payload's
/// own `PartialEq`.
///
/// # Type Parameters
///
/// * `T` - The type of the present value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A value is present.
    Present(T),
    /// No value.
    Absent,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Present` case.
    ///
    /// The payload type cannot represent absence, so this never fails.
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates the `Absent` case.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Creates a `Present` case from a value that may be missing.
    ///
    /// Use this at boundaries where a caller promises a value but hands over
    /// an `Option`. A missing value is a defect in the caller, reported as
    /// [`MissingValueError`]; use `Maybe::from` when `None` should simply
    /// become `Absent`.
    ///
    /// # Errors
    ///
    /// Returns [`MissingValueError`] if `candidate` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Maybe;
    ///
    /// assert_eq!(Maybe::try_present(Some(3)), Ok(Maybe::Present(3)));
    /// assert!(Maybe::<i32>::try_present(None).is_err());
    /// ```
    #[inline]
    pub fn try_present(candidate: Option<T>) -> Result<Self, MissingValueError> {
        candidate
            .map(Self::Present)
            .ok_or(MissingValueError::new("Maybe", "Present"))
    }

    // =========================================================================
    // Case Checking
    // =========================================================================

    /// Returns `true` if this is a `Present` value.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is `Absent`.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Applies a function to the present value.
    ///
    /// Returns `Present(function(value))`, or `Absent` without invoking
    /// `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Maybe;
    ///
    /// assert_eq!(Maybe::Present(4).map(|x| x * 2), Maybe::Present(8));
    /// assert_eq!(Maybe::<i32>::Absent.map(|x| x * 2), Maybe::Absent);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Binds the present value to a function returning another `Maybe`.
    ///
    /// The result of `function` is returned as is, without extra wrapping.
    /// On `Absent`, returns `Absent` without invoking `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Maybe;
    ///
    /// let halve = |x: i32| if x % 2 == 0 { Maybe::Present(x / 2) } else { Maybe::Absent };
    /// assert_eq!(Maybe::Present(8).flat_map(halve), Maybe::Present(4));
    /// assert_eq!(Maybe::Present(7).flat_map(halve), Maybe::Absent);
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Alias for [`Maybe::flat_map`].
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.flat_map(function)
    }

    /// Keeps the present value only if it satisfies `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    /// Returns `self` if present, otherwise the container produced by `alternative`.
    ///
    /// `alternative` is only invoked on `Absent`.
    #[inline]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => alternative(),
        }
    }

    /// Eliminates the `Maybe` by applying one of two functions.
    ///
    /// This is the exhaustive way to extract the payload: `on_present`
    /// receives the value, `on_absent` supplies a result for the absence
    /// case. Exactly one of them runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Maybe;
    ///
    /// let describe = |maybe: Maybe<i32>| maybe.fold(|x| format!("got {x}"), || "nothing".to_string());
    /// assert_eq!(describe(Maybe::Present(3)), "got 3");
    /// assert_eq!(describe(Maybe::Absent), "nothing");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_present: F, on_absent: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce() -> R,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Converts into an `Outcome`, using `error` for the absence case.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<E, T> {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(error),
        }
    }

    /// Converts into an `Outcome`, computing the failure lazily.
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> Outcome<E, T>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(error()),
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting (`join`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Maybe;
    ///
    /// assert_eq!(Maybe::Present(Maybe::Present(1)).flatten(), Maybe::Present(1));
    /// assert_eq!(Maybe::Present(Maybe::<i32>::Absent).flatten(), Maybe::Absent);
    /// assert_eq!(Maybe::<Maybe<i32>>::Absent.flatten(), Maybe::Absent);
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.flat_map(|inner| inner)
    }
}

impl<T> Default for Maybe<T> {
    /// Returns `Absent`.
    fn default() -> Self {
        Self::Absent
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// `Some(v)` becomes `Present(v)` and `None` becomes `Absent`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T> Applicative for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Present(first), Maybe::Present(second)) => Maybe::Present(function(first, second)),
            _ => Maybe::Absent,
        }
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        Self::flat_map(self, function)
    }
}

static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn present_is_present() {
        let value = Maybe::present(42);
        assert!(value.is_present());
        assert!(!value.is_absent());
    }

    #[rstest]
    fn absent_is_absent() {
        let value: Maybe<i32> = Maybe::absent();
        assert!(value.is_absent());
        assert_eq!(value, Maybe::default());
    }

    #[rstest]
    fn try_present_rejects_missing_value() {
        let error = Maybe::<String>::try_present(None).unwrap_err();
        assert_eq!(error, MissingValueError::new("Maybe", "Present"));
    }

    #[rstest]
    fn map_on_absent_never_invokes_function() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::Absent.map(|x| {
            calls.set(calls.get() + 1);
            x + 1
        });
        assert_eq!(result, Maybe::Absent);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn flat_map_on_absent_never_invokes_function() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::Absent.flat_map(|x| {
            calls.set(calls.get() + 1);
            Maybe::Present(x + 1)
        });
        assert_eq!(result, Maybe::Absent);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn flat_map_returns_function_result_unwrapped() {
        let result: Maybe<String> = Maybe::Present(3).flat_map(|x| Maybe::Present(x.to_string()));
        assert_eq!(result, Maybe::Present("3".to_string()));
    }

    #[rstest]
    #[case(Maybe::Present(4), Maybe::Present(4))]
    #[case(Maybe::Present(3), Maybe::Absent)]
    #[case(Maybe::Absent, Maybe::Absent)]
    fn filter_keeps_even_values(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(input.filter(|x| x % 2 == 0), expected);
    }

    #[rstest]
    fn or_else_only_runs_on_absent() {
        let calls = Cell::new(0);
        let fallback = || {
            calls.set(calls.get() + 1);
            Maybe::Present(0)
        };
        assert_eq!(Maybe::Present(1).or_else(fallback), Maybe::Present(1));
        assert_eq!(calls.get(), 0);
        assert_eq!(Maybe::Absent.or_else(fallback), Maybe::Present(0));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn ok_or_bridges_to_outcome() {
        assert_eq!(Maybe::Present(1).ok_or("missing"), Outcome::Success(1));
        assert_eq!(Maybe::<i32>::Absent.ok_or("missing"), Outcome::Failure("missing"));
    }

    #[rstest]
    #[case(Maybe::Present(7), "Present(7)")]
    #[case(Maybe::Absent, "Absent")]
    fn display_renders_case(#[case] value: Maybe<i32>, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn option_conversion_roundtrip() {
        let maybe: Maybe<i32> = Some(5).into();
        assert_eq!(maybe, Maybe::Present(5));
        let option: Option<i32> = maybe.into();
        assert_eq!(option, Some(5));

        let absent: Maybe<i32> = None.into();
        assert_eq!(absent, Maybe::Absent);
    }

    #[rstest]
    fn nan_payload_is_not_reflexive() {
        let left = Maybe::Present(f64::NAN);
        let right = Maybe::Present(f64::NAN);
        assert_ne!(left, right);
        assert_eq!(Maybe::<f64>::Absent, Maybe::Absent);
    }

    #[rstest]
    fn functor_fmap_ref_keeps_original() {
        let value = Maybe::Present("hello".to_string());
        assert_eq!(value.fmap_ref(|s| s.len()), Maybe::Present(5));
        assert_eq!(value, Maybe::Present("hello".to_string()));
    }

    #[rstest]
    fn applicative_map2_requires_both_present() {
        assert_eq!(Maybe::Present(1).map2(Maybe::Present(2), |x, y| x + y), Maybe::Present(3));
        assert_eq!(Maybe::Present(1).map2(Maybe::<i32>::Absent, |x, y| x + y), Maybe::Absent);
    }

    #[rstest]
    fn monad_then_propagates_absence() {
        assert_eq!(Monad::then(Maybe::Present(1), Maybe::Present("next")), Maybe::Present("next"));
        assert_eq!(Monad::then(Maybe::<i32>::Absent, Maybe::Present("next")), Maybe::Absent);
    }
}
