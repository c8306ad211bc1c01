//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! the ability to sequence computations where each step can depend on the
//! result of the previous step.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::control::Maybe;
//! use lawful::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Maybe<i32> {
//!     text.parse::<i32>().ok().filter(|&n| n > 0).into()
//! }
//!
//! let result = Maybe::Present("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::Present(n * 2));
//! assert_eq!(result, Maybe::Present(84));
//! ```

use super::applicative::Applicative;
use super::identity::Identity;

/// A type class for types that support sequencing of computations.
///
/// `flat_map` is `Bind`: it hands the payload to a function that itself
/// returns a container and passes that container through without extra
/// wrapping. Containers with an absence or failure case short-circuit:
/// the function is never invoked and the original absence or failure is
/// returned unchanged.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Outcome;
    /// use lawful::typeclass::Monad;
    ///
    /// let success: Outcome<&str, i32> = Outcome::Success(5);
    /// assert_eq!(success.flat_map(|n| Outcome::Success(n * 2)), Outcome::Success(10));
    ///
    /// let failure: Outcome<&str, i32> = Outcome::Failure("boom");
    /// assert_eq!(failure.flat_map(|n| Outcome::Success(n * 2)), Outcome::Failure("boom"));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is an absence or failure it propagates and `next` is
    /// dropped.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_flat_map_applies_function() {
        let result = Identity::new(5).flat_map(|n| Identity::new(n.to_string()));
        assert_eq!(result, Identity::new("5".to_string()));
    }

    #[rstest]
    fn identity_and_then_alias() {
        let by_flat_map = Identity::new(5).flat_map(|n| Identity::new(n * 2));
        let by_and_then = Identity::new(5).and_then(|n| Identity::new(n * 2));
        assert_eq!(by_flat_map, by_and_then);
    }

    #[rstest]
    fn identity_then_discards_first_value() {
        assert_eq!(Identity::new(5).then(Identity::new("next")), Identity::new("next"));
    }

    #[rstest]
    fn identity_left_identity_law() {
        let function = |n: i32| Identity::new(n + 1);
        let left = <Identity<()>>::pure(41).flat_map(function);
        assert_eq!(left, function(41));
    }

    #[rstest]
    fn identity_right_identity_law() {
        let wrapped = Identity::new(7);
        assert_eq!(wrapped.flat_map(<Identity<()>>::pure), wrapped);
    }

    #[rstest]
    fn identity_associativity_law() {
        let first = |n: i32| Identity::new(n + 1);
        let second = |n: i32| Identity::new(n * 3);

        let left = Identity::new(2).flat_map(first).flat_map(second);
        let right = Identity::new(2).flat_map(|x| first(x).flat_map(second));

        assert_eq!(left, right);
        assert_eq!(left, Identity::new(9));
    }
}
