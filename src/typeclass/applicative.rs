//! Applicative type class - lifting values and combining contexts.
//!
//! This module provides the `Applicative` trait, which extends `Functor` with
//! the ability to:
//!
//! - Lift pure values into the applicative context (`pure`, the monadic `Return`)
//! - Combine independent applicative values using a function (`map2`)
//! - Create tuples of applicative values (`product`)
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::control::Maybe;
//! use lawful::typeclass::Applicative;
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(lifted, Maybe::Present(42));
//!
//! let sum = Maybe::Present(1).map2(Maybe::Present(2), |x, y| x + y);
//! assert_eq!(sum, Maybe::Present(3));
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for types that support lifting values and combining contexts.
///
/// For the containers in this crate `pure` is the success-side constructor:
/// `Identity::new`, `Maybe::Present` and `Outcome::Success`.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Outcome;
    /// use lawful::typeclass::Applicative;
    ///
    /// let lifted: Outcome<String, i32> = <Outcome<String, ()>>::pure(42);
    /// assert_eq!(lifted, Outcome::Success(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// If either value is an absence or failure the result is too; for
    /// two-case containers the left-most failure wins.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    ///
    /// This is equivalent to `map2(other, |a, b| (a, b))`.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Maybe;
    /// use lawful::typeclass::Applicative;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::Present(|x| x + 1);
    /// assert_eq!(function.apply(Maybe::Present(5)), Maybe::Present(6));
    /// ```
    #[inline]
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity::new(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity::new(function(self.into_inner(), other.into_inner()))
    }
}
