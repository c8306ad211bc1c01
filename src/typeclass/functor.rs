//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents types that can
//! have a function applied to their inner value while preserving the structure.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function over a functor should return an equivalent functor:
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! Mapping two functions in sequence should be equivalent to mapping their composition:
//!
//! ```text
//! fa.fmap(g).fmap(f) == fa.fmap(|x| f(g(x)))
//! ```
//!
//! The [`laws`](crate::laws) module checks both laws for any implementation.
//!
//! # Examples
//!
//! ```rust
//! use lawful::control::Maybe;
//! use lawful::typeclass::Functor;
//!
//! let present: Maybe<i32> = Maybe::Present(5);
//! assert_eq!(present.fmap(|n| n.to_string()), Maybe::Present("5".to_string()));
//!
//! // Absent is preserved and the function is never called
//! let absent: Maybe<i32> = Maybe::Absent;
//! assert_eq!(absent.fmap(|n| n.to_string()), Maybe::Absent);
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for types that can have a function mapped over their contents.
///
/// `Functor` represents the ability to apply a function to the value inside
/// a container while preserving the container's case. The function is only
/// invoked when the container actually holds a value.
///
/// # Examples
///
/// ```rust
/// use lawful::typeclass::{Functor, Identity};
///
/// let x = Identity::new(5);
/// let y: Identity<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Identity::new("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// A new functor of the same case holding the transformed value
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the original container must stay available. Containers
    /// whose other case carries a payload clone that payload.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Maybe;
    /// use lawful::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::Present(5).replace("replaced"), Maybe::Present("replaced"));
    /// assert_eq!(Maybe::<i32>::Absent.replace("replaced"), Maybe::Absent);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// Only the case survives, which is all a caller interested in success
    /// or failure needs.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnOnce(&A) -> B,
    {
        Identity(function(&self.0))
    }
}
