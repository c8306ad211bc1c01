//! Bifunctor type class - mapping over two type parameters.
//!
//! A `Bifunctor` is the two-parameter generalization of `Functor`: it
//! transforms `F<A, B>` into `F<C, D>` with one function per side. For a
//! two-case container exactly one of the two functions runs, chosen by the
//! case, and the other is never invoked.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Type Parameter Order for Outcome
//!
//! `Outcome<E, T>` is implemented as `Bifunctor<E, T>`:
//! - `first`: transforms the failure payload (E)
//! - `second`: transforms the success payload (T), equivalent to `Functor::fmap`
//!
//! # Examples
//!
//! ```rust
//! use lawful::control::Outcome;
//! use lawful::typeclass::Bifunctor;
//!
//! let failure: Outcome<String, i32> = Outcome::Failure("bad".to_string());
//! assert_eq!(failure.bimap(|e| e.len(), |x| x * 2), Outcome::Failure(3));
//!
//! let success: Outcome<String, i32> = Outcome::Success(21);
//! assert_eq!(success.bimap(|e| e.len(), |x| x * 2), Outcome::Success(42));
//! ```

/// A type class for types with two type parameters that can have functions
/// mapped over both.
///
/// Only `bimap` and `bimap_ref` are required; `first` and `second` are
/// derived from `bimap` with an identity function on the untouched side.
pub trait Bifunctor<A, B> {
    /// The resulting type constructor after applying the transformation.
    ///
    /// For `Outcome<E, T>` (as `Bifunctor<E, T>`), `Target<C, D> = Outcome<C, D>`.
    /// For `(A, B)`, `Target<C, D> = (C, D)`.
    type Target<C, D>;

    /// Applies two functions to both type parameters simultaneously.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::Bifunctor;
    ///
    /// let tuple = (42, "hello".to_string());
    /// assert_eq!(tuple.bimap(|x| x * 2, |s| s.len()), (84, 5));
    /// ```
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Applies a function to the second type parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Applies two functions to references of both type parameters without consuming self.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;
}

impl<A, B> Bifunctor<A, B> for (A, B) {
    type Target<C, D> = (C, D);

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> (C, D)
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        (first_function(self.0), second_function(self.1))
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> (C, D)
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D,
    {
        (first_function(&self.0), second_function(&self.1))
    }
}
