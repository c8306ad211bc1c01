//! The identity function.

/// Returns the value unchanged.
///
/// The unit of [`compose!`](crate::compose!), and the function used by the
/// functor identity law: `m.fmap(identity) == m`.
///
/// # Examples
///
/// ```
/// use lawful::compose::identity;
/// use lawful::control::Maybe;
/// use lawful::typeclass::Functor;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(Maybe::Present("x").fmap(identity), Maybe::Present("x"));
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}
