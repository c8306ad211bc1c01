//! Identity wrapper type - the identity monad.
//!
//! `Identity` is the simplest possible container: exactly one case holding
//! exactly one value, with no absence and no failure. Every combinator is a
//! plain function application, which makes it the baseline the law harness
//! is validated against before it is pointed at `Maybe` and `Outcome`.

use super::TypeConstructor;

/// The identity monad - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use lawful::typeclass::Identity;
///
/// let wrapped = Identity::new(20);
/// let doubled = wrapped.flat_map(|n| Identity::new(n * 2));
/// assert_eq!(doubled.into_inner(), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    ///
    /// This is `Return` for the identity monad.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }

    /// Applies `function` to the wrapped value.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }

    /// Applies `function` to the wrapped value and returns its result.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}

impl<A> Identity<Identity<A>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::Identity;
    ///
    /// let nested = Identity::new(Identity::new(7));
    /// assert_eq!(nested.flatten(), Identity::new(7));
    /// ```
    #[inline]
    pub fn flatten(self) -> Identity<A> {
        self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_new_creates_wrapper() {
        let wrapped = Identity::new(42);
        assert_eq!(wrapped.0, 42);
    }

    #[rstest]
    fn identity_as_inner_returns_reference() {
        let wrapped = Identity::new(vec![1, 2, 3]);
        assert_eq!(wrapped.as_inner(), &vec![1, 2, 3]);
    }

    #[rstest]
    fn identity_flatten_removes_one_level() {
        let nested = Identity::new(Identity::new("inner"));
        assert_eq!(nested.flatten(), Identity::new("inner"));
    }

    #[rstest]
    fn identity_map_and_flat_map_apply_directly() {
        let rendered = Identity::new(41).map(|x| x + 1).flat_map(|x| Identity::new(x.to_string()));
        assert_eq!(rendered, Identity::new("42".to_string()));
    }

    #[rstest]
    fn identity_from_value() {
        let wrapped: Identity<String> = String::from("hello").into();
        assert_eq!(wrapped.into_inner(), "hello");
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i32::MIN)]
    #[case(i32::MAX)]
    fn identity_preserves_integer_values(#[case] value: i32) {
        assert_eq!(Identity::new(value).into_inner(), value);
    }
}
