//! Kleisli composition: composing functions that return a monad.
//!
//! Given `f: A -> M<B>` and `g: B -> M<C>`, their Kleisli composition is
//! `A -> M<C>`, defined as `|x| f(x).flat_map(g)`. With `pure` as the unit,
//! Kleisli arrows form a category:
//!
//! ```text
//! compose_kleisli(compose_kleisli(f, g), h) == compose_kleisli(f, compose_kleisli(g, h))
//! compose_kleisli(pure, f) == f == compose_kleisli(f, pure)
//! ```
//!
//! These are equivalent to the three monad laws and are checked by
//! [`check_kleisli_associativity`](crate::laws::check_kleisli_associativity)
//! and [`check_kleisli_identity`](crate::laws::check_kleisli_identity).

use crate::typeclass::{Monad, TypeConstructor};

/// Composes two monadic functions left to right.
///
/// The returned function runs `first`, then feeds its payload to `second`
/// through [`Monad::flat_map`]. If `first` produces an empty or failed
/// container, `second` is never invoked.
///
/// The composition is generic over [`Monad`], so for `Outcome` the error type
/// must be `Clone`. [`kleisli!`](crate::kleisli!) binds through the
/// container's own `flat_map` and has no such requirement.
///
/// # Type Parameters
///
/// * `A` - The input type of `first`
/// * `M` - The monad returned by `first`
/// * `C` - The payload type of the monad returned by `second`
///
/// # Examples
///
/// ```rust
/// use lawful::compose::compose_kleisli;
/// use lawful::control::Maybe;
///
/// fn non_empty(text: &str) -> Maybe<&str> {
///     if text.is_empty() { Maybe::Absent } else { Maybe::Present(text) }
/// }
///
/// fn first_digit(text: &str) -> Maybe<u32> {
///     text.chars().next().and_then(|c| c.to_digit(10)).into()
/// }
///
/// let digit = compose_kleisli(non_empty, first_digit);
/// assert_eq!(digit("7up"), Maybe::Present(7));
/// assert_eq!(digit("up"), Maybe::Absent);
/// assert_eq!(digit(""), Maybe::Absent);
/// ```
#[inline]
pub fn compose_kleisli<A, M, C, F, G>(first: F, second: G) -> impl Fn(A) -> M::WithType<C>
where
    M: Monad,
    F: Fn(A) -> M,
    G: Fn(M::Inner) -> <M as TypeConstructor>::WithType<C>,
{
    move |input| first(input).flat_map::<C, _>(&second)
}
