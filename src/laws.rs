//! Law-verification harness.
//!
//! Generic checks for the functor, monad and Kleisli laws. Each check takes
//! a sample container or value plus the functions to exercise, evaluates
//! both sides of one law, and reports the first mismatch as a
//! [`LawViolation`].
//!
//! The checks are written once against the type classes, so the same
//! harness validates [`Identity`](crate::typeclass::Identity),
//! [`Maybe`](crate::control::Maybe) and [`Outcome`](crate::control::Outcome).
//! Property tests drive them with generated inputs.
//!
//! # Laws
//!
//! ```text
//! functor identity:     m.fmap(identity) == m
//! functor composition:  m.fmap(g).fmap(f) == m.fmap(|x| f(g(x)))
//! left identity:        pure(x).flat_map(f) == f(x)
//! right identity:       m.flat_map(pure) == m
//! associativity:        m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! kleisli associativity: (f >=> g) >=> h == f >=> (g >=> h)
//! kleisli identity:     pure >=> f == f == f >=> pure
//! ```
//!
//! The functions are endomorphic on the payload type (`A -> A` or
//! `A -> M<A>`), which keeps every intermediate container the same type `M`
//! and lets the equality of both sides be checked directly.
//!
//! # Examples
//!
//! ```rust
//! use lawful::control::Maybe;
//! use lawful::laws::{check_associativity, check_left_identity, check_right_identity};
//!
//! let half = |x: i32| if x % 2 == 0 { Maybe::Present(x / 2) } else { Maybe::Absent };
//! let positive = |x: i32| if x > 0 { Maybe::Present(x) } else { Maybe::Absent };
//!
//! assert!(check_left_identity(8, half).is_ok());
//! assert!(check_right_identity(Maybe::Present(8)).is_ok());
//! assert!(check_associativity(Maybe::Present(8), half, positive).is_ok());
//! ```

use std::fmt::{self, Debug};

use crate::compose::{compose_kleisli, identity};
use crate::typeclass::{Functor, Monad, TypeConstructor};

/// A law that did not hold, with both sides rendered for diagnosis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawViolation {
    /// The name of the violated law.
    pub law: &'static str,
    /// `Debug` rendering of the left-hand side.
    pub left: String,
    /// `Debug` rendering of the right-hand side.
    pub right: String,
}

impl fmt::Display for LawViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} law violated: left side {} != right side {}",
            self.law, self.left, self.right
        )
    }
}

impl std::error::Error for LawViolation {}

fn verify<T: PartialEq + Debug>(law: &'static str, left: &T, right: &T) -> Result<(), LawViolation> {
    if left == right {
        Ok(())
    } else {
        Err(LawViolation {
            law,
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        })
    }
}

/// Checks `container.fmap(identity) == container`.
///
/// # Errors
///
/// Returns [`LawViolation`] naming `"functor identity"` if the law fails.
pub fn check_functor_identity<M, A>(container: M) -> Result<(), LawViolation>
where
    M: Functor + TypeConstructor<Inner = A, WithType<A> = M> + Clone + PartialEq + Debug,
{
    let mapped = container.clone().fmap::<A, _>(identity);
    verify("functor identity", &mapped, &container)
}

/// Checks `container.fmap(inner).fmap(outer) == container.fmap(|x| outer(inner(x)))`.
///
/// # Errors
///
/// Returns [`LawViolation`] naming `"functor composition"` if the law fails.
pub fn check_functor_composition<M, A, F, G>(
    container: M,
    outer: F,
    inner: G,
) -> Result<(), LawViolation>
where
    M: Functor + TypeConstructor<Inner = A, WithType<A> = M> + Clone + PartialEq + Debug,
    F: Fn(A) -> A,
    G: Fn(A) -> A,
{
    let stepwise = container.clone().fmap::<A, _>(&inner).fmap::<A, _>(&outer);
    let fused = container.fmap::<A, _>(crate::compose!(&outer, &inner));
    verify("functor composition", &stepwise, &fused)
}

/// Checks `pure(value).flat_map(function) == function(value)`.
///
/// # Errors
///
/// Returns [`LawViolation`] naming `"left identity"` if the law fails.
pub fn check_left_identity<M, A, F>(value: A, function: F) -> Result<(), LawViolation>
where
    M: Monad + TypeConstructor<Inner = A, WithType<A> = M> + PartialEq + Debug,
    A: Clone,
    F: Fn(A) -> M,
{
    let bound = M::pure::<A>(value.clone()).flat_map::<A, _>(&function);
    verify("left identity", &bound, &function(value))
}

/// Checks `container.flat_map(pure) == container`.
///
/// # Errors
///
/// Returns [`LawViolation`] naming `"right identity"` if the law fails.
pub fn check_right_identity<M, A>(container: M) -> Result<(), LawViolation>
where
    M: Monad + TypeConstructor<Inner = A, WithType<A> = M> + Clone + PartialEq + Debug,
{
    let bound = container.clone().flat_map::<A, _>(|value| M::pure::<A>(value));
    verify("right identity", &bound, &container)
}

/// Checks `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`.
///
/// # Errors
///
/// Returns [`LawViolation`] naming `"associativity"` if the law fails.
pub fn check_associativity<M, A, F, G>(container: M, first: F, second: G) -> Result<(), LawViolation>
where
    M: Monad + TypeConstructor<Inner = A, WithType<A> = M> + Clone + PartialEq + Debug,
    F: Fn(A) -> M,
    G: Fn(A) -> M,
{
    let sequential = container
        .clone()
        .flat_map::<A, _>(&first)
        .flat_map::<A, _>(&second);
    let nested = container.flat_map::<A, _>(|value| first(value).flat_map::<A, _>(&second));
    verify("associativity", &sequential, &nested)
}

/// Checks that Kleisli composition is associative at `value`.
///
/// # Errors
///
/// Returns [`LawViolation`] naming `"kleisli associativity"` if the law fails.
pub fn check_kleisli_associativity<M, A, F, G, H>(
    value: A,
    first: F,
    second: G,
    third: H,
) -> Result<(), LawViolation>
where
    M: Monad + TypeConstructor<Inner = A, WithType<A> = M> + PartialEq + Debug,
    A: Clone,
    F: Fn(A) -> M,
    G: Fn(A) -> M,
    H: Fn(A) -> M,
{
    let left_grouped = compose_kleisli::<A, M, A, _, _>(
        compose_kleisli::<A, M, A, _, _>(&first, &second),
        &third,
    );
    let right_grouped = compose_kleisli::<A, M, A, _, _>(
        &first,
        compose_kleisli::<A, M, A, _, _>(&second, &third),
    );
    verify(
        "kleisli associativity",
        &left_grouped(value.clone()),
        &right_grouped(value),
    )
}

/// Checks that `pure` is a two-sided unit of Kleisli composition at `value`.
///
/// # Errors
///
/// Returns [`LawViolation`] naming `"kleisli left identity"` or
/// `"kleisli right identity"` if either side fails.
pub fn check_kleisli_identity<M, A, F>(value: A, function: F) -> Result<(), LawViolation>
where
    M: Monad + TypeConstructor<Inner = A, WithType<A> = M> + PartialEq + Debug,
    A: Clone,
    F: Fn(A) -> M,
{
    let expected = function(value.clone());

    let pure_first = compose_kleisli::<A, M, A, _, _>(|input| M::pure::<A>(input), &function);
    verify("kleisli left identity", &pure_first(value.clone()), &expected)?;

    let pure_last = compose_kleisli::<A, M, A, _, _>(&function, |input| M::pure::<A>(input));
    verify("kleisli right identity", &pure_last(value), &expected)
}
