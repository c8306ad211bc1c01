#![cfg(all(feature = "control", feature = "laws"))]
//! Property-based tests for the Monad laws on every container.
//!
//! 1. Left Identity: `pure(a).flat_map(f) == f(a)`
//! 2. Right Identity: `m.flat_map(pure) == m`
//! 3. Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! `pure` is `Identity::new`, `Maybe::Present` and `Outcome::Success`. The
//! functions come from a fixed family of pure total functions picked by a
//! generated index, so partial ones (which produce `Absent` or `Failure`)
//! are exercised as often as total ones.
//!
//! The harness checks use payload-preserving functions. The `*_changes_type`
//! properties state associativity directly for `A -> M<B>` and `B -> M<C>`.

use lawful::control::{Maybe, Outcome};
use lawful::laws::{check_associativity, check_left_identity, check_right_identity};
use lawful::typeclass::{Applicative, Identity, Monad};
use proptest::prelude::*;

// =============================================================================
// Function families
// =============================================================================

fn identity_function(index: usize, x: i32) -> Identity<i32> {
    match index % 4 {
        0 => Identity::new(x.saturating_mul(2)),
        1 => Identity::new(x.saturating_add(1)),
        2 => Identity::new(x.saturating_sub(1)),
        _ => Identity::new(x / 3),
    }
}

fn maybe_function(index: usize, x: i32) -> Maybe<i32> {
    match index % 5 {
        0 => Maybe::Present(x.saturating_mul(2)),
        1 => Maybe::Present(x.saturating_add(1)),
        2 => Maybe::Present(x.saturating_sub(1)),
        3 => {
            if x % 2 == 0 {
                Maybe::Present(x / 2)
            } else {
                Maybe::Absent
            }
        }
        _ => {
            if x >= 0 {
                Maybe::Present(x)
            } else {
                Maybe::Absent
            }
        }
    }
}

fn outcome_function(index: usize, x: i32) -> Outcome<String, i32> {
    match index % 5 {
        0 => Outcome::Success(x.saturating_mul(2)),
        1 => Outcome::Success(x.saturating_add(1)),
        2 => Outcome::Success(x.saturating_sub(1)),
        3 => {
            if x % 2 == 0 {
                Outcome::Success(x / 2)
            } else {
                Outcome::Failure("odd".to_string())
            }
        }
        _ => {
            if x >= 0 {
                Outcome::Success(x)
            } else {
                Outcome::Failure("negative".to_string())
            }
        }
    }
}

/// `i32 -> M<i64>`, widening or rejecting.
fn widen_maybe(index: usize, x: i32) -> Maybe<i64> {
    match index % 3 {
        0 => Maybe::Present(i64::from(x) * 3),
        1 if x % 3 == 0 => Maybe::Present(i64::from(x) / 3),
        1 => Maybe::Absent,
        _ => Maybe::Present(-i64::from(x)),
    }
}

/// `i64 -> M<String>`, rendering or rejecting.
fn render_maybe(index: usize, x: i64) -> Maybe<String> {
    match index % 3 {
        0 => Maybe::Present(x.to_string()),
        1 if x >= 0 => Maybe::Present(format!("+{x}")),
        1 => Maybe::Absent,
        _ => Maybe::Present(format!("{x:x}")),
    }
}

fn widen_outcome(index: usize, x: i32) -> Outcome<String, i64> {
    widen_maybe(index, x).ok_or_else(|| format!("{x} is not a multiple of 3"))
}

fn render_outcome(index: usize, x: i64) -> Outcome<String, String> {
    render_maybe(index, x).ok_or_else(|| format!("{x} is negative"))
}

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    prop_oneof![
        3 => any::<i32>().prop_map(Maybe::Present),
        1 => Just(Maybe::Absent),
    ]
}

fn outcome_strategy() -> impl Strategy<Value = Outcome<String, i32>> {
    prop_oneof![
        1 => "[a-z]{0,8}".prop_map(Outcome::Failure),
        3 => any::<i32>().prop_map(Outcome::Success),
    ]
}

// =============================================================================
// Identity
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_identity_left_identity(a in any::<i32>(), f in 0usize..4) {
        prop_assert_eq!(check_left_identity(a, |x| identity_function(f, x)), Ok(()));
    }

    #[test]
    fn prop_identity_right_identity(a in any::<i32>()) {
        prop_assert_eq!(check_right_identity(Identity::new(a)), Ok(()));
    }

    #[test]
    fn prop_identity_associativity_changes_type(a in any::<i32>()) {
        let widen = |x: i32| Identity::new(i64::from(x) * 2);
        let render = |x: i64| Identity::new(x.to_string());
        let sequential = Identity::new(a).flat_map(widen).flat_map(render);
        let nested = Identity::new(a).flat_map(|x| widen(x).flat_map(render));
        prop_assert_eq!(sequential, nested);
    }

    #[test]
    fn prop_identity_associativity(a in any::<i32>(), f in 0usize..4, g in 0usize..4) {
        prop_assert_eq!(
            check_associativity(
                Identity::new(a),
                |x| identity_function(f, x),
                |x| identity_function(g, x),
            ),
            Ok(())
        );
    }
}

// =============================================================================
// Maybe
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_maybe_left_identity(a in any::<i32>(), f in 0usize..5) {
        prop_assert_eq!(check_left_identity(a, |x| maybe_function(f, x)), Ok(()));
    }

    #[test]
    fn prop_maybe_right_identity(m in maybe_strategy()) {
        prop_assert_eq!(check_right_identity(m), Ok(()));
    }

    #[test]
    fn prop_maybe_associativity(m in maybe_strategy(), f in 0usize..5, g in 0usize..5) {
        prop_assert_eq!(
            check_associativity(m, |x| maybe_function(f, x), |x| maybe_function(g, x)),
            Ok(())
        );
    }

    #[test]
    fn prop_maybe_associativity_changes_type(m in maybe_strategy(), f in 0usize..3, g in 0usize..3) {
        let sequential = m
            .flat_map(|x| widen_maybe(f, x))
            .flat_map(|x| render_maybe(g, x));
        let nested = m.flat_map(|x| widen_maybe(f, x).flat_map(|y| render_maybe(g, y)));
        prop_assert_eq!(sequential, nested);
    }

    /// The inherent and trait binds agree.
    #[test]
    fn prop_maybe_inherent_bind_matches_trait(m in maybe_strategy(), f in 0usize..5) {
        let inherent = m.flat_map(|x| maybe_function(f, x));
        let through_trait = Monad::flat_map(m, |x| maybe_function(f, x));
        prop_assert_eq!(inherent, through_trait);
        prop_assert_eq!(m.bind(|x| maybe_function(f, x)), inherent);
    }
}

// =============================================================================
// Outcome
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_outcome_left_identity(a in any::<i32>(), f in 0usize..5) {
        prop_assert_eq!(check_left_identity(a, |x| outcome_function(f, x)), Ok(()));
    }

    #[test]
    fn prop_outcome_right_identity(m in outcome_strategy()) {
        prop_assert_eq!(check_right_identity(m), Ok(()));
    }

    #[test]
    fn prop_outcome_associativity(m in outcome_strategy(), f in 0usize..5, g in 0usize..5) {
        prop_assert_eq!(
            check_associativity(m, |x| outcome_function(f, x), |x| outcome_function(g, x)),
            Ok(())
        );
    }

    #[test]
    fn prop_outcome_associativity_changes_type(
        m in outcome_strategy(),
        f in 0usize..3,
        g in 0usize..3,
    ) {
        let sequential = m
            .clone()
            .flat_map(|x| widen_outcome(f, x))
            .flat_map(|x| render_outcome(g, x));
        let nested = m.flat_map(|x| widen_outcome(f, x).flat_map(|y| render_outcome(g, y)));
        prop_assert_eq!(sequential, nested);
    }

    #[test]
    fn prop_outcome_pure_is_success(a in any::<i32>()) {
        let lifted: Outcome<String, i32> = <Outcome<String, ()>>::pure(a);
        prop_assert_eq!(lifted, Outcome::Success(a));
    }

    /// A failure passes through any chain of binds unchanged.
    #[test]
    fn prop_outcome_failure_is_absorbing(
        error in "[a-z]{1,8}",
        functions in prop::collection::vec(0usize..5, 0..6),
    ) {
        let start: Outcome<String, i32> = Outcome::Failure(error.clone());
        let result = functions
            .iter()
            .fold(start, |acc, &f| acc.flat_map(|x| outcome_function(f, x)));
        prop_assert_eq!(result, Outcome::Failure(error));
    }
}
