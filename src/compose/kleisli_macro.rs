//! The `kleisli!` macro for composing monadic functions.

/// Composes monadic functions from left to right.
///
/// `kleisli!(f, g, h)(x)` is `f(x).flat_map(g).flat_map(h)`. Each function
/// returns a container; the payload of one feeds the next. Composition
/// stops at the first empty or failed container and the remaining
/// functions are not called.
///
/// Unlike [`compose!`](crate::compose!), the order is left to right, the
/// same order in which the stages run.
///
/// The bind is a method call, so `Outcome`'s own `flat_map` is used and the
/// error type does not have to be `Clone`. Use [`compose_kleisli`] when a
/// composition has to be generic over [`Monad`](crate::typeclass::Monad).
///
/// [`compose_kleisli`]: crate::compose::compose_kleisli
///
/// # Syntax
///
/// - `kleisli!(f)` - Returns `f` unchanged
/// - `kleisli!(f, g)` - Returns `|x| f(x).flat_map(g)`
/// - `kleisli!(f, g, h, ...)` - Folds from the left: `kleisli!(kleisli!(f, g), h, ...)`
///
/// # Examples
///
/// ```
/// use lawful::control::Outcome;
/// use lawful::kleisli;
///
/// fn parse(text: &str) -> Outcome<String, i64> {
///     text.trim().parse::<i64>().map_err(|error| error.to_string()).into()
/// }
///
/// fn non_zero(value: i64) -> Outcome<String, i64> {
///     if value == 0 { Outcome::Failure("zero".to_string()) } else { Outcome::Success(value) }
/// }
///
/// fn invert(value: i64) -> Outcome<String, f64> {
///     Outcome::Success(1.0 / value as f64)
/// }
///
/// let pipeline = kleisli!(parse, non_zero, invert);
/// assert_eq!(pipeline(" 4 "), Outcome::Success(0.25));
/// assert_eq!(pipeline("0"), Outcome::Failure("zero".to_string()));
/// assert!(pipeline("four").is_failure());
/// ```
#[macro_export]
macro_rules! kleisli {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $second_function:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::typeclass::Monad as _;
        let first = $first_function;
        let second = $second_function;
        move |input| first(input).flat_map(&second)
    }};

    ($first_function:expr, $second_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::kleisli!(
            $crate::kleisli!($first_function, $second_function),
            $($remaining_functions),+
        )
    };
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use crate::control::{Maybe, Outcome};
    use rstest::rstest;
    use std::cell::Cell;

    fn half(value: i32) -> Maybe<i32> {
        if value % 2 == 0 {
            Maybe::Present(value / 2)
        } else {
            Maybe::Absent
        }
    }

    #[rstest]
    #[case(8, Maybe::Present(1))]
    #[case(12, Maybe::Absent)]
    #[case(3, Maybe::Absent)]
    fn stages_run_left_to_right(#[case] input: i32, #[case] expected: Maybe<i32>) {
        let eighth = kleisli!(half, half, half);
        assert_eq!(eighth(input), expected);
    }

    #[rstest]
    fn single_function_is_returned_unchanged() {
        let only = kleisli!(half);
        assert_eq!(only(4), Maybe::Present(2));
    }

    #[rstest]
    fn composes_outcomes_with_unclonable_error() {
        #[derive(Debug, PartialEq)]
        struct Rejected(i32);

        let positive = |x: i32| {
            if x > 0 { Outcome::Success(x) } else { Outcome::Failure(Rejected(x)) }
        };
        let calls = Cell::new(0);
        let counted = |x: i32| {
            calls.set(calls.get() + 1);
            Outcome::<Rejected, i32>::Success(x * 10)
        };
        let pipeline = kleisli!(positive, counted);
        assert_eq!(pipeline(2), Outcome::Success(20));
        assert_eq!(pipeline(-1), Outcome::Failure(Rejected(-1)));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn grouping_does_not_matter() {
        let left = kleisli!(kleisli!(half, half), half);
        let right = kleisli!(half, kleisli!(half, half));
        for input in [0, 8, 16, 6, 7] {
            assert_eq!(left(input), right(input));
        }
    }
}
