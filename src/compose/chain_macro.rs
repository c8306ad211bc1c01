//! The `chain!` macro: sequential binding over any monad.
//!
//! `chain!` turns a block of dependent steps into nested `flat_map` calls,
//! so later steps can use the payloads of earlier ones. Because it is just
//! `flat_map`, it is left-biased and short-circuiting: after the first
//! `Absent` or `Failure`, no later step is evaluated and that first empty or
//! failed container is the result.

/// Sequences monadic steps with named intermediate results.
///
/// # Syntax
///
/// ```text
/// chain! {
///     pattern <= container;      // bind: flat_map over the container
///     let pattern = expression;  // pure binding
///     _ <= container;            // bind and discard the payload
///     pattern <= container;
///     yield expression           // final map (optional)
/// }
/// ```
///
/// The block ends either with an expression producing a container of the
/// same kind, or with `yield expression`, which maps the last bound
/// payload with the container's `map` instead of wrapping the result by
/// hand. Patterns may be identifiers, tuples or `_`.
///
/// Binds are method calls, so a container's own `flat_map` is preferred
/// over [`Monad::flat_map`](crate::typeclass::Monad::flat_map). `Outcome`
/// therefore chains with any error type, including ones that are not
/// `Clone`; other monads fall back to the trait method.
///
/// # Examples
///
/// ```
/// use lawful::chain;
/// use lawful::control::Maybe;
///
/// let sum = chain! {
///     x <= Maybe::Present(5);
///     y <= Maybe::Present(10);
///     let doubled = (x + y) * 2;
///     Maybe::Present(doubled)
/// };
/// assert_eq!(sum, Maybe::Present(30));
///
/// let missing: Maybe<i32> = chain! {
///     x <= Maybe::Present(5);
///     y <= Maybe::<i32>::Absent;
///     yield x + y
/// };
/// assert_eq!(missing, Maybe::Absent);
/// ```
///
/// Failures are returned unchanged and stop the chain:
///
/// ```
/// use lawful::chain;
/// use lawful::control::Outcome;
///
/// let result: Outcome<&str, i32> = chain! {
///     x <= Outcome::<&str, i32>::Success(1);
///     y <= Outcome::<&str, i32>::Failure("second step");
///     z <= Outcome::<&str, i32>::Failure("third step");
///     yield x + y + z
/// };
/// assert_eq!(result, Outcome::Failure("second step"));
/// ```
#[macro_export]
macro_rules! chain {
    // Terminal bind followed by `yield`: a single map.
    ($pattern:ident <= $container:expr ; yield $result:expr $(;)?) => {
        $container.map(move |$pattern| $result)
    };

    (($($pattern:tt)*) <= $container:expr ; yield $result:expr $(;)?) => {
        $container.map(move |($($pattern)*)| $result)
    };

    (_ <= $container:expr ; yield $result:expr $(;)?) => {
        $container.map(move |_| $result)
    };

    // Bind: pattern <= container; rest
    ($pattern:ident <= $container:expr ; $($rest:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::typeclass::Monad as _;
        $container.flat_map(move |$pattern| $crate::chain!($($rest)+))
    }};

    (($($pattern:tt)*) <= $container:expr ; $($rest:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::typeclass::Monad as _;
        $container.flat_map(move |($($pattern)*)| $crate::chain!($($rest)+))
    }};

    (_ <= $container:expr ; $($rest:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::typeclass::Monad as _;
        $container.flat_map(move |_| $crate::chain!($($rest)+))
    }};

    // Pure let binding: let pattern = expression; rest
    (let $pattern:ident = $expression:expr ; $($rest:tt)+) => {{
        let $pattern = $expression;
        $crate::chain!($($rest)+)
    }};

    (let ($($pattern:tt)*) = $expression:expr ; $($rest:tt)+) => {{
        let ($($pattern)*) = $expression;
        $crate::chain!($($rest)+)
    }};

    // Terminal expression.
    ($result:expr $(;)?) => {
        $result
    };
}
