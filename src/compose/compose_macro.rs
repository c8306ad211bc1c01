//! The `compose!` macro for plain function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`: the rightmost function runs
/// first. Every argument must implement [`Fn`] and the output of each
/// function must be the input of the one to its left.
///
/// For functions returning a container, use [`kleisli!`](crate::kleisli!)
/// instead; it composes left to right through `flat_map`.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
///
/// # Examples
///
/// ```
/// use lawful::compose;
/// use lawful::compose::identity;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 11);
///
/// let with_identity = compose!(identity, add_one, identity);
/// assert_eq!(with_identity(5), add_one(5));
/// ```
///
/// Types may change along the chain:
///
/// ```
/// use lawful::compose;
///
/// let length_of_rendering = compose!(|s: String| s.len(), |x: i32| x.to_string());
/// assert_eq!(length_of_rendering(12345), 5);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    // Right fold: the tail is composed first, then wrapped by the head.
    ($head:expr, $($tail:expr),+ $(,)?) => {{
        let head = $head;
        let tail = $crate::compose!($($tail),+);
        move |input| head(tail(input))
    }};
}
