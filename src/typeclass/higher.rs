//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! The [`TypeConstructor`] trait recovers that ability with a generic
//! associated type: a container applied to `A` names the same container
//! applied to any other `B`.
//!
//! # Example
//!
//! ```rust
//! use lawful::typeclass::{Identity, TypeConstructor};
//!
//! fn relabel<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let relabelled: Identity<String> = relabel(Identity::new(42));
//! assert_eq!(relabelled, Identity::new(String::new()));
//! ```

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated Types.
/// It allows abstracting over type constructors like `Maybe<_>`,
/// `Outcome<E, _>` and `Identity<_>`.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Maybe<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` keeps the result a valid
    /// type constructor, so transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}
