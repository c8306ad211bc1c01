//! # lawful
//!
//! Generic algebraic containers for Rust, together with the combinators
//! that make them lawful functors and monads.
//!
//! ## Overview
//!
//! - **Containers**: [`Maybe`](control::Maybe) (zero or one value),
//!   [`Outcome`](control::Outcome) (exactly one of failure or success) and the
//!   single-case [`Identity`](typeclass::Identity) reference monad
//! - **Type Classes**: Functor, Applicative, Monad, Bifunctor
//! - **Composition**: `compose!`, Kleisli composition (`kleisli!`) and
//!   the short-circuiting `chain!` sequencing macro
//! - **Laws**: a harness that checks the functor, monad and Kleisli laws for
//!   any container implementing the type classes
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.) and `Identity`
//! - `control`: The `Maybe` and `Outcome` containers
//! - `compose`: Function and Kleisli composition utilities
//! - `laws`: The law-verification harness
//! - `serde`: Serialization support for the containers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lawful::prelude::*;
//!
//! fn parse(text: &str) -> Outcome<String, i32> {
//!     text.parse::<i32>()
//!         .map_err(|error| error.to_string())
//!         .into()
//! }
//!
//! fn halve(value: i32) -> Outcome<String, i32> {
//!     if value % 2 == 0 {
//!         Outcome::Success(value / 2)
//!     } else {
//!         Outcome::Failure(format!("{value} is odd"))
//!     }
//! }
//!
//! let parse_then_halve = kleisli!(parse, halve);
//! assert_eq!(parse_then_halve("42"), Outcome::Success(21));
//! assert_eq!(parse_then_halve("7"), Outcome::Failure("7 is odd".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lawful::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "laws")]
    pub use crate::laws::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "laws")]
pub mod laws;
