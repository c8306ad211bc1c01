//! Function and Kleisli composition utilities.
//!
//! # Overview
//!
//! - [`compose!`]: Compose plain functions right-to-left (mathematical composition)
//! - [`compose_kleisli`] and [`kleisli!`]: Compose functions that return a
//!   container, left-to-right through `flat_map`
//! - [`chain!`]: Sequence dependent container-producing steps with named
//!   intermediate results
//!
//! [`identity`] is the unit of `compose!` and the function the functor
//! identity law maps with.
//!
//! # Examples
//!
//! ## Plain composition
//!
//! ```
//! use lawful::compose;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! assert_eq!(compose!(add_one, double)(5), 11);
//! ```
//!
//! ## Kleisli composition
//!
//! ```
//! use lawful::control::Maybe;
//! use lawful::kleisli;
//!
//! fn head(values: Vec<i32>) -> Maybe<i32> {
//!     values.first().copied().into()
//! }
//!
//! fn positive(value: i32) -> Maybe<u32> {
//!     u32::try_from(value).ok().filter(|v| *v > 0).into()
//! }
//!
//! let first_positive = kleisli!(head, positive);
//! assert_eq!(first_positive(vec![3, -1]), Maybe::Present(3));
//! assert_eq!(first_positive(vec![-3, 1]), Maybe::Absent);
//! assert_eq!(first_positive(vec![]), Maybe::Absent);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`,
//!   and the same for `kleisli!`
//! - **Identity**: `identity` is the unit of `compose!`; `pure` is the unit of `kleisli!`

mod chain_macro;
mod compose_macro;
mod kleisli;
mod kleisli_macro;
mod utils;

pub use kleisli::compose_kleisli;
pub use utils::identity;

// Macros are exported at the crate root by #[macro_export]
pub use crate::chain;
pub use crate::compose;
pub use crate::kleisli;
