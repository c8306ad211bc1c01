//! Type class traits for functional programming abstractions.
//!
//! This module provides the type classes (traits) that the containers of this
//! crate implement:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent contexts
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Bifunctor`]: Mapping over both sides of a two-parameter container
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior, allowing us to define traits like Functor and Monad
//! in a generic way.
//!
//! ## Foundation Types
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Identity`]: Identity wrapper type, the trivially lawful monad
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{Applicative, Functor, Identity, Monad};
//!
//! let wrapped: Identity<i32> = <Identity<()>>::pure(20);
//! let result = wrapped
//!     .fmap(|n| n + 1)
//!     .flat_map(|n| Identity::new(n * 2));
//! assert_eq!(result, Identity::new(42));
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod identity;
mod monad;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
