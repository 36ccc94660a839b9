//! `primer-core` — shared building blocks.
//!
//! Pure domain primitives only: the error model, the value object contract, and
//! coercion of loosely-typed amounts into real numbers.

pub mod amount;
pub mod error;
pub mod value_object;

pub use amount::ToAmount;
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
