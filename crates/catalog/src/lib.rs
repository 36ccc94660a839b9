//! Catalog module.
//!
//! Stock items as immutable value objects: validated on construction, never
//! mutated afterwards, rendered for people (`Display`) and for logs (`Debug`).

pub mod book;

pub use book::{BookInStock, Price};
