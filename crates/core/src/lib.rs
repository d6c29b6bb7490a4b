//! `fullstack-core` — primitives shared by the service crates.
//!
//! This crate contains **pure** building blocks (no HTTP, no I/O).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::ItemId;
