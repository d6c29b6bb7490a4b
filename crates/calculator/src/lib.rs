//! `fullstack-calculator`
//!
//! Four-operation scalar calculator. Pure and reentrant: no shared state.

pub mod operation;

pub use operation::{compute, Calculation, Operation};
