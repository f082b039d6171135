//! Commands module - CLI command implementations.

pub mod check;
pub mod create;
