//! Shared building blocks for the stock workspace: logging setup, small
//! wire types and startup environment checks.

pub mod env;
pub mod types;
pub mod utils;
