//! A set of utility macros and functions shared across the responses.

#[macro_use]
pub mod number;
