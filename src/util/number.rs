//! Utilities for working with the amounts carried by responses.

/// Create a `Decimal` amount, for comparing against decoded balances and
/// limits.
#[macro_export]
macro_rules! num {
    ($val:expr) => {
        rust_decimal_macros::dec!($val)
    }
}

