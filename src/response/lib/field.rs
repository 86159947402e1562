//! Lenient field decoders for partial records, used via
//! `#[serde(default, deserialize_with = "...")]`.
//!
//! Each decoder accepts any JSON value. A value of the expected kind becomes
//! `Some`, anything else becomes `None`. None of them ever error.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// A JSON string, converted into `T` (plain strings, IDs, codes).
pub(crate) fn string<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where D: Deserializer<'de>,
          T: From<String>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(val) => Some(T::from(val)),
        _ => None,
    })
}

pub(crate) fn boolean<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(val) => Some(val),
        _ => None,
    })
}

/// A non-negative JSON integer.
pub(crate) fn integer<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(val) => val.as_u64(),
        _ => None,
    })
}

/// A JSON number (integer or float) as a `Decimal`. Numeric strings are not
/// parsed.
pub(crate) fn decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(val) => number_to_decimal(&val),
        _ => None,
    })
}

/// Parse the number from its JSON text, so fractional amounts keep every
/// digit. Values outside `Decimal`'s range or precision are `None`.
fn number_to_decimal(number: &Number) -> Option<Decimal> {
    let text = number.to_string();
    if text.contains(|c| c == 'e' || c == 'E') {
        Decimal::from_scientific(&text).ok()
    } else {
        text.parse::<Decimal>().ok()
    }
}
