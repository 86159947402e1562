//! The decoding contract shared by every response type.
//!
//! The HTTP layer hands us the parsed JSON body of a response. Each response
//! type pulls its fields out of that body by key. Scalar fields are lenient:
//! a missing key, a `null`, or a value of the wrong JSON kind all decode to
//! `None`. Nested records are not: they go through their own type's
//! [Decode](trait.Decode.html) impl, and whatever that impl returns is what
//! the parent returns.

use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

/// A decoded JSON object, as handed over by the HTTP/JSON layer.
pub type Record = Map<String, Value>;

/// Implemented by every response type that can be built from a [Record].
pub trait Decode: Sized {
    /// Name used to identify this response type in errors.
    const NAME: &'static str;

    /// Build the response from a value already checked to be a JSON object.
    fn decode_record(value: &Value) -> Result<Self>;

    /// Build the response from any JSON value. Fails if the value is not a
    /// JSON object.
    fn decode(value: &Value) -> Result<Self> {
        record(value, Self::NAME)?;
        Self::decode_record(value)
    }

    /// Decode a list of values, in order. The first failure wins.
    fn decode_all(values: &[Value]) -> Result<Vec<Self>> {
        values.iter().map(Self::decode).collect()
    }
}

/// Borrow `value` as a record, or describe why it isn't one. `name` is the
/// record's name in the resulting error.
pub fn record<'a>(value: &'a Value, name: &str) -> Result<&'a Record> {
    match value {
        Value::Object(record) => Ok(record),
        Value::Null => Err(Error::MissingRecord(name.into())),
        other => Err(Error::NotARecord(name.into(), kind(other).into())),
    }
}

/// Borrow `value` as a list, or describe why it isn't one.
pub fn list<'a>(value: &'a Value, name: &str) -> Result<&'a [Value]> {
    match value {
        Value::Array(values) => Ok(values.as_slice()),
        Value::Null => Err(Error::MissingRecord(name.into())),
        other => Err(Error::NotAList(name.into(), kind(other).into())),
    }
}

static NULL: Value = Value::Null;

/// Borrow the value under `key`, or JSON `null` if the key is absent (or
/// `value` isn't a record).
pub fn field<'a>(value: &'a Value, key: &str) -> &'a Value {
    value.get(key).unwrap_or(&NULL)
}

/// Run a partial record's derived `Deserialize` over a borrowed record.
pub(crate) fn partial<'de, T: Deserialize<'de>>(value: &'de Value) -> Result<T> {
    T::deserialize(value)
        .map_err(|e| Error::Malformed(e.to_string()))
}

/// The JSON kind of a value, for error messages.
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "record",
    }
}
