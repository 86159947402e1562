//! Page bookkeeping returned alongside every list endpoint.

use crate::{
    error::Result,
    response::lib::{
        decode::{self, Decode},
        field,
    },
};
use derive_builder::Builder;
use getset::Getters;
use serde::Deserialize;
use serde_json::Value;

#[derive(Clone, Debug, Default, PartialEq, Getters, Builder, Deserialize)]
#[builder(pattern = "owned", setter(into), default)]
#[getset(get = "pub")]
pub struct Pagination {
    /// The page these rows came from, starting at 1
    #[serde(default, deserialize_with = "field::integer")]
    current: Option<u64>,
    #[serde(default, deserialize_with = "field::integer")]
    per_page: Option<u64>,
    #[serde(default, deserialize_with = "field::integer")]
    max_page: Option<u64>,
    #[serde(default, deserialize_with = "field::boolean")]
    has_prev: Option<bool>,
    #[serde(default, deserialize_with = "field::boolean")]
    has_next: Option<bool>,
}

impl Pagination {
    pub fn builder() -> PaginationBuilder {
        PaginationBuilder::default()
    }
}

impl Decode for Pagination {
    const NAME: &'static str = "pagination";

    fn decode_record(value: &Value) -> Result<Self> {
        decode::partial(value)
    }
}
