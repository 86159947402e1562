//! A page of [PrivateMoney] responses, as returned when listing the monies an
//! organization or shop can use.
//!
//! [PrivateMoney]: ../private_money/struct.PrivateMoney.html

use crate::{
    error::{Error, Result},
    response::{
        lib::{
            decode::{self, Decode},
            field,
        },
        pagination::Pagination,
        private_money::PrivateMoney,
    },
};
use derive_builder::Builder;
use getset::Getters;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, trace};

#[derive(Clone, Debug, PartialEq, Getters, Builder)]
#[builder(pattern = "owned", setter(into))]
#[getset(get = "pub")]
pub struct PaginatedPrivateMoneys {
    /// The monies on this page, in server order
    #[builder(default)]
    rows: Vec<PrivateMoney>,
    /// Total number of monies across all pages
    #[builder(default)]
    count: Option<u64>,
    pagination: Pagination,
}

/// `rows` and `pagination` stay in the record and are decoded by reference.
#[derive(Debug, Deserialize)]
struct PaginatedPrivateMoneysRecord {
    #[serde(default, deserialize_with = "field::integer")]
    count: Option<u64>,
}

impl PaginatedPrivateMoneys {
    pub fn builder() -> PaginatedPrivateMoneysBuilder {
        PaginatedPrivateMoneysBuilder::default()
    }

    /// Decode a page, using `row` to decode each private money in `rows`.
    /// The first row that fails stops the decode.
    pub fn decode_with<F>(value: &Value, row: F) -> Result<Self>
        where F: FnMut(&Value) -> Result<PrivateMoney>,
    {
        decode::record(value, Self::NAME)?;
        Self::decode_record_with(value, row)
    }

    fn decode_record_with<F>(value: &Value, mut row: F) -> Result<Self>
        where F: FnMut(&Value) -> Result<PrivateMoney>,
    {
        let raw: PaginatedPrivateMoneysRecord = decode::partial(value)?;
        let values = decode::list(decode::field(value, "rows"), &format!("{}.rows", Self::NAME))?;
        let mut rows = Vec::with_capacity(values.len());
        for (idx, item) in values.iter().enumerate() {
            match row(item) {
                Ok(money) => rows.push(money),
                Err(e) => {
                    debug!(row = idx, error = %e, "private money row failed to decode");
                    return Err(e);
                }
            }
        }
        let pagination = Pagination::decode(decode::field(value, "pagination"))?;
        trace!(rows = rows.len(), page = ?pagination.current(), "decoded private money page");
        Self::builder()
            .rows(rows)
            .count(raw.count)
            .pagination(pagination)
            .build()
            .map_err(|e| Error::BuilderFailed(e))
    }
}

impl Decode for PaginatedPrivateMoneys {
    const NAME: &'static str = "paginated_private_moneys";

    fn decode_record(value: &Value) -> Result<Self> {
        Self::decode_record_with(value, PrivateMoney::decode)
    }
}
