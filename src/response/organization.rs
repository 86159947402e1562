//! An organization is the entity that issues a [PrivateMoney]. Responses only
//! ever carry a short reference to it: who it is and what it's called.
//!
//! [PrivateMoney]: ../private_money/struct.PrivateMoney.html

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

response_id! {
    /// Identifies an organization.
    OrganizationID
}

/// A reference to the organization issuing a money.
#[derive(Clone, Debug, Default, PartialEq, Getters, Builder, Deserialize)]
#[builder(pattern = "owned", setter(into), default)]
#[getset(get = "pub")]
pub struct Organization {
    #[serde(default, deserialize_with = "field::string")]
    id: Option<OrganizationID>,
    /// The organization's short code, used by the partner API to refer to it.
    #[serde(default, deserialize_with = "field::string")]
    code: Option<String>,
    /// Display name
    #[serde(default, deserialize_with = "field::string")]
    name: Option<String>,
}

impl Organization {
    pub fn builder() -> OrganizationBuilder {
        OrganizationBuilder::default()
    }
}

impl Decode for Organization {
    const NAME: &'static str = "organization";

    fn decode_record(value: &Value) -> Result<Self> {
        decode::partial(value)
    }
}
