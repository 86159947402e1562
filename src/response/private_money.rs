//! A private money is a type of digital currency issued on the platform by an
//! [Organization]: a store's points, a prepaid balance, a regional currency.
//! Customers hold balances in it and shops accept it.
//!
//! The response only carries the money's settings down to the caller. Limits
//! (`max_balance`, `transfer_limit`) and expiration are enforced by the
//! server, never here.
//!
//! [Organization]: ../organization/struct.Organization.html

use crate::{
    error::{Error, Result},
    response::{
        lib::{
            decode::{self, Decode},
            field,
        },
        organization::Organization,
    },
};
use derive_builder::Builder;
use getset::Getters;
use rust_decimal::prelude::*;
use serde::Deserialize;
use serde_json::Value;

response_id! {
    /// Identifies a private money.
    PrivateMoneyID
}

response_code! {
    /// What kind of value a private money represents.
    pub enum MoneyType {
        /// Value bought up front with real money
        Prepaid = "prepaid",
        /// Value handed back on purchases
        Cashback = "cashback",
        /// Loyalty points
        Point = "point",
    }
}

response_code! {
    /// When held value of a private money expires.
    pub enum ExpirationType {
        /// On fixed dates set by the issuer
        Static = "static",
        /// A set time after the holder's last transaction
        LastUpdate = "last-update",
        /// A set time after the holder's last top-up
        LastTopupUpdate = "last-topup-update",
    }
}

/// The private money response. Every scalar is optional: the server's value
/// is passed through as-is, and anything missing or of an unexpected JSON
/// kind comes out as `None`. The issuing organization is always present.
#[derive(Clone, Debug, PartialEq, Getters, Builder)]
#[builder(pattern = "owned", setter(into))]
#[getset(get = "pub")]
pub struct PrivateMoney {
    #[builder(default)]
    id: Option<PrivateMoneyID>,
    /// Display name
    #[builder(default)]
    name: Option<String>,
    /// The unit label shown next to amounts (`pt`, `円`, ...)
    #[builder(default)]
    unit: Option<String>,
    /// Whether only a closed set of participants may use this money
    #[builder(default)]
    is_exclusive: Option<bool>,
    #[builder(default)]
    description: Option<String>,
    /// Who issues this money
    organization: Organization,
    /// The most a single holder's balance can reach
    #[builder(default)]
    max_balance: Option<Decimal>,
    /// The most that can move in a single transfer
    #[builder(default)]
    transfer_limit: Option<Decimal>,
    /// Sent as `type` on the wire.
    #[builder(default)]
    money_type: Option<MoneyType>,
    #[builder(default)]
    expiration_type: Option<ExpirationType>,
}

/// The scalar half of a private money record. `organization` is left in the
/// record and handed by reference to whichever organization decoder the
/// caller picked.
#[derive(Debug, Deserialize)]
struct PrivateMoneyRecord {
    #[serde(default, deserialize_with = "field::string")]
    id: Option<PrivateMoneyID>,
    #[serde(default, deserialize_with = "field::string")]
    name: Option<String>,
    #[serde(default, deserialize_with = "field::string")]
    unit: Option<String>,
    #[serde(default, deserialize_with = "field::boolean")]
    is_exclusive: Option<bool>,
    #[serde(default, deserialize_with = "field::string")]
    description: Option<String>,
    #[serde(default, deserialize_with = "field::decimal")]
    max_balance: Option<Decimal>,
    #[serde(default, deserialize_with = "field::decimal")]
    transfer_limit: Option<Decimal>,
    #[serde(rename = "type", default, deserialize_with = "field::string")]
    money_type: Option<MoneyType>,
    #[serde(default, deserialize_with = "field::string")]
    expiration_type: Option<ExpirationType>,
}

impl PrivateMoney {
    pub fn builder() -> PrivateMoneyBuilder {
        PrivateMoneyBuilder::default()
    }

    /// Decode a private money, using `organization` to decode the nested
    /// organization record. The nested value is passed as JSON `null` when
    /// the key is absent, and any error it returns is ours.
    pub fn decode_with<F>(value: &Value, organization: F) -> Result<Self>
        where F: FnOnce(&Value) -> Result<Organization>,
    {
        decode::record(value, Self::NAME)?;
        Self::decode_record_with(value, organization)
    }

    fn decode_record_with<F>(value: &Value, organization: F) -> Result<Self>
        where F: FnOnce(&Value) -> Result<Organization>,
    {
        let raw: PrivateMoneyRecord = decode::partial(value)?;
        let organization = organization(decode::field(value, "organization"))?;
        Self::builder()
            .id(raw.id)
            .name(raw.name)
            .unit(raw.unit)
            .is_exclusive(raw.is_exclusive)
            .description(raw.description)
            .organization(organization)
            .max_balance(raw.max_balance)
            .transfer_limit(raw.transfer_limit)
            .money_type(raw.money_type)
            .expiration_type(raw.expiration_type)
            .build()
            .map_err(|e| Error::BuilderFailed(e))
    }
}

impl Decode for PrivateMoney {
    const NAME: &'static str = "private_money";

    fn decode_record(value: &Value) -> Result<Self> {
        Self::decode_record_with(value, Organization::decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        response::organization::OrganizationID,
        util::test::*,
    };
    use serde_json::json;

    #[test]
    fn decodes_example_record() {
        let money = PrivateMoney::decode(&private_money_record()).unwrap();
        assert_eq!(money.id(), &Some(PrivateMoneyID::new("pm_1")));
        assert_eq!(money.name(), &Some("Points".into()));
        assert_eq!(money.unit(), &Some("pt".into()));
        assert_eq!(money.is_exclusive(), &Some(false));
        assert_eq!(money.description(), &None);
        assert_eq!(money.organization().id(), &Some(OrganizationID::new("org_1")));
        assert_eq!(money.organization().name(), &Some("Acme".into()));
        assert_eq!(money.max_balance(), &Some(num!(100000)));
        assert_eq!(money.transfer_limit(), &Some(num!(5000)));
        assert_eq!(money.money_type(), &Some(MoneyType::Point));
        assert_eq!(money.expiration_type(), &Some(ExpirationType::Other("none".into())));
    }

    #[test]
    fn fields_match_record() {
        let record = json!({
            "id": "7f2c5b4e-1b8a-4c59-9a9e-0d1e6b2c3a44",
            "name": "Shibuya Coin",
            "unit": "SC",
            "is_exclusive": true,
            "description": "regional currency",
            "organization": {"code": "shibuya", "name": "Shibuya Ward"},
            "max_balance": 300000,
            "transfer_limit": 12.5,
            "type": "prepaid",
            "expiration_type": "last-topup-update"
        });
        let money = PrivateMoney::decode(&record).unwrap();
        let expected = PrivateMoney::builder()
            .id(PrivateMoneyID::new("7f2c5b4e-1b8a-4c59-9a9e-0d1e6b2c3a44"))
            .name(String::from("Shibuya Coin"))
            .unit(String::from("SC"))
            .is_exclusive(true)
            .description(String::from("regional currency"))
            .organization(Organization::decode(&record["organization"]).unwrap())
            .max_balance(num!(300000))
            .transfer_limit(num!(12.5))
            .money_type(MoneyType::Prepaid)
            .expiration_type(ExpirationType::LastTopupUpdate)
            .build().unwrap();
        assert_eq!(money, expected);
        assert_eq!(money.organization().code(), &Some("shibuya".into()));
        assert_eq!(money.organization().id(), &None);
    }

    #[test]
    fn decoding_is_repeatable() {
        let record = private_money_record();
        let money1 = PrivateMoney::decode(&record).unwrap();
        let money2 = PrivateMoney::decode(&record).unwrap();
        assert_eq!(money1, money2);
    }

    #[test]
    fn missing_scalars_are_none() {
        let money = PrivateMoney::decode(&without_key(private_money_record(), "description")).unwrap();
        assert_eq!(money.description(), &None);

        let money = PrivateMoney::decode(&json!({"organization": {"id": "org_1"}})).unwrap();
        let expected = PrivateMoney::builder()
            .organization(Organization::builder().id(OrganizationID::new("org_1")).build().unwrap())
            .build().unwrap();
        assert_eq!(money, expected);
        assert_eq!(money.id(), &None);
        assert_eq!(money.is_exclusive(), &None);
        assert_eq!(money.max_balance(), &None);
        assert_eq!(money.money_type(), &None);
    }

    #[test]
    fn malformed_scalars_are_none() {
        let record = json!({
            "id": 1,
            "name": {"ja": "ポイント"},
            "unit": false,
            "is_exclusive": "no",
            "description": ["points"],
            "organization": {"id": "org_1"},
            "max_balance": "100000",
            "transfer_limit": true,
            "type": 3,
            "expiration_type": null
        });
        let money = PrivateMoney::decode(&record).unwrap();
        assert_eq!(money.id(), &None);
        assert_eq!(money.name(), &None);
        assert_eq!(money.unit(), &None);
        assert_eq!(money.is_exclusive(), &None);
        assert_eq!(money.description(), &None);
        assert_eq!(money.max_balance(), &None);
        assert_eq!(money.transfer_limit(), &None);
        assert_eq!(money.money_type(), &None);
        assert_eq!(money.expiration_type(), &None);
    }

    #[test]
    fn fractional_amounts_keep_digits() {
        let record = with_key(private_money_record(), "max_balance", json!(1234567890.123456));
        let record = with_key(record, "transfer_limit", json!(0.1));
        let money = PrivateMoney::decode(&record).unwrap();
        assert_eq!(money.max_balance(), &Some(num!(1234567890.123456)));
        assert_eq!(money.transfer_limit(), &Some(num!(0.1)));

        let record: Value = serde_json::from_str(r#"{"organization": {}, "max_balance": 2.5e-7, "transfer_limit": 1e30}"#).unwrap();
        let money = PrivateMoney::decode(&record).unwrap();
        assert_eq!(money.max_balance(), &Some(num!(0.00000025)));
        assert_eq!(money.transfer_limit(), &None);
    }

    #[test]
    fn extra_keys_ignored() {
        let record = with_key(private_money_record(), "can_use_credit_card", json!(true));
        let record = with_key(record, "images", json!({"logo": "https://example.com/logo.png"}));
        let money = PrivateMoney::decode(&record).unwrap();
        assert_eq!(money, PrivateMoney::decode(&private_money_record()).unwrap());
    }

    #[test]
    fn organization_is_required() {
        let res = PrivateMoney::decode(&without_key(private_money_record(), "organization"));
        assert_eq!(res, Err(Error::MissingRecord("organization".into())));

        let res = PrivateMoney::decode(&with_key(private_money_record(), "organization", json!(null)));
        assert_eq!(res, Err(Error::MissingRecord("organization".into())));

        let res = PrivateMoney::decode(&with_key(private_money_record(), "organization", json!("org_1")));
        assert_eq!(res, Err(Error::NotARecord("organization".into(), "string".into())));
    }

    #[test]
    fn must_be_a_record() {
        let res = PrivateMoney::decode(&json!([private_money_record()]));
        assert_eq!(res, Err(Error::NotARecord("private_money".into(), "array".into())));
        let res = PrivateMoney::decode(&Value::Null);
        assert_eq!(res, Err(Error::MissingRecord("private_money".into())));
    }

    #[test]
    fn decode_with_organization_decoder() {
        let record = private_money_record();
        let money = PrivateMoney::decode_with(&record, |value| {
            assert_eq!(value, &json!({"id": "org_1", "name": "Acme"}));
            Ok(make_organization("replaced", "r", "Replaced Inc"))
        }).unwrap();
        assert_eq!(money.organization(), &make_organization("replaced", "r", "Replaced Inc"));
        assert_eq!(money.name(), &Some("Points".into()));

        let res = PrivateMoney::decode_with(&record, |_| Err(Error::Malformed("nope".into())));
        assert_eq!(res, Err(Error::Malformed("nope".into())));

        let money = PrivateMoney::decode_with(&record, |value| {
            assert!(std::ptr::eq(value, &record["organization"]));
            Organization::decode(value)
        }).unwrap();
        assert_eq!(money, PrivateMoney::decode(&record).unwrap());

        let record = without_key(record, "organization");
        let money = PrivateMoney::decode_with(&record, |value| {
            assert_eq!(value, &Value::Null);
            Ok(Organization::default())
        }).unwrap();
        assert_eq!(money.organization(), &Organization::default());
    }

    #[test]
    fn builder_requires_organization() {
        let res = PrivateMoney::builder()
            .name(String::from("Points"))
            .build();
        assert!(res.is_err());
    }

    #[test]
    fn codes() {
        assert_eq!(MoneyType::from("cashback"), MoneyType::Cashback);
        assert_eq!(MoneyType::from("gift"), MoneyType::Other("gift".into()));
        assert_eq!(MoneyType::Other("gift".into()).as_str(), "gift");
        assert_eq!(ExpirationType::from("last-update"), ExpirationType::LastUpdate);
        assert_eq!(ExpirationType::from(String::from("static")), ExpirationType::Static);
        assert_eq!(ExpirationType::LastTopupUpdate.to_string(), "last-topup-update");
        assert_eq!(PrivateMoneyID::new("pm_1").to_string(), "pm_1");
    }

    #[test]
    fn responses_are_thread_safe() {
        fn send_sync<T: Send + Sync>() {}
        send_sync::<PrivateMoney>();
        send_sync::<Organization>();
    }
}

