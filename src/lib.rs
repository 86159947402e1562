//! Typed responses for the Pokepay partner API.
//!
//! The SDK's HTTP layer parses each response body into a JSON value. This
//! crate turns that value into read-only response types via
//! [Decode](response/lib/decode/trait.Decode.html):
//!
//! ```
//! use pokepay_response::{Decode, PrivateMoney};
//!
//! let body = serde_json::json!({
//!     "id": "pm_1",
//!     "name": "Points",
//!     "unit": "pt",
//!     "organization": {"id": "org_1", "name": "Acme"},
//!     "max_balance": 100000
//! });
//! let money = PrivateMoney::decode(&body).unwrap();
//! assert_eq!(money.name().as_deref(), Some("Points"));
//! assert_eq!(money.organization().name().as_deref(), Some("Acme"));
//! ```

/// A macro that standardizes exporting our response types and their extra
/// types (ids, codes) from the crate root.
macro_rules! load_responses {
    (
        @pub use
        $( ($path:ident, $response:ident $(, $extratypes:ident)*), )*
    ) => {
        pub use response::{
            $( $path::{$response $(, $extratypes)*}, )*
        };
    };

    // entry point
    ($($load_type:tt)*) => {
        load_responses! {
            @$($load_type)*
            (organization, Organization, OrganizationID),
            (pagination, Pagination),
            (private_money, PrivateMoney, PrivateMoneyID, MoneyType, ExpirationType),
            (paginated_private_moneys, PaginatedPrivateMoneys),
        }
    };
}

pub mod error;
#[macro_use]
mod util;
pub mod response;

load_responses!{ pub use }

pub use response::lib::decode::{Decode, Record};

