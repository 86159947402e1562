#[macro_use]
pub mod response_id;
#[macro_use]
pub mod response_code;
pub mod decode;
pub(crate) mod field;

