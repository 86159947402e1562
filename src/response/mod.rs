#[macro_use]
pub mod lib;

// nested records first, then the types that hold them.
pub mod organization;
pub mod pagination;
pub mod private_money;
pub mod paginated_private_moneys;

