use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("builder failed: {0}")]
    BuilderFailed(String),
    #[error("json record is malformed: {0}")]
    Malformed(String),
    #[error("missing `{0}` record")]
    MissingRecord(String),
    #[error("`{0}` should be a list, found {1}")]
    NotAList(String, String),
    #[error("`{0}` should be a record, found {1}")]
    NotARecord(String, String),
}

pub type Result<T> = std::result::Result<T, Error>;

