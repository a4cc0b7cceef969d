//! Error types.

use crate::record::ValidationError;
use std::net::IpAddr;

/// Error enumerates the possible Record Crab error states.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when a record submitted to the [`/dns/` API endpoint][crate::api] has a field
    /// that fails its constraint: a malformed apex, an out of range integer, an unknown
    /// enumerated keyword, bad base64, and so on.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Returned when the [`Config::api_bind_addr`][`crate::config::Config::api_bind_addr`] is
    /// not a loopback address, or an address within a private network space. The
    /// [Record Crab HTTP API][crate::api] performs no authentication and is always intended
    /// to be used on private networks.
    #[error("API bind address ({0}) must be a loopback or private IP")]
    InsecureAPIBind(IpAddr),

    /// Returned when a generic IO error occurs.
    #[error("an IO error occurred")]
    IO(#[from] std::io::Error),

    /// Returned when processing JSON from disk (e.g. to
    /// [trying to load a `Config`][crate::config::Config::try_from_file], or to
    /// [trying to load a `FileRecordStore`][crate::store::file::FileRecordStore::try_from_file]
    /// fails due to invalid JSON content.
    #[error("invalid JSON")]
    InvalidJSON(#[from] serde_json::Error),
}
