//! [`Repository`]-related implementations.

#[cfg(feature = "http")]
pub mod http;
pub mod memory;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "http")]
pub use self::http::Http;
pub use self::memory::Memory;

/// Source of [`User`]s.
///
/// [`User`]: crate::domain::User
pub use common::Handler as Repository;

/// [`Repository`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "http")]
    /// [`Http`] error.
    #[display("HTTP request failed: {_0}")]
    Http(http::Error),

    /// Payload is not a well-formed list of [`User`]s.
    ///
    /// [`User`]: crate::domain::User
    #[display("malformed `User`s payload: {_0}")]
    Decode(serde_json::Error),
}
