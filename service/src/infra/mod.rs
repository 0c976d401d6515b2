//! Infrastructure layer.

pub mod repository;

#[cfg(feature = "http")]
pub use self::repository::{http, Http};
pub use self::repository::{memory, Memory, Repository};
