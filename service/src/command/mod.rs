//! [`Command`] definition.

pub mod load_users;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::load_users::LoadUsers;
