//! [`User`] read model definition.

pub mod list;

use std::sync::Arc;

use common::define_kind;

use crate::domain::User;
#[cfg(doc)]
use crate::infra::Repository;

/// In-memory collection of [`User`]s loaded from a [`Repository`].
#[derive(Clone, Debug, Default)]
pub struct Collection {
    /// Loaded [`User`]s, in the order received.
    pub users: Arc<[User]>,

    /// [`Status`] of the last load.
    pub status: Status,
}

impl Collection {
    /// Replaces the [`User`]s of this [`Collection`] with freshly loaded
    /// ones, marking it as [`Status::Ready`].
    pub fn replace(&mut self, users: Vec<User>) {
        self.users = users.into();
        self.status = Status::Ready;
    }
}

define_kind! {
    #[doc = "Status of loading a [`Collection`]."]
    enum Status {
        #[doc = "[`User`]s are being loaded."]
        #[default]
        Loading = "loading",

        #[doc = "[`User`]s have been loaded successfully."]
        Ready = "ready",

        #[doc = "Last load has failed, so [`User`]s are left as they were \
                 before it (empty on the first load)."]
        Failed = "failed",
    }
}
