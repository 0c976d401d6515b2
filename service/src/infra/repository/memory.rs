//! [`Memory`] [`Repository`] definitions.

use std::sync::Arc;

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::User,
    infra::repository::{self, Repository},
};

/// [`Repository`] serving a fixed in-process list of [`User`]s.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    /// [`User`]s to serve.
    users: Arc<[User]>,
}

impl Memory {
    /// Creates a new [`Memory`] [`Repository`] serving the provided
    /// [`User`]s.
    #[must_use]
    pub fn new(users: impl Into<Arc<[User]>>) -> Self {
        Self {
            users: users.into(),
        }
    }
}

impl Repository<Select<By<Vec<User>, ()>>> for Memory {
    type Ok = Vec<User>;
    type Err = Traced<repository::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<User>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.users.to_vec())
    }
}
