//! [`Query`] collection related to the loaded [`User`]s.

use std::{convert::Infallible, sync::Arc};

#[cfg(doc)]
use crate::command::LoadUsers;
use crate::{domain::User, read, Service};

use super::Query;

/// Queries a [`read::user::list::Page`] of the loaded [`User`]s.
///
/// Never fails: an out-of-range page is simply empty.
#[derive(Clone, Debug)]
pub struct List(pub read::user::list::Selector);

impl<Repo> Query<List> for Service<Repo> {
    type Ok = read::user::list::Page;
    type Err = Infallible;

    async fn execute(
        &self,
        List(selector): List,
    ) -> Result<Self::Ok, Self::Err> {
        let users = Arc::clone(&self.collection().read().await.users);
        Ok(selector.select(&users).map(User::clone))
    }
}

/// Queries [`read::user::Status`] of the last [`LoadUsers`] execution.
#[derive(Clone, Copy, Debug)]
pub struct Status;

impl<Repo> Query<Status> for Service<Repo> {
    type Ok = read::user::Status;
    type Err = Infallible;

    async fn execute(&self, _: Status) -> Result<Self::Ok, Self::Err> {
        Ok(self.collection().read().await.status)
    }
}
