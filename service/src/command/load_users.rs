//! [`Command`] for loading [`User`]s from a [`Repository`].

use common::operations::{By, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::User,
    infra::{repository, Repository},
    read::user::Status,
    Service,
};

use super::Command;

/// [`Command`] for loading [`User`]s from a [`Repository`] into the
/// [`Service`].
///
/// On failure the previously loaded [`User`]s are kept (none on the first
/// load) and the collection is marked as [`Status::Failed`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LoadUsers;

impl<Repo> Command<LoadUsers> for Service<Repo>
where
    Repo: Repository<
        Select<By<Vec<User>, ()>>,
        Ok = Vec<User>,
        Err = Traced<repository::Error>,
    >,
{
    /// Number of loaded [`User`]s.
    type Ok = usize;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, _: LoadUsers) -> Result<Self::Ok, Self::Err> {
        self.collection().write().await.status = Status::Loading;

        let loaded = self.repository().execute(Select(By::all())).await;

        let mut collection = self.collection().write().await;
        match loaded {
            Ok(users) => {
                let count = users.len();
                collection.replace(users);
                log::info!(count, "`User`s loaded");
                Ok(count)
            }
            Err(e) => {
                collection.status = Status::Failed;
                log::warn!(
                    kept = collection.users.len(),
                    "failed to load `User`s, keeping previous ones: {e}",
                );
                Err(e).map_err(tracerr::map_from_and_wrap!(=> ExecutionError))
            }
        }
    }
}

/// Error of [`LoadUsers`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Repository`] error.
    #[display("`Repository` operation failed: {_0}")]
    Repository(repository::Error),
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Select};
    use tracerr::Traced;

    use crate::{
        domain::User,
        infra::{repository, Memory, Repository},
        query::{self, Query as _},
        read::user::{list::spec::users, Status},
        Config, Service,
    };

    use super::{ExecutionError, LoadUsers};

    /// [`Repository`] serving [`User`]s once and failing afterwards.
    #[derive(Debug, Default)]
    struct Flaky {
        calls: std::sync::atomic::AtomicUsize,
    }

    impl Repository<Select<By<Vec<User>, ()>>> for Flaky {
        type Ok = Vec<User>;
        type Err = Traced<repository::Error>;

        async fn execute(
            &self,
            _: Select<By<Vec<User>, ()>>,
        ) -> Result<Self::Ok, Self::Err> {
            let call = self
                .calls
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            if call == 0 {
                Ok(users())
            } else {
                Err(tracerr::new!(repository::Error::Decode(
                    serde_json::from_str::<Vec<User>>("<html>").unwrap_err(),
                )))
            }
        }
    }

    #[tokio::test]
    async fn starts_empty_and_loading() {
        let service = Service::new(Config::default(), Memory::default());

        let status = service.execute(query::users::Status).await.unwrap();
        let page = service
            .execute(query::users::List(service.selector()))
            .await
            .unwrap();

        assert_eq!(status, Status::Loading);
        assert!(page.nodes.is_empty());
        assert_eq!(page.total_count, 0);
    }

    #[tokio::test]
    async fn loads_users() {
        let service = Service::new(Config::default(), Memory::new(users()));

        let count = service.execute(LoadUsers).await.unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            service.execute(query::users::Status).await.unwrap(),
            Status::Ready,
        );
    }

    #[tokio::test]
    async fn keeps_previous_users_on_failure() {
        let service = Service::new(Config::default(), Flaky::default());

        assert_eq!(service.execute(LoadUsers).await.unwrap(), 2);

        let err = service.execute(LoadUsers).await.unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::Repository(repository::Error::Decode(_)),
        ));

        let page = service
            .execute(query::users::List(service.selector()))
            .await
            .unwrap();
        assert_eq!(page.total_count, 2);
        assert_eq!(
            service.execute(query::users::Status).await.unwrap(),
            Status::Failed,
        );
    }

    #[tokio::test]
    async fn fails_first_load_with_empty_collection() {
        let service = Service::new(Config::default(), Flaky::default());
        // Exhaust the only successful call without loading it.
        drop(service.repository().execute(Select(By::all())).await);

        assert!(service.execute(LoadUsers).await.is_err());

        let page = service
            .execute(query::users::List(service.selector()))
            .await
            .unwrap();
        assert!(page.nodes.is_empty());
        assert_eq!(
            service.execute(query::users::Status).await.unwrap(),
            Status::Failed,
        );
    }
}
