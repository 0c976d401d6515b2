//! Service contains the business logic of the dashboard: the [`User`]s
//! collection loaded once from a repository and the query pipeline over it.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

use std::sync::Arc;

use common::RowsPerPage;
use tokio::sync::RwLock;
// Used by `define_kind!` expansions.
use strum as _;

#[cfg(doc)]
use self::{domain::User, infra::Repository};
use self::read::user::{list, Collection};

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// Number of [`User`]s shown on a single page by default.
    pub rows_per_page: RowsPerPage,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Repo> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Repository`] of this [`Service`].
    repository: Repo,

    /// [`User`]s [`Collection`] loaded from the [`Repository`].
    collection: Arc<RwLock<Collection>>,
}

impl<Repo> Service<Repo> {
    /// Creates a new [`Service`] with an empty [`Collection`].
    #[must_use]
    pub fn new(config: Config, repository: Repo) -> Self {
        Self {
            config,
            repository,
            collection: Arc::default(),
        }
    }

    /// Returns [`Repository`] of this [`Service`].
    #[must_use]
    pub fn repository(&self) -> &Repo {
        &self.repository
    }

    /// Returns the initial [`list::Selector`] according to the [`Config`].
    #[must_use]
    pub fn selector(&self) -> list::Selector {
        list::Selector {
            arguments: list::Arguments::default()
                .with_size(self.config.rows_per_page),
            ..list::Selector::default()
        }
    }

    /// Returns the [`Collection`] of this [`Service`].
    pub(crate) fn collection(&self) -> &RwLock<Collection> {
        &self.collection
    }
}
