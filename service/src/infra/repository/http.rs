//! [`Http`] [`Repository`] definitions.

use std::{str::FromStr, time};

use common::operations::{By, Select};
use derive_more::{Display, Error as StdError, From};
use reqwest::{header, Client, StatusCode};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::User,
    infra::repository::{self, Repository},
};

pub use reqwest::Url;

/// Error of parsing an [`Url`].
pub type UrlParseError = <Url as FromStr>::Err;

/// [`Http`] [`Repository`] configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// URL of the endpoint listing [`User`]s.
    pub endpoint: Url,

    /// Timeout of the whole request.
    pub timeout: time::Duration,

    /// `User-Agent` header value to send.
    pub user_agent: String,
}

/// [`Repository`] reading [`User`]s with a single HTTP `GET` request.
///
/// Requests are never retried.
#[derive(Clone, Debug)]
pub struct Http {
    /// Underlying HTTP client.
    client: Client,

    /// URL of the endpoint listing [`User`]s.
    endpoint: Url,
}

impl Http {
    /// Creates a new [`Http`] [`Repository`] out of the provided [`Config`].
    ///
    /// # Errors
    ///
    /// Errors if the underlying HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, Traced<Error>> {
        let Config {
            endpoint,
            timeout,
            user_agent,
        } = config;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| tracerr::new!(Error::Transport(e)))?;

        Ok(Self { client, endpoint })
    }

    /// Returns URL of the endpoint this [`Http`] [`Repository`] reads.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Repository<Select<By<Vec<User>, ()>>> for Http {
    type Ok = Vec<User>;
    type Err = Traced<repository::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<User>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        log::debug!(endpoint = %self.endpoint, "requesting `User`s");

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            log::warn!(
                endpoint = %self.endpoint,
                %status,
                "`User`s endpoint responded with non-success status",
            );
            return Err(tracerr::new!(repository::Error::from(Error::Status(
                status
            ))));
        }

        let body = response
            .bytes()
            .await
            .map_err(transport_error)?;

        serde_json::from_slice(&body)
            .map_err(|e| tracerr::new!(repository::Error::Decode(e)))
    }
}

/// Wraps the provided [`reqwest::Error`] into a [`repository::Error`].
fn transport_error(e: reqwest::Error) -> Traced<repository::Error> {
    tracerr::new!(repository::Error::from(Error::Transport(e)))
}

/// [`Http`] [`Repository`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Request could not be performed or its body could not be read.
    #[display("transport failed: {_0}")]
    Transport(reqwest::Error),

    /// Endpoint responded with a non-success status.
    #[display("unexpected response status: {_0}")]
    #[from(ignore)]
    Status(#[error(not(source))] StatusCode),
}
