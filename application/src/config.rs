//! [`Config`]-related definitions.

use std::time;

use common::RowsPerPage;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Users repository configuration.
    pub repository: Repository,

    /// View configuration.
    pub view: View,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Users repository configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Repository {
    /// URL of the endpoint listing users.
    #[default("https://jsonplaceholder.typicode.com/users".to_owned())]
    pub endpoint: String,

    /// Timeout of the request to the endpoint.
    #[default(time::Duration::from_secs(30))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,

    /// `User-Agent` header value to send.
    #[default(
        concat!("user-dashboard/", env!("CARGO_PKG_VERSION")).to_owned()
    )]
    pub user_agent: String,
}

impl TryFrom<Repository> for service::infra::http::Config {
    type Error = service::infra::http::UrlParseError;

    fn try_from(value: Repository) -> Result<Self, Self::Error> {
        let Repository {
            endpoint,
            timeout,
            user_agent,
        } = value;

        Ok(Self {
            endpoint: endpoint.parse()?,
            timeout,
            user_agent,
        })
    }
}

/// View configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct View {
    /// Number of users on a single page by default.
    pub rows_per_page: RowsPerPage,

    /// Terminal width (in columns) below which users are shown as cards
    /// instead of a table.
    #[default(100)]
    pub breakpoint: usize,

    /// Terminal width (in columns) assumed when it cannot be detected.
    #[default(120)]
    pub width: usize,
}

impl From<View> for service::Config {
    fn from(value: View) -> Self {
        Self {
            rows_per_page: value.rows_per_page,
        }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    Info,

    /// Designates hazardous situations.
    #[default]
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::time;

    use common::RowsPerPage;
    use config::ConfigError;

    use super::{Config, LogLevel, View};

    #[test]
    fn defaults_without_file() {
        let config = Config::new("definitely-missing-config").unwrap();

        assert_eq!(
            config.repository.endpoint,
            "https://jsonplaceholder.typicode.com/users",
        );
        assert_eq!(config.repository.timeout, time::Duration::from_secs(30));
        assert!(config.repository.user_agent.starts_with("user-dashboard/"));
        assert_eq!(config.view.rows_per_page, RowsPerPage::Ten);
        assert_eq!(config.view.breakpoint, 100);
        assert!(matches!(config.log.level, LogLevel::Warn));
    }

    #[test]
    fn converts_repository_config() {
        let config = Config::default();

        let http = service::infra::http::Config::try_from(config.repository)
            .unwrap();
        assert_eq!(
            http.endpoint.host_str(),
            Some("jsonplaceholder.typicode.com"),
        );

        let mut invalid = Config::default().repository;
        invalid.endpoint = "not a url".to_owned();
        assert!(service::infra::http::Config::try_from(invalid).is_err());
    }

    fn view_with(key: &str, value: i64) -> Result<View, ConfigError> {
        config::Config::builder()
            .set_override(key, value)?
            .build()?
            .try_deserialize()
    }

    #[test]
    fn deserializes_view() {
        let view = view_with("rows_per_page", 25).unwrap();

        assert_eq!(view.rows_per_page, RowsPerPage::TwentyFive);
        assert_eq!(view.width, 120);

        assert!(view_with("rows_per_page", 20).is_err());
    }
}
