//! Runtime configuration fetched once at startup.
//!
//! [`ConfigProvider::mount`] starts a single fetch in the background. Until
//! it succeeds every [`ConfigReader`] sees an empty [`RuntimeConfig`]. A
//! failed fetch is logged and the empty snapshot stays in place.

use std::{
    future::Future,
    path::{Path, PathBuf},
    sync::Arc,
};

use axum::{extract::FromRequestParts, http::Extensions};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::{sync::watch, task::JoinHandle};
use tracing::Instrument;
use url::Url;

use crate::error::Error;

/// where the config lives for production-like environments
pub const CONFIG_LOCATION: &str = "./public/config.json";

/// where the config lives for development and test
pub const LOCAL_CONFIG_LOCATION: &str = "./public/config-local.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(
        rename = "REACT_APP_BASE_URL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub base_url: Option<String>,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Development,
    Test,
}

impl Environment {
    pub fn config_location(&self) -> &'static str {
        match self {
            Environment::Production => CONFIG_LOCATION,
            Environment::Development | Environment::Test => LOCAL_CONFIG_LOCATION,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unable to read config file `{path}`: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unable to resolve config location `{location}`: {source}")]
    Location {
        location: String,
        source: url::ParseError,
    },

    #[error("request for `{url}` failed: {source}")]
    Request { url: Url, source: reqwest::Error },

    #[error("HTTP error! status: {status} for `{url}`")]
    Status {
        url: Url,
        status: reqwest::StatusCode,
    },

    #[error("config at `{location}` is not valid JSON: {source}")]
    Parse {
        location: String,
        source: serde_json::Error,
    },
}

/// somewhere a [`RuntimeConfig`] can be loaded from
pub trait ConfigFetcher: Send + Sync + 'static {
    fn fetch(
        &self,
        location: &str,
    ) -> impl Future<Output = Result<RuntimeConfig, ConfigError>> + Send;
}

fn parse(location: &str, body: &str) -> Result<RuntimeConfig, ConfigError> {
    serde_json::from_str(body).map_err(|source| ConfigError::Parse {
        location: location.to_string(),
        source,
    })
}

/// loads the config from disk, relative to the application root
#[derive(Debug, Clone)]
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    pub fn new(root: impl AsRef<Path>) -> Self {
        FileFetcher {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigFetcher for FileFetcher {
    async fn fetch(&self, location: &str) -> Result<RuntimeConfig, ConfigError> {
        let path = self.root.join(location.trim_start_matches("./"));
        let body = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ConfigError::Read { path, source })?;

        parse(location, &body)
    }
}

/// loads the config over HTTP, relative to a base URL
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    pub fn new(client: Client, base: Url) -> Self {
        HttpFetcher { client, base }
    }
}

impl ConfigFetcher for HttpFetcher {
    async fn fetch(&self, location: &str) -> Result<RuntimeConfig, ConfigError> {
        let url = self
            .base
            .join(location)
            .map_err(|source| ConfigError::Location {
                location: location.to_string(),
                source,
            })?;

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ConfigError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConfigError::Status { url, status });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ConfigError::Request {
                url: url.clone(),
                source,
            })?;

        parse(url.as_str(), &body)
    }
}

/// Read access to the current config snapshot.
#[derive(Debug, Clone)]
pub struct ConfigReader(watch::Receiver<Arc<RuntimeConfig>>);

impl ConfigReader {
    pub fn snapshot(&self) -> Arc<RuntimeConfig> {
        self.0.borrow().clone()
    }

    /// wait for the snapshot to be replaced.
    /// returns false once no further change can happen.
    pub async fn changed(&mut self) -> bool {
        self.0.changed().await.is_ok()
    }
}

/// Owns the single config fetch for the lifetime of the application.
///
/// Dropping the provider aborts a fetch that has not finished yet.
#[derive(Debug)]
pub struct ConfigProvider {
    receiver: watch::Receiver<Arc<RuntimeConfig>>,
    task: Option<JoinHandle<()>>,
}

impl ConfigProvider {
    pub fn mount<F: ConfigFetcher>(fetcher: F, environment: Environment) -> Self {
        let (sender, receiver) = watch::channel(Arc::new(RuntimeConfig::default()));
        let location = environment.config_location();

        tracing::info!(%environment, location, "loading runtime configuration");

        let task = tokio::spawn(async move {
            match fetcher.fetch(location).await {
                Ok(config) => {
                    tracing::info!(?config, location, "loaded runtime configuration");
                    sender.send_replace(Arc::new(config));
                }
                Err(error) => {
                    tracing::error!(%error, location, "unable to load runtime configuration");
                }
            }
        }
        .in_current_span());

        ConfigProvider {
            receiver,
            task: Some(task),
        }
    }

    pub fn reader(&self) -> ConfigReader {
        ConfigReader(self.receiver.clone())
    }

    /// wait for the fetch to finish, successfully or not
    pub async fn settled(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };
        if let Err(error) = task.await {
            tracing::warn!(%error, "runtime configuration task did not complete");
        }
    }

    pub fn shutdown(mut self) {
        self.abort();
    }

    fn abort(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for ConfigProvider {
    fn drop(&mut self) {
        self.abort();
    }
}

/// Read the config installed in `extensions`.
///
/// Fails when no provider is installed rather than handing back a default.
pub fn use_config(extensions: &Extensions) -> Result<Arc<RuntimeConfig>, Error> {
    extensions
        .get::<ConfigReader>()
        .map(ConfigReader::snapshot)
        .ok_or(Error::ConfigOutsideProvider)
}

/// extractor for the current config snapshot
#[derive(Debug, Clone)]
pub struct ConfigSnapshot(pub Arc<RuntimeConfig>);

impl<S> FromRequestParts<S> for ConfigSnapshot
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        use_config(&parts.extensions).map(ConfigSnapshot)
    }
}
