use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
};

use axum::{
    Extension,
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tower_http::{services::ServeDir, trace::TraceLayer};
use url::Url;

use crate::{
    dispatch::Dispatcher,
    error::Error,
    route::app_routes,
    runtime_config::{
        ConfigProvider, ConfigReader, ConfigSnapshot, Environment, FileFetcher, HttpFetcher,
    },
};

pub mod content;
pub mod dispatch;
pub mod document;
pub mod error;
pub mod focus;
pub mod navigator;
pub mod route;
pub mod runtime_config;
pub mod view;

/// Static server routes, outside of the page table
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::IntoStaticStr,
)]
pub enum ServerRoute {
    #[serde(rename = "/assets")]
    #[strum(serialize = "/assets")]
    Assets,
    #[serde(rename = "/healthcheck")]
    #[strum(serialize = "/healthcheck")]
    HealthCheck,
    #[serde(rename = "/public")]
    #[strum(serialize = "/public")]
    Public,
}

impl ServerRoute {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone)]
pub struct ServerState {
    pub dispatcher: Arc<Dispatcher>,
}

impl ServerState {
    pub fn new() -> Self {
        ServerState {
            dispatcher: Arc::new(Dispatcher::new(&app_routes())),
        }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}

/// page routes without a config provider installed
fn page_routes(state: ServerState, assets_path: &Path, app_root: &Path) -> axum::Router {
    axum::Router::new()
        .route(ServerRoute::HealthCheck.as_str(), get(health_check))
        .nest_service(ServerRoute::Assets.as_str(), ServeDir::new(assets_path))
        .nest_service(ServerRoute::Public.as_str(), ServeDir::new(app_root.join("public")))
        .fallback(page)
        .with_state(state)
}

pub fn build_router(
    state: ServerState,
    config: ConfigReader,
    assets_path: &Path,
    app_root: &Path,
) -> axum::Router {
    page_routes(state, assets_path, app_root)
        .layer(Extension(config))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!("request", method = %request.method(), uri = %request.uri())
            }),
        )
}

async fn page(
    State(state): State<ServerState>,
    ConfigSnapshot(config): ConfigSnapshot,
    uri: Uri,
) -> Result<Response, Error> {
    let path = uri.path();
    let resolved = state.dispatcher.dispatch(path);
    let html = view::render(&resolved, path, state.dispatcher.nav(), &config)?;

    let status = if resolved.is_found() {
        StatusCode::OK
    } else {
        tracing::debug!(%path, "no route matched");
        StatusCode::NOT_FOUND
    };

    Ok((status, Html(html)).into_response())
}

async fn health_check() -> &'static str {
    "SYSTEM STATUS: ONLINE\n"
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// the port to bind the server to
    pub port: u16,
    /// log level for the application
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// selects which runtime config file is loaded
    #[serde(default)]
    pub environment: Environment,
    /// directory holding `public/`
    #[serde(default = "default_app_root")]
    pub app_root: PathBuf,
    /// fetch the runtime config over HTTP from here instead of `app_root`
    #[serde(default)]
    pub config_origin: Option<Url>,
}

impl Config {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| Error::FileRead {
                path: path.to_path_buf(),
                source,
            })?;

        toml::from_str(&content).map_err(|source| Error::DeserializeTomlFile {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn mount_provider(&self) -> Result<ConfigProvider, Error> {
        let provider = match &self.config_origin {
            Some(origin) => {
                let client = reqwest::Client::builder()
                    .build()
                    .map_err(|source| Error::HttpClient { source })?;
                ConfigProvider::mount(HttpFetcher::new(client, origin.clone()), self.environment)
            }
            None => ConfigProvider::mount(FileFetcher::new(&self.app_root), self.environment),
        };

        Ok(provider)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_app_root() -> PathBuf {
    PathBuf::from(".")
}

pub async fn run(config: Config, assets_path: &Path) -> Result<(), Error> {
    let provider = config.mount_provider()?;

    let app = build_router(
        ServerState::new(),
        provider.reader(),
        assets_path,
        &config.app_root,
    );

    let address: SocketAddr = format!("0.0.0.0:{}", config.port)
        .parse()
        .map_err(|source| Error::InvalidAddress { source })?;

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|source| Error::Bind { address, source })?;

    tracing::info!(
        %address,
        environment = %config.environment,
        "server starting",
    );

    let result = axum::serve(listener, app)
        .await
        .map_err(|source| Error::ServerStart { source });

    provider.shutdown();

    result
}
