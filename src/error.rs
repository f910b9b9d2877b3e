use std::path::PathBuf;

use axum::{http::StatusCode, response::IntoResponse};
use tracing_subscriber::filter::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to bind to `{address}`: {source}")]
    Bind {
        address: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("runtime config read outside of a config provider")]
    ConfigOutsideProvider,

    #[error("unable to deserialize TOML file `{path}`: {source}")]
    DeserializeTomlFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("unable to parse log level")]
    EnvLevel { source: ParseError },

    #[error("unable to read file `{path}`: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unable to build HTTP client: {source}")]
    HttpClient { source: reqwest::Error },

    #[error("unable to parse address")]
    InvalidAddress { source: std::net::AddrParseError },

    #[error("unable to start server: {source}")]
    ServerStart { source: std::io::Error },

    #[error("unable to set global tracing subscriber")]
    SetGlobalSubscriber {
        source: tracing::subscriber::SetGlobalDefaultError,
    },

    #[error("unable to render HTML template: {source}")]
    TemplateRender {
        #[from]
        source: askama::Error,
    },
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = %self, "request failed");
        let status = match self {
            Error::Bind { .. }
            | Error::ConfigOutsideProvider
            | Error::DeserializeTomlFile { .. }
            | Error::EnvLevel { .. }
            | Error::FileRead { .. }
            | Error::HttpClient { .. }
            | Error::InvalidAddress { .. }
            | Error::ServerStart { .. }
            | Error::SetGlobalSubscriber { .. }
            | Error::TemplateRender { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}
