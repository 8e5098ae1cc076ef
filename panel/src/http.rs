use std::time::Duration;

use reqwest::{header::CACHE_CONTROL, Client, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use panel_common::{Command, PanelConfig};

/// Response envelope that never fails on an HTTP error status.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResult<T> {
    pub ok: bool,
    pub status: u16,
    pub body: T,
}

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("response from {url} is not the expected json: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid url {0}")]
    Url(String),
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base: Url,
}

impl HttpClient {
    pub fn new(config: &PanelConfig) -> Result<Self, HttpError> {
        let base =
            Url::parse(&config.base_url).map_err(|_| HttpError::Url(config.base_url.clone()))?;
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|source| HttpError::Transport {
                url: config.base_url.clone(),
                source,
            })?;
        Ok(Self { client, base })
    }

    pub fn url(&self, path: &str) -> Result<Url, HttpError> {
        self.base
            .join(path)
            .map_err(|_| HttpError::Url(format!("{}{path}", self.base)))
    }

    /// Endpoint URL for `command` with its parameters in the query string.
    pub fn command_url(&self, command: &Command) -> Result<Url, HttpError> {
        let mut url = self.url(command.endpoint().path())?;
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in command.query_pairs() {
                query.append_pair(key, &value);
            }
        }
        Ok(url)
    }

    pub async fn get_text(&self, url: Url) -> Result<HttpResult<String>, HttpError> {
        let (status, body) = self.fetch(url).await?;
        Ok(HttpResult {
            ok: status.is_success(),
            status: status.as_u16(),
            body,
        })
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
    ) -> Result<HttpResult<T>, HttpError> {
        let url_text = url.to_string();
        let (status, body) = self.fetch(url).await?;
        let body = serde_json::from_str(&body).map_err(|source| HttpError::Decode {
            url: url_text,
            source,
        })?;
        Ok(HttpResult {
            ok: status.is_success(),
            status: status.as_u16(),
            body,
        })
    }

    async fn fetch(&self, url: Url) -> Result<(reqwest::StatusCode, String), HttpError> {
        debug!("GET {url}");
        let url_text = url.to_string();
        let transport = |source| HttpError::Transport {
            url: url_text.clone(),
            source,
        };

        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        Ok((status, body))
    }
}
