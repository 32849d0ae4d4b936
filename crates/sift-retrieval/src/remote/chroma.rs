//! Chroma HTTP client.

use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::{RequestBuilder, Response, StatusCode, Url};
use sift_core::config::RemoteConfig;
use sift_core::errors::RemoteError;
use sift_core::models::ScoredPassage;
use sift_core::traits::IRemoteStore;
use tracing::debug;

use super::protocol::{CollectionInfo, QueryRequest, QueryResponse};

const AUTH_HEADER: &str = "X-Chroma-Token";
/// Longest error body kept in a [`RemoteError::HttpStatus`].
const MAX_ERROR_BODY: usize = 512;

/// Remote store backed by a Chroma server.
///
/// The collection id is resolved by name on every search, so a collection
/// recreated on the server is picked up without a restart.
#[derive(Clone)]
pub struct ChromaStore {
    client: reqwest::Client,
    base_url: Url,
    collection: String,
    auth_token: Option<String>,
    timeout: Duration,
}

impl ChromaStore {
    /// Build a client for `config`. Returns `Ok(None)` when the remote path
    /// is disabled.
    pub fn from_config(config: &RemoteConfig) -> Result<Option<Self>, RemoteError> {
        let Some(base_url) = config.base_url() else {
            return Ok(None);
        };
        let base_url = Url::parse(&base_url).map_err(|e| RemoteError::Connection {
            reason: format!("invalid remote url {base_url}: {e}"),
        })?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .gzip(true)
            .build()
            .map_err(|e| RemoteError::Connection {
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Some(Self {
            client,
            base_url,
            collection: config.collection.clone(),
            auth_token: config.auth_token.clone(),
            timeout: config.timeout(),
        }))
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    async fn query(&self, query: &str, k: usize) -> Result<Vec<ScoredPassage>, RemoteError> {
        let collection_id = self.resolve_collection().await?;
        let url = self.endpoint(&["api", "v1", "collections", &collection_id, "query"]);
        let response = self
            .authorized(self.client.post(url))
            .json(&QueryRequest::new(query, k))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let response = self.check_status(response).await?;
        let body: QueryResponse = response.json().await.map_err(|e| self.decode_error(e))?;

        let mut passages = body.into_passages();
        passages.truncate(k);
        debug!(
            collection = %self.collection,
            hits = passages.len(),
            "remote query complete"
        );
        Ok(passages)
    }

    async fn resolve_collection(&self) -> Result<String, RemoteError> {
        let url = self.endpoint(&["api", "v1", "collections", &self.collection]);
        let response = self
            .authorized(self.client.get(url))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let response = self.check_status(response).await?;
        let info: CollectionInfo = response.json().await.map_err(|e| self.decode_error(e))?;
        Ok(info.id)
    }

    /// Append `segments` to the base url, percent-encoding each one. A path
    /// prefix on the base url is kept.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => request.header(AUTH_HEADER, token),
            None => request,
        }
    }

    async fn check_status(&self, response: Response) -> Result<Response, RemoteError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(RemoteError::Unauthorized {
                status: status.as_u16(),
            }),
            StatusCode::NOT_FOUND => Err(RemoteError::CollectionNotFound {
                name: self.collection.clone(),
            }),
            _ => {
                let mut body = response.text().await.unwrap_or_default();
                if body.len() > MAX_ERROR_BODY {
                    let cut = (0..=MAX_ERROR_BODY)
                        .rev()
                        .find(|&i| body.is_char_boundary(i))
                        .unwrap_or(0);
                    body.truncate(cut);
                }
                Err(RemoteError::HttpStatus {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> RemoteError {
        if e.is_timeout() {
            RemoteError::Timeout {
                elapsed_ms: self.timeout.as_millis() as u64,
            }
        } else if e.is_decode() {
            self.decode_error(e)
        } else {
            RemoteError::Connection {
                reason: e.to_string(),
            }
        }
    }

    fn decode_error(&self, e: reqwest::Error) -> RemoteError {
        if e.is_timeout() {
            return RemoteError::Timeout {
                elapsed_ms: self.timeout.as_millis() as u64,
            };
        }
        RemoteError::MalformedResponse {
            reason: e.to_string(),
        }
    }
}

impl std::fmt::Debug for ChromaStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChromaStore")
            .field("base_url", &self.base_url.as_str())
            .field("collection", &self.collection)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl IRemoteStore for ChromaStore {
    fn name(&self) -> &str {
        "chroma"
    }

    fn search<'a>(
        &'a self,
        query: &'a str,
        k: usize,
    ) -> BoxFuture<'a, Result<Vec<ScoredPassage>, RemoteError>> {
        self.query(query, k).boxed()
    }
}
