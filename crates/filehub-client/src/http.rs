//! `reqwest`-backed implementation of [`ExplorerApi`].

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use filehub_core::config::client::ClientConfig;
use filehub_core::error::AppError;
use filehub_core::result::AppResult;
use filehub_core::types::{ApiErrorResponse, Envelope, FileId, FolderId, MetadataId};
use filehub_entity::file::{Metadata, MetadataPatch, NewMetadata};
use filehub_entity::folder::{Folder, FolderContents};
use filehub_entity::navigation::AncestryEntry;

use crate::gateway::ExplorerApi;

/// HTTP client for the FileHub REST API.
#[derive(Debug, Clone)]
pub struct HttpExplorerClient {
    /// Shared connection pool.
    http: reqwest::Client,
    /// API root, always ending with `/`.
    base_url: Url,
    /// Optional bearer token.
    api_token: Option<String>,
}

impl HttpExplorerClient {
    /// Create a client from configuration.
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            api_token: config.api_token.clone().filter(|t| !t.is_empty()),
        })
    }

    /// The API root this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a path relative to the API root.
    fn endpoint(&self, path: &str) -> AppResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| AppError::configuration(format!("Invalid endpoint '{path}': {e}")))
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "API request");
        let builder = self.http.request(method, url);
        match &self.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and fail on any non-2xx status.
    async fn send(&self, builder: RequestBuilder) -> AppResult<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().clone();
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ApiErrorResponse>(&body)
            .map(|e| e.message)
            .ok()
            .filter(|m| !m.is_empty());

        warn!(%status, %url, "API request failed");
        Err(match detail {
            Some(message) => AppError::network(format!("HTTP error! status: {status} ({message})")),
            None => AppError::network(format!("HTTP error! status: {status}")),
        })
    }

    /// GET an enveloped payload and return the bare data.
    async fn get_data<T: DeserializeOwned>(&self, url: Url) -> AppResult<T> {
        let response = self.send(self.request(Method::GET, url)).await?;
        let envelope: Envelope<T> = response.json().await?;
        Ok(envelope.into_inner())
    }
}

#[async_trait]
impl ExplorerApi for HttpExplorerClient {
    async fn fetch_folders(&self, parent: Option<FolderId>) -> AppResult<Vec<Folder>> {
        let mut url = self.endpoint("folders")?;
        if let Some(parent) = parent {
            url.query_pairs_mut()
                .append_pair("parent_id", &parent.to_string());
        }
        self.get_data(url).await
    }

    async fn fetch_folder_contents(&self, folder_id: FolderId) -> AppResult<FolderContents> {
        let url = self.endpoint(&format!("folders/{folder_id}/contents"))?;
        self.get_data(url).await
    }

    async fn fetch_ancestry(&self, folder_id: Option<FolderId>) -> AppResult<Vec<AncestryEntry>> {
        let Some(folder_id) = folder_id else {
            return Ok(Vec::new());
        };
        let url = self.endpoint(&format!("folders/{folder_id}/ancestry"))?;
        self.get_data(url).await
    }

    async fn add_metadata(&self, file_id: FileId, data: &NewMetadata) -> AppResult<Metadata> {
        let url = self.endpoint(&format!("files/{file_id}/metadata"))?;
        let response = self
            .send(self.request(Method::POST, url).json(data))
            .await?;
        Ok(response.json().await?)
    }

    async fn update_metadata(
        &self,
        metadata_id: MetadataId,
        patch: &MetadataPatch,
    ) -> AppResult<Metadata> {
        let url = self.endpoint(&format!("metadata/{metadata_id}"))?;
        let response = self
            .send(self.request(Method::PUT, url).json(patch))
            .await?;
        Ok(response.json().await?)
    }

    async fn delete_metadata(&self, metadata_id: MetadataId) -> AppResult<()> {
        let url = self.endpoint(&format!("metadata/{metadata_id}"))?;
        // 204 No Content: the body is never read.
        self.send(self.request(Method::DELETE, url)).await?;
        Ok(())
    }
}

/// Parse the configured base URL and make sure it ends with a slash so that
/// relative joins keep the `/api` prefix.
fn normalize_base_url(raw: &str) -> AppResult<Url> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| AppError::configuration(format!("Invalid base URL '{raw}': {e}")))?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
