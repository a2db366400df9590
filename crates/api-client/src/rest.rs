use crate::DataProvider;
use crate::error::ApiError;
use async_trait::async_trait;
use configuration::ApiConfig;
use core_types::{Page, Pagination, RecordId};
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;

/// Header the store uses to report the size of the whole collection.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// A `DataProvider` that talks to a "simple REST" store:
///
/// - `GET {base}/{resource}?_start={s}&_end={e}` for a page, with the
///   collection size in `X-Total-Count`;
/// - `GET {base}/{resource}/{id}` for a single record.
///
/// There is no caching and no retry. A request either completes within the
/// configured timeout or fails with `ApiError::Network`.
#[derive(Clone, Debug)]
pub struct RestDataProvider {
    client: reqwest::Client,
    base_url: Url,
}

impl RestDataProvider {
    pub fn new(api_config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(api_config.base_url.trim())
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", api_config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(api_config.base_url.clone()));
        }

        let client = reqwest::Client::builder()
            .timeout(api_config.timeout())
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends the resource (and optionally the id) as path segments, so an
    /// id is always percent-encoded and a base path like `/api` is kept.
    fn resource_url(&self, resource: &str, id: Option<&RecordId>) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().push(resource);
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        Ok(url)
    }
}

/// Turns any non-success status into an error, keeping the body for context.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to decode error response".to_string());
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::MalformedResponse(e.to_string()))
}

fn total_count(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(TOTAL_COUNT_HEADER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

#[async_trait]
impl DataProvider for RestDataProvider {
    async fn get_list<T>(&self, resource: &str, pagination: &Pagination) -> Result<Page<T>, ApiError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let url = self.resource_url(resource, None)?;
        tracing::debug!(%url, resource, page = pagination.current, page_size = pagination.page_size, "Fetching page.");

        let response = self
            .client
            .get(url)
            .query(&[("_start", pagination.start()), ("_end", pagination.end())])
            .send()
            .await?;
        let response = check_status(response).await?;
        let total = total_count(&response);
        let text = response.text().await?;

        let data: Vec<T> = decode(&text)?;
        let total = total.unwrap_or(data.len() as u64);
        tracing::debug!(resource, records = data.len(), total, "Page received.");

        Ok(Page::new(data, total))
    }

    async fn get_one<T>(&self, resource: &str, id: &RecordId) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let url = self.resource_url(resource, Some(id))?;
        tracing::debug!(%url, resource, %id, "Fetching record.");

        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(resource, %id, "Record not found.");
            return Err(ApiError::NotFound {
                resource: resource.to_string(),
                id: id.clone(),
            });
        }
        let response = check_status(response).await?;
        let text = response.text().await?;

        decode(&text)
    }
}
