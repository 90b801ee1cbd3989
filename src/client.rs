//! Resource client: one request per operation against the records backend.
//!
//! The client never retries and never touches view state. A non-2xx answer
//! becomes [`ClientError::Rejected`] carrying the server's `error` message; a
//! transport failure becomes [`ClientError::Connectivity`].

use reqwest::{Response, StatusCode};
use rollcall_cache::{MemoryCache, invalidate, keys};
use rollcall_config::ApiConfig;
use rollcall_core::{ApiErrorBody, ClientError};
use rollcall_models::{Collection, Record};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument, warn};

/// List, create, and delete against named collections.
///
/// Implemented by [`HttpClient`]; the form controller and list views are
/// generic over it.
#[allow(async_fn_in_trait)]
pub trait ResourceApi {
    async fn list<R>(&self, collection: Collection) -> Result<Vec<R>, ClientError>
    where
        R: Record;

    async fn create<P, R>(&self, collection: Collection, payload: &P) -> Result<R, ClientError>
    where
        P: Serialize + Sync,
        R: Record;

    async fn delete(&self, collection: Collection, id: i64) -> Result<(), ClientError>;
}

/// HTTP implementation of [`ResourceApi`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
    cache: Option<MemoryCache>,
}

impl HttpClient {
    /// Builds a client for the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidRequest` if the base URL does not parse or
    /// the HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        reqwest::Url::parse(&config.base_url).map_err(|e| {
            ClientError::invalid_request(format!("invalid base url `{}`: {}", config.base_url, e))
        })?;

        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::invalid_request)?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            cache: None,
        })
    }

    /// Shares fetched lists through `cache`, invalidating a collection after
    /// each successful create or delete in it.
    pub fn with_cache(mut self, cache: MemoryCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> Option<&MemoryCache> {
        self.cache.as_ref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl ResourceApi for HttpClient {
    #[instrument(skip(self), fields(collection = %collection))]
    async fn list<R>(&self, collection: Collection) -> Result<Vec<R>, ClientError>
    where
        R: Record,
    {
        let key = keys::list(collection);
        if let Some(cache) = &self.cache {
            if let Some(records) = cache.get::<Vec<R>>(&key).await {
                return Ok(records);
            }
        }

        let url = self.url(&collection.path());
        debug!(url = %url, "GET");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| connectivity("GET", &url, e))?;

        let records: Vec<R> = read_json(response).await?;
        info!(count = records.len(), "Collection loaded");

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.set(&key, &records).await {
                warn!(error = %e, "Failed to cache collection");
            }
        }

        Ok(records)
    }

    #[instrument(skip(self, payload), fields(collection = %collection))]
    async fn create<P, R>(&self, collection: Collection, payload: &P) -> Result<R, ClientError>
    where
        P: Serialize + Sync,
        R: Record,
    {
        let url = self.url(&collection.path());
        debug!(url = %url, "POST");
        let response = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| connectivity("POST", &url, e))?;

        let record: R = read_json(response).await?;
        info!(id = record.record_id(), "Record created");

        invalidate::collection(self.cache.as_ref(), collection).await;

        Ok(record)
    }

    #[instrument(skip(self), fields(collection = %collection))]
    async fn delete(&self, collection: Collection, id: i64) -> Result<(), ClientError> {
        let url = self.url(&collection.item_path(id));
        debug!(url = %url, "DELETE");
        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| connectivity("DELETE", &url, e))?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        info!(id, "Record deleted");

        invalidate::collection(self.cache.as_ref(), collection).await;

        Ok(())
    }
}

fn connectivity(method: &str, url: &str, err: reqwest::Error) -> ClientError {
    error!(method, url, error = %err, "Request failed before a response arrived");
    ClientError::connectivity(err)
}

async fn read_json<T>(response: Response) -> Result<T, ClientError>
where
    T: DeserializeOwned,
{
    if !response.status().is_success() {
        return Err(rejection(response).await);
    }
    response.json::<T>().await.map_err(|e| {
        error!(error = %e, "Response body did not match the expected shape");
        ClientError::decode(e)
    })
}

/// Turns a non-2xx response into `Rejected`, preferring the server's message.
async fn rejection(response: Response) -> ClientError {
    let status = response.status();
    let message = match response.json::<ApiErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => fallback_message(status),
    };
    warn!(status = status.as_u16(), message = %message, "Request rejected");
    ClientError::rejected(status.as_u16(), message)
}

fn fallback_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
}
