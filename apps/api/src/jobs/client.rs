//! Job search provider client (SerpApi, Google Jobs engine).

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub const ENGINE: &str = "google_jobs";

#[derive(Debug, Error)]
pub enum JobSearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Forwards a search to a job provider and returns its payload verbatim.
///
/// Carried in `AppState` as `Arc<dyn JobSearch>`.
#[async_trait]
pub trait JobSearch: Send + Sync {
    async fn search(
        &self,
        query: Option<&str>,
        location: Option<&str>,
    ) -> Result<Value, JobSearchError>;
}

#[derive(Debug, Serialize)]
struct SearchParams<'a> {
    engine: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    q: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a str>,
    api_key: &'a str,
}

#[derive(Clone)]
pub struct SerpApiClient {
    client: Client,
    api_key: String,
    url: String,
}

impl SerpApiClient {
    pub fn new(api_key: String, url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            url,
        }
    }
}

#[async_trait]
impl JobSearch for SerpApiClient {
    async fn search(
        &self,
        query: Option<&str>,
        location: Option<&str>,
    ) -> Result<Value, JobSearchError> {
        let params = SearchParams {
            engine: ENGINE,
            q: query,
            location,
            api_key: &self.api_key,
        };

        let payload = self
            .client
            .get(&self.url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        debug!("Job search succeeded (query: {query:?}, location: {location:?})");
        Ok(payload)
    }
}
