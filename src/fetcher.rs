use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to news API failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("news API error ({code}): {message}")]
    Api { code: String, message: String },
}

/// One article as returned by the upstream news API.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub source: Source,
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub url_to_image: Option<String>,
    /// ISO-8601 publication timestamp, e.g. `2024-09-13T00:55:49Z`
    pub published_at: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Source {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// One page of search results.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPage {
    pub status: String,
    #[serde(default)]
    pub total_results: i64,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Client for a NewsAPI-compatible endpoint.
pub struct NewsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NewsClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Newsdeck/1.0 (news reader)")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Fetch one page of articles matching `query`, newest first.
    ///
    /// `page` is 1-based. Exactly one upstream request per call.
    pub async fn search(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
    ) -> Result<NewsPage, FetchError> {
        info!("Fetching articles: query='{}' page={}", query, page);

        let url = format!("{}/everything", self.base_url);
        let result: NewsPage = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .query(&[("page", page), ("pageSize", page_size)])
            .query(&[("sortBy", "publishedAt")])
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?
            .json()
            .await?;

        if result.status != "ok" {
            return Err(FetchError::Api {
                code: result.code.unwrap_or_else(|| "unknown".to_string()),
                message: result
                    .message
                    .unwrap_or_else(|| "no message from upstream".to_string()),
            });
        }

        info!(
            "Fetched {} of {} articles for query '{}'",
            result.articles.len(),
            result.total_results,
            query
        );
        Ok(result)
    }
}
