use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use serde::Deserialize;
use tracing::warn;

use crate::fetcher::{Article, NewsClient};
use crate::timefmt;

pub struct AppState {
    pub client: Arc<NewsClient>,
    pub page_size: u32,
    pub default_query: String,
}

// Template structs
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub query: String,
    pub page: u32,
    pub cards: Vec<ArticleCard>,
    pub total_results: i64,
    pub has_prev: bool,
    pub has_more: bool,
}

pub struct ArticleCard {
    pub title: String,
    pub url: String,
    pub source: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub published_label: String,
}

impl ArticleCard {
    /// Build a card for rendering, labelling the article with its relative
    /// age. Falls back to the raw timestamp when the upstream value does not
    /// parse.
    pub fn from_article(article: Article) -> Self {
        let published_label = match timefmt::relative_time_now(&article.published_at) {
            Ok(label) => label,
            Err(e) => {
                warn!("Unlabelled article '{}': {}", article.title, e);
                article.published_at.clone()
            }
        };

        Self {
            title: article.title,
            url: article.url,
            source: article.source.name.unwrap_or_else(|| "Unknown".to_string()),
            description: article.description,
            image: article.url_to_image,
            published_label,
        }
    }
}

// Wrapper for HTML responses
struct HtmlTemplate<T>(T);

impl<T: Template> IntoResponse for HtmlTemplate<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {}", err),
            )
                .into_response(),
        }
    }
}

// Custom error type
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error: {}", self.0),
        )
            .into_response()
    }
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    fn from(err: E) -> Self {
        AppError(err.into())
    }
}

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

// Route handlers
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let q = query
        .q
        .filter(|q| !q.trim().is_empty())
        .unwrap_or_else(|| state.default_query.clone());
    let page = query.page.max(1);

    let result = state.client.search(&q, page, state.page_size).await?;

    let cards = result
        .articles
        .into_iter()
        .map(ArticleCard::from_article)
        .collect();

    Ok(HtmlTemplate(IndexTemplate {
        query: q,
        page,
        cards,
        total_results: result.total_results,
        has_prev: page > 1,
        has_more: (page as i64) * (state.page_size as i64) < result.total_results,
    }))
}

/// JSON passthrough to the upstream news API.
pub async fn api_news(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let q = query
        .q
        .filter(|q| !q.trim().is_empty())
        .unwrap_or_else(|| state.default_query.clone());
    let page = query.page.max(1);

    let result = state.client.search(&q, page, state.page_size).await?;
    Ok(Json(result))
}

pub async fn health() -> impl IntoResponse {
    Html("OK")
}
