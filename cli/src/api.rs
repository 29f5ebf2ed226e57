//! Typed HTTP client over the shared endpoint table.
//!
//! Every call resolves an `Endpoint` from `schema::endpoints` against the
//! configured base URL, so the CLI and the browser console hit the same
//! routes. Non-success statuses keep the backend's `detail` text.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use desk::notify::ErrorCode;
use schema::endpoints::{self, Endpoint, Method};
use schema::{
    Category, CategoryCreate, CategoryUpdate, Id, Template, TemplateCreate, TemplateUpdate, Topic,
    TopicCreate, TopicSearchType, TopicUpdate, TopicVersion, WeeklyExam, WeeklyExamCreate,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {status}{}", .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    Rejected { status: u16, detail: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("topic {topic_id} has no version {version}")]
    VersionNotFound { topic_id: Id, version: i64 },
}

impl ApiError {
    /// Build a rejection from a non-success response body.
    #[must_use]
    pub fn rejected(status: u16, body: &str) -> Self {
        Self::Rejected { status, detail: schema::error_detail(body) }
    }
}

impl ErrorCode for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Http(_) => "E_TRANSPORT",
            Self::Rejected { status: 404, .. } | Self::VersionNotFound { .. } => "E_NOT_FOUND",
            Self::Rejected { .. } => "E_REJECTED",
            Self::Decode(_) => "E_DECODE",
        }
    }
}

fn method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// Client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn exchange(&self, endpoint: &Endpoint, body: Option<&impl Serialize>) -> Result<String, ApiError> {
        let request = self.http.request(method(endpoint.method), endpoint.url(&self.base_url));
        let request = match body {
            Some(body) => request.json(body),
            None => request,
        };
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(method = endpoint.method.as_str(), path = %endpoint.path, status = status.as_u16(), "api call");
        if !status.is_success() {
            return Err(ApiError::rejected(status.as_u16(), &text));
        }
        Ok(text)
    }

    async fn send<T: DeserializeOwned>(&self, endpoint: Endpoint, body: Option<&impl Serialize>) -> Result<T, ApiError> {
        let text = self.exchange(&endpoint, body).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiError> {
        self.send(endpoint, None::<&()>).await
    }

    async fn delete(&self, endpoint: Endpoint) -> Result<(), ApiError> {
        self.exchange(&endpoint, None::<&()>).await.map(|_| ())
    }

    // =========================================================================
    // TOPICS
    // =========================================================================

    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn list_topics(&self, category: Option<&str>) -> Result<Vec<Topic>, ApiError> {
        self.get(endpoints::list_topics(category)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the topic does not exist.
    pub async fn get_topic(&self, id: Id) -> Result<Topic, ApiError> {
        self.get(endpoints::get_topic(id)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn create_topic(&self, payload: &TopicCreate) -> Result<Topic, ApiError> {
        self.send(endpoints::create_topic(), Some(payload)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn update_topic(&self, id: Id, payload: &TopicUpdate) -> Result<Topic, ApiError> {
        self.send(endpoints::update_topic(id), Some(payload)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn delete_topic(&self, id: Id) -> Result<(), ApiError> {
        self.delete(endpoints::delete_topic(id)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn search_topics(&self, query: &str, search_type: TopicSearchType) -> Result<Vec<Topic>, ApiError> {
        self.get(endpoints::search_topics(query, search_type)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn topic_versions(&self, id: Id) -> Result<Vec<TopicVersion>, ApiError> {
        self.get(endpoints::topic_versions(id)).await
    }

    /// Put version `version`'s snapshot back onto topic `topic_id`.
    ///
    /// The restore is an ordinary update, so the backend records it as a new
    /// version. Returns the updated topic.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::VersionNotFound`] when the topic has no such
    /// version, or any request error.
    pub async fn restore_topic_version(&self, topic_id: Id, version: i64) -> Result<Topic, ApiError> {
        let versions = self.topic_versions(topic_id).await?;
        let snapshot = versions
            .iter()
            .find(|v| v.version == version)
            .ok_or(ApiError::VersionNotFound { topic_id, version })?;
        let payload = desk::versions::restore_request(snapshot);
        tracing::info!(topic_id, version, "restoring topic version");
        self.update_topic(topic_id, &payload).await
    }

    // =========================================================================
    // CATEGORIES
    // =========================================================================

    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get(endpoints::list_categories()).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn category_tree(&self) -> Result<Vec<Category>, ApiError> {
        self.get(endpoints::category_tree()).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn create_category(&self, payload: &CategoryCreate) -> Result<Category, ApiError> {
        self.send(endpoints::create_category(), Some(payload)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn update_category(&self, id: Id, payload: &CategoryUpdate) -> Result<Category, ApiError> {
        self.send(endpoints::update_category(id), Some(payload)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails; a category with children is
    /// rejected with a detail.
    pub async fn delete_category(&self, id: Id) -> Result<(), ApiError> {
        self.delete(endpoints::delete_category(id)).await
    }

    // =========================================================================
    // TEMPLATES
    // =========================================================================

    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn list_templates(&self, category: Option<&str>) -> Result<Vec<Template>, ApiError> {
        self.get(endpoints::list_templates(category)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the template does not exist.
    pub async fn get_template(&self, id: Id) -> Result<Template, ApiError> {
        self.get(endpoints::get_template(id)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn create_template(&self, payload: &TemplateCreate) -> Result<Template, ApiError> {
        self.send(endpoints::create_template(), Some(payload)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn update_template(&self, id: Id, payload: &TemplateUpdate) -> Result<Template, ApiError> {
        self.send(endpoints::update_template(id), Some(payload)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn delete_template(&self, id: Id) -> Result<(), ApiError> {
        self.delete(endpoints::delete_template(id)).await
    }

    // =========================================================================
    // WEEKLY EXAMS
    // =========================================================================

    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn list_weekly_exams(&self) -> Result<Vec<WeeklyExam>, ApiError> {
        self.get(endpoints::list_weekly_exams()).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn create_weekly_exam(&self, payload: &WeeklyExamCreate) -> Result<WeeklyExam, ApiError> {
        self.send(endpoints::create_weekly_exam(), Some(payload)).await
    }
}
