//! REST API helpers for the console.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, built from the
//! shared `schema::endpoints` table against the same-origin `/api` proxy.
//! Server-side (SSR): stubs returning [`Failure::Transport`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<T, Failure>`. Non-success statuses keep the
//! backend's `detail` so the page can show it verbatim; transport and decode
//! problems collapse into `Failure::Transport`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use desk::notify::ErrorCode;
use desk::notify::Failure;
use schema::endpoints::{self, Endpoint};
use schema::{
    Category, CategoryCreate, CategoryUpdate, Id, Template, TemplateCreate, TemplateUpdate, Topic,
    TopicCreate, TopicSearchType, TopicUpdate, TopicVersion, WeeklyExam, WeeklyExamCreate,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(any(test, feature = "hydrate"))]
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, Failure> {
    serde_json::from_str(body).map_err(|e| Failure::Transport(format!("invalid response body: {e}")))
}

/// Map a finished exchange to its body, or to a rejection carrying `detail`.
#[cfg(any(test, feature = "hydrate"))]
fn settle(status: u16, body: String) -> Result<String, Failure> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(Failure::rejected(status, &body))
    }
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> Failure {
    Failure::Transport("not available on server".to_owned())
}

fn encode(payload: &impl Serialize) -> Result<serde_json::Value, Failure> {
    serde_json::to_value(payload).map_err(|e| Failure::Invalid(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn exchange(endpoint: &Endpoint, body: Option<serde_json::Value>) -> Result<String, Failure> {
    use gloo_net::http::Request;
    use schema::endpoints::Method;

    let url = endpoint.path_and_query();
    let builder = match endpoint.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    };
    let transport = |e: gloo_net::Error| Failure::Transport(e.to_string());
    let resp = match body {
        Some(body) => builder.json(&body).map_err(transport)?.send().await,
        None => builder.send().await,
    }
    .map_err(transport)?;
    let status = resp.status();
    let text = resp.text().await.map_err(transport)?;
    settle(status, text)
}

async fn call<T: DeserializeOwned>(endpoint: Endpoint, body: Option<serde_json::Value>) -> Result<T, Failure> {
    #[cfg(feature = "hydrate")]
    {
        let text = exchange(&endpoint, body).await.inspect_err(|e| {
            leptos::logging::warn!("{} {} failed [{}]: {e}", endpoint.method.as_str(), endpoint.path, e.error_code());
        })?;
        decode(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, body);
        Err(unavailable())
    }
}

/// Like [`call`] but ignores the response body.
async fn call_unit(endpoint: Endpoint) -> Result<(), Failure> {
    #[cfg(feature = "hydrate")]
    {
        exchange(&endpoint, None).await.map(|_| ()).inspect_err(|e| {
            leptos::logging::warn!("{} {} failed [{}]: {e}", endpoint.method.as_str(), endpoint.path, e.error_code());
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err(unavailable())
    }
}

// =============================================================================
// TOPICS
// =============================================================================

/// `GET /api/topics/`, optionally filtered by category label.
///
/// # Errors
///
/// Returns a [`Failure`] if the request fails or the backend rejects it.
pub async fn fetch_topics(category: Option<String>) -> Result<Vec<Topic>, Failure> {
    call(endpoints::list_topics(category.as_deref()), None).await
}

/// # Errors
///
/// Returns a [`Failure`] if the request fails or the topic does not exist.
pub async fn fetch_topic(id: Id) -> Result<Topic, Failure> {
    call(endpoints::get_topic(id), None).await
}

/// # Errors
///
/// Returns a [`Failure`] if the request fails or the backend rejects it.
pub async fn create_topic(payload: TopicCreate) -> Result<Topic, Failure> {
    call(endpoints::create_topic(), Some(encode(&payload)?)).await
}

/// # Errors
///
/// Returns a [`Failure`] if the request fails or the backend rejects it.
pub async fn update_topic(id: Id, payload: TopicUpdate) -> Result<Topic, Failure> {
    call(endpoints::update_topic(id), Some(encode(&payload)?)).await
}

/// # Errors
///
/// Returns a [`Failure`] if the request fails or the backend rejects it.
pub async fn delete_topic(id: Id) -> Result<(), Failure> {
    call_unit(endpoints::delete_topic(id)).await
}

/// `GET /api/topics/search?q=..&search_type=..`.
///
/// # Errors
///
/// Returns a [`Failure`] if the request fails or the backend rejects it.
pub async fn search_topics(query: String, search_type: TopicSearchType) -> Result<Vec<Topic>, Failure> {
    call(endpoints::search_topics(&query, search_type), None).await
}

/// # Errors
///
/// Returns a [`Failure`] if the request fails or the backend rejects it.
pub async fn fetch_topic_versions(id: Id) -> Result<Vec<TopicVersion>, Failure> {
    call(endpoints::topic_versions(id), None).await
}

// =============================================================================
// CATEGORIES
// =============================================================================

/// Flat category list.
///
/// # Errors
///
/// Returns a [`Failure`] if the request fails or the backend rejects it.
pub async fn fetch_categories() -> Result<Vec<Category>, Failure> {
    call(endpoints::list_categories(), None).await
}

/// Nested roots with `children` filled in.
///
/// # Errors
///
/// Returns a [`Failure`] if the request fails or the backend rejects it.
pub async fn fetch_category_tree() -> Result<Vec<Category>, Failure> {
    call(endpoints::category_tree(), None).await
}

/// # Errors
///
/// Returns a [`Failure`] if the request fails or the backend rejects it.
pub async fn create_category(payload: CategoryCreate) -> Result<Category, Failure> {
    call(endpoints::create_category(), Some(encode(&payload)?)).await
}

/// # Errors
///
/// Returns a [`Failure`] if the request fails or the backend rejects it.
pub async fn update_category(id: Id, payload: CategoryUpdate) -> Result<Category, Failure> {
    call(endpoints::update_category(id), Some(encode(&payload)?)).await
}

/// # Errors
///
/// Returns a [`Failure`]; a category with children is rejected with a detail.
pub async fn delete_category(id: Id) -> Result<(), Failure> {
    call_unit(endpoints::delete_category(id)).await
}

// =============================================================================
// TEMPLATES
// =============================================================================

/// # Errors
///
/// Returns a [`Failure`] if the request fails or the backend rejects it.
pub async fn fetch_templates(category: Option<String>) -> Result<Vec<Template>, Failure> {
    call(endpoints::list_templates(category.as_deref()), None).await
}

/// # Errors
///
/// Returns a [`Failure`] if the request fails or the backend rejects it.
pub async fn create_template(payload: TemplateCreate) -> Result<Template, Failure> {
    call(endpoints::create_template(), Some(encode(&payload)?)).await
}

/// # Errors
///
/// Returns a [`Failure`] if the request fails or the backend rejects it.
pub async fn update_template(id: Id, payload: TemplateUpdate) -> Result<Template, Failure> {
    call(endpoints::update_template(id), Some(encode(&payload)?)).await
}

/// # Errors
///
/// Returns a [`Failure`] if the request fails or the backend rejects it.
pub async fn delete_template(id: Id) -> Result<(), Failure> {
    call_unit(endpoints::delete_template(id)).await
}

// =============================================================================
// WEEKLY EXAMS
// =============================================================================

/// # Errors
///
/// Returns a [`Failure`] if the request fails or the backend rejects it.
pub async fn fetch_weekly_exams() -> Result<Vec<WeeklyExam>, Failure> {
    call(endpoints::list_weekly_exams(), None).await
}

/// # Errors
///
/// Returns a [`Failure`] if the request fails or the backend rejects it.
pub async fn create_weekly_exam(payload: WeeklyExamCreate) -> Result<WeeklyExam, Failure> {
    call(endpoints::create_weekly_exam(), Some(encode(&payload)?)).await
}
