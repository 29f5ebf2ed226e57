//! Route table for every backend operation.
//!
//! DESIGN
//! ======
//! All resources live under a single `/api` base. Both the browser client and
//! the CLI build requests from these descriptors so the two never drift apart;
//! each transport only adds its own base URL and body encoding.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use crate::{Id, TopicSearchType};

/// API path prefix shared by every resource.
pub const API_PREFIX: &str = "/api";

/// HTTP verb of an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A resolved request target: verb, path, and query pairs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
}

impl Endpoint {
    fn new(method: Method, path: String) -> Self {
        Self { method, path, query: Vec::new() }
    }

    fn with_query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    /// Path plus percent-encoded query string, relative to the API origin.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{k}={}", encode_component(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }

    /// Absolute URL against `base` (trailing slashes on `base` are ignored).
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path_and_query())
    }
}

/// Percent-encode a query component (RFC 3986 unreserved characters pass).
#[must_use]
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(char::from(byte));
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

fn category_filter(endpoint: Endpoint, category: Option<&str>) -> Endpoint {
    match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(category) => endpoint.with_query("category", category),
        None => endpoint,
    }
}

// =============================================================================
// TOPICS
// =============================================================================

#[must_use]
pub fn list_topics(category: Option<&str>) -> Endpoint {
    category_filter(Endpoint::new(Method::Get, format!("{API_PREFIX}/topics/")), category)
}

#[must_use]
pub fn get_topic(id: Id) -> Endpoint {
    Endpoint::new(Method::Get, format!("{API_PREFIX}/topics/{id}"))
}

#[must_use]
pub fn create_topic() -> Endpoint {
    Endpoint::new(Method::Post, format!("{API_PREFIX}/topics/"))
}

#[must_use]
pub fn update_topic(id: Id) -> Endpoint {
    Endpoint::new(Method::Put, format!("{API_PREFIX}/topics/{id}"))
}

#[must_use]
pub fn delete_topic(id: Id) -> Endpoint {
    Endpoint::new(Method::Delete, format!("{API_PREFIX}/topics/{id}"))
}

#[must_use]
pub fn search_topics(query: &str, search_type: TopicSearchType) -> Endpoint {
    Endpoint::new(Method::Get, format!("{API_PREFIX}/topics/search"))
        .with_query("q", query)
        .with_query("search_type", search_type.as_str())
}

#[must_use]
pub fn topic_versions(id: Id) -> Endpoint {
    Endpoint::new(Method::Get, format!("{API_PREFIX}/topics/{id}/versions"))
}

// =============================================================================
// CATEGORIES
// =============================================================================

#[must_use]
pub fn list_categories() -> Endpoint {
    Endpoint::new(Method::Get, format!("{API_PREFIX}/categories/"))
}

#[must_use]
pub fn category_tree() -> Endpoint {
    Endpoint::new(Method::Get, format!("{API_PREFIX}/categories/tree"))
}

#[must_use]
pub fn create_category() -> Endpoint {
    Endpoint::new(Method::Post, format!("{API_PREFIX}/categories/"))
}

#[must_use]
pub fn update_category(id: Id) -> Endpoint {
    Endpoint::new(Method::Put, format!("{API_PREFIX}/categories/{id}"))
}

#[must_use]
pub fn delete_category(id: Id) -> Endpoint {
    Endpoint::new(Method::Delete, format!("{API_PREFIX}/categories/{id}"))
}

// =============================================================================
// TEMPLATES
// =============================================================================

#[must_use]
pub fn list_templates(category: Option<&str>) -> Endpoint {
    category_filter(Endpoint::new(Method::Get, format!("{API_PREFIX}/templates/")), category)
}

#[must_use]
pub fn get_template(id: Id) -> Endpoint {
    Endpoint::new(Method::Get, format!("{API_PREFIX}/templates/{id}"))
}

#[must_use]
pub fn create_template() -> Endpoint {
    Endpoint::new(Method::Post, format!("{API_PREFIX}/templates/"))
}

#[must_use]
pub fn update_template(id: Id) -> Endpoint {
    Endpoint::new(Method::Put, format!("{API_PREFIX}/templates/{id}"))
}

#[must_use]
pub fn delete_template(id: Id) -> Endpoint {
    Endpoint::new(Method::Delete, format!("{API_PREFIX}/templates/{id}"))
}

// =============================================================================
// WEEKLY EXAMS
// =============================================================================

#[must_use]
pub fn list_weekly_exams() -> Endpoint {
    Endpoint::new(Method::Get, format!("{API_PREFIX}/weekly-exams/"))
}

#[must_use]
pub fn create_weekly_exam() -> Endpoint {
    Endpoint::new(Method::Post, format!("{API_PREFIX}/weekly-exams/"))
}
