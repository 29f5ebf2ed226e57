use super::*;

#[test]
fn rejected_keeps_backend_detail() {
    let err = ApiError::rejected(400, r#"{"detail":"Cannot delete category with children"}"#);
    assert!(matches!(
        &err,
        ApiError::Rejected { status: 400, detail: Some(d) } if d == "Cannot delete category with children"
    ));
    assert_eq!(err.to_string(), "HTTP 400: Cannot delete category with children");
}

#[test]
fn rejected_without_detail_reports_status_only() {
    let err = ApiError::rejected(502, "Bad Gateway");
    assert_eq!(err.to_string(), "HTTP 502");
}

#[test]
fn error_codes_separate_missing_from_rejected() {
    assert_eq!(ApiError::rejected(404, r#"{"detail":"Topic not found"}"#).error_code(), "E_NOT_FOUND");
    assert_eq!(ApiError::VersionNotFound { topic_id: 1, version: 9 }.error_code(), "E_NOT_FOUND");
    assert_eq!(ApiError::rejected(400, "{}").error_code(), "E_REJECTED");
}

#[test]
fn new_trims_trailing_slashes_from_base_url() {
    let client = ApiClient::new("http://127.0.0.1:8000//", Duration::from_secs(5)).unwrap();
    assert_eq!(client.base_url(), "http://127.0.0.1:8000");
}

#[test]
fn methods_map_to_reqwest_verbs() {
    assert_eq!(method(Method::Get), reqwest::Method::GET);
    assert_eq!(method(Method::Put), reqwest::Method::PUT);
    assert_eq!(method(Method::Delete), reqwest::Method::DELETE);
}
