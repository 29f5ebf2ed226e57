use super::*;

#[test]
fn list_topics_without_filter_has_no_query() {
    let endpoint = list_topics(None);
    assert_eq!(endpoint.method, Method::Get);
    assert_eq!(endpoint.path_and_query(), "/api/topics/");
}

#[test]
fn blank_category_filter_is_dropped() {
    assert!(list_topics(Some("   ")).query.is_empty());
    assert!(list_templates(Some("")).query.is_empty());
}

#[test]
fn category_filter_is_percent_encoded() {
    let endpoint = list_topics(Some("네트워크"));
    assert_eq!(
        endpoint.path_and_query(),
        "/api/topics/?category=%EB%84%A4%ED%8A%B8%EC%9B%8C%ED%81%AC"
    );
}

#[test]
fn search_carries_query_and_type() {
    let endpoint = search_topics("tcp udp", TopicSearchType::Keyword);
    assert_eq!(endpoint.path, "/api/topics/search");
    assert_eq!(endpoint.path_and_query(), "/api/topics/search?q=tcp%20udp&search_type=keyword");
}

#[test]
fn mutation_verbs_match_resources() {
    assert_eq!(create_topic().method, Method::Post);
    assert_eq!(update_topic(3).method, Method::Put);
    assert_eq!(delete_topic(3).method, Method::Delete);
    assert_eq!(update_category(9).path, "/api/categories/9");
    assert_eq!(delete_template(4).path, "/api/templates/4");
    assert_eq!(topic_versions(7).path, "/api/topics/7/versions");
}

#[test]
fn weekly_exams_share_the_api_prefix() {
    assert_eq!(list_weekly_exams().path, "/api/weekly-exams/");
    assert_eq!(create_weekly_exam().method, Method::Post);
}

#[test]
fn url_joins_base_without_double_slash() {
    let endpoint = get_topic(12);
    assert_eq!(endpoint.url("http://localhost:8000/"), "http://localhost:8000/api/topics/12");
    assert_eq!(endpoint.url(""), "/api/topics/12");
}

#[test]
fn encode_component_keeps_unreserved() {
    assert_eq!(encode_component("a-b_c.d~e"), "a-b_c.d~e");
    assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
}
