use super::*;

#[test]
fn settle_passes_success_bodies_through() {
    assert_eq!(settle(200, "[]".to_owned()), Ok("[]".to_owned()));
    assert_eq!(settle(204, String::new()), Ok(String::new()));
}

#[test]
fn settle_keeps_backend_detail_on_rejection() {
    let err = settle(400, r#"{"detail":"Cannot delete category with children"}"#.to_owned()).unwrap_err();
    assert_eq!(
        err,
        Failure::Rejected { status: 400, detail: Some("Cannot delete category with children".to_owned()) }
    );
}

#[test]
fn settle_without_detail_falls_back_to_status() {
    let err = settle(500, "Internal Server Error".to_owned()).unwrap_err();
    assert_eq!(err, Failure::Rejected { status: 500, detail: None });
}

#[test]
fn decode_reports_malformed_bodies_as_transport() {
    let ok: Vec<Topic> = decode(r#"[{"id":1,"title":"TCP"}]"#).unwrap();
    assert_eq!(ok[0].title, "TCP");
    assert!(matches!(decode::<Vec<Topic>>("<html>"), Err(Failure::Transport(_))));
}

#[test]
fn encode_produces_wire_json() {
    let value = encode(&CategoryCreate { name: "보안".to_owned(), ..CategoryCreate::default() }).unwrap();
    assert_eq!(value["name"], "보안");
}
