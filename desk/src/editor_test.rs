use super::*;

#[test]
fn load_then_serialize_is_verbatim() {
    let markup = concat!(
        r#"<p style="text-align: center"><span style="font-size: 18px; color: #ff0000">제목</span></p>"#,
        r#"<p><img src="data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg=="></p>"#,
        "<table><tbody><tr><th>a</th></tr><tr><td>&nbsp;b&amp;c</td></tr></tbody></table>",
    );
    let doc = EditorDocument::load(markup);
    assert_eq!(doc.serialize(), markup);
}

#[test]
fn inline_formatting_maps_to_exec_commands() {
    let mut doc = EditorDocument::default();
    assert_eq!(
        doc.execute(EditorCommand::Bold).unwrap(),
        DomAction::Exec { command: "bold", value: None }
    );
    assert_eq!(
        doc.execute(EditorCommand::Align(Align::Center)).unwrap(),
        DomAction::Exec { command: "justifyCenter", value: None }
    );
    assert_eq!(
        doc.execute(EditorCommand::Color("#FF00aa".to_owned())).unwrap(),
        DomAction::Exec { command: "foreColor", value: Some("#ff00aa".to_owned()) }
    );
}

#[test]
fn palette_label_resolves_to_hex() {
    let mut doc = EditorDocument::default();
    assert_eq!(
        doc.execute(EditorCommand::Color("파랑".to_owned())).unwrap(),
        DomAction::Exec { command: "foreColor", value: Some("#0000ff".to_owned()) }
    );
}

#[test]
fn malformed_colors_are_rejected() {
    let mut doc = EditorDocument::default();
    for bad in ["red", "#fff", "#gggggg", "#12345678"] {
        assert!(matches!(
            doc.execute(EditorCommand::Color(bad.to_owned())),
            Err(EditorError::InvalidColor(_))
        ));
    }
}

#[test]
fn font_size_must_be_offered() {
    let mut doc = EditorDocument::default();
    assert_eq!(
        doc.execute(EditorCommand::FontSize(24)).unwrap(),
        DomAction::StyleSelection { property: "font-size", value: "24px".to_owned() }
    );
    assert_eq!(doc.execute(EditorCommand::FontSize(13)), Err(EditorError::UnsupportedFontSize(13)));
    assert_eq!(doc.execute(EditorCommand::FontSize(36)), Err(EditorError::UnsupportedFontSize(36)));
}

#[test]
fn table_fragment_has_requested_shape() {
    let mut doc = EditorDocument::default();
    let DomAction::InsertHtml(html) = doc
        .execute(EditorCommand::InsertTable { rows: 2, cols: 3, header_row: true })
        .unwrap()
    else {
        panic!("expected html insertion");
    };
    assert_eq!(html.matches("<tr>").count(), 2);
    assert_eq!(html.matches("<th>").count(), 3);
    assert_eq!(html.matches("<td>").count(), 3);
}

#[test]
fn table_dimensions_are_bounded() {
    let mut doc = EditorDocument::default();
    for (rows, cols) in [(0, 3), (3, 0), (21, 1), (1, 21)] {
        assert_eq!(
            doc.execute(EditorCommand::InsertTable { rows, cols, header_row: false }),
            Err(EditorError::TableSize { rows, cols })
        );
    }
    assert!(doc.execute(EditorCommand::InsertTable { rows: 20, cols: 20, header_row: false }).is_ok());
}

#[test]
fn image_requires_inline_data_url() {
    let mut doc = EditorDocument::default();
    let url = image_data_url("image/png", &[0x89, b'P', b'N', b'G']).unwrap();
    assert_eq!(url, "data:image/png;base64,iVBORw==");
    assert_eq!(
        doc.execute(EditorCommand::InsertImage(url.clone())).unwrap(),
        DomAction::InsertHtml(format!("<img src=\"{url}\">"))
    );
    assert_eq!(
        doc.execute(EditorCommand::InsertImage("https://example.com/a.png".to_owned())),
        Err(EditorError::NotAnImage)
    );
    assert_eq!(image_data_url("text/plain", b"x"), Err(EditorError::NotAnImage));
}

#[test]
fn apply_template_and_clear_update_the_model() {
    let mut doc = EditorDocument::load("<p>old</p>");
    assert_eq!(
        doc.execute(EditorCommand::ApplyTemplate("<h2>틀</h2>".to_owned())).unwrap(),
        DomAction::Replace("<h2>틀</h2>".to_owned())
    );
    assert_eq!(doc.serialize(), "<h2>틀</h2>");
    assert_eq!(doc.execute(EditorCommand::Clear).unwrap(), DomAction::Replace(String::new()));
    assert!(doc.serialize().is_empty());
}

#[test]
fn formatting_commands_leave_markup_to_sync() {
    let mut doc = EditorDocument::load("<p>a</p>");
    doc.execute(EditorCommand::Italic).unwrap();
    assert_eq!(doc.markup(), "<p>a</p>");
    doc.sync("<p><i>a</i></p>");
    assert_eq!(doc.serialize(), "<p><i>a</i></p>");
}

#[test]
fn blank_detection() {
    assert!(EditorDocument::default().is_blank());
    assert!(EditorDocument::load("<p><br></p>").is_blank());
    assert!(EditorDocument::load("<p>&nbsp; </p><p></p>").is_blank());
    assert!(!EditorDocument::load("<p>x</p>").is_blank());
    assert!(!EditorDocument::load(r#"<p><IMG src="data:image/gif;base64,R0lG"/></p>"#).is_blank());
    assert!(!EditorDocument::load("<table><tbody><tr><td></td></tr></tbody></table>").is_blank());
}
