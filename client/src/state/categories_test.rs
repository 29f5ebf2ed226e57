use serde_json::json;

use super::*;

fn tree() -> Vec<Category> {
    serde_json::from_value(json!([
        {
            "id": 1, "name": "네트워크", "description": "망",
            "children": [{ "id": 2, "name": "TCP", "parent_id": 1 }]
        },
        { "id": 3, "name": "보안" }
    ]))
    .unwrap()
}

// =============================================================
// Form
// =============================================================

#[test]
fn child_form_presets_parent() {
    let form = CategoryForm::create(Some(1));
    assert_eq!(form.heading(), "새 카테고리");
    assert_eq!(form.editing(), None);
    assert_eq!(form.to_create().unwrap_err(), Failure::Invalid(NAME_REQUIRED.to_owned()));

    let form = CategoryForm { name: " 라우팅 ".to_owned(), ..form };
    assert_eq!(
        form.to_create().unwrap(),
        CategoryCreate { name: "라우팅".to_owned(), description: None, parent_id: Some(1) }
    );
}

#[test]
fn edit_form_round_trips_into_update() {
    let mut state = CategoriesState::default();
    state.replace_tree(tree());
    let form = CategoryForm::edit(state.arena.get(1).unwrap());
    assert_eq!(form.heading(), "카테고리 수정");
    assert_eq!(form.editing(), Some(1));
    let update = form.to_update().unwrap();
    assert_eq!(update.name.as_deref(), Some("네트워크"));
    assert_eq!(update.description.as_deref(), Some("망"));
    assert_eq!(update.parent_id, None);
}

#[test]
fn parent_select_values() {
    assert_eq!(parse_parent(""), None);
    assert_eq!(parse_parent("12"), Some(12));
    assert_eq!(parse_parent("x"), None);
}

// =============================================================
// Guard keys and state
// =============================================================

#[test]
fn keys_distinguish_entities() {
    let payload = CategoryCreate { name: "a".to_owned(), ..CategoryCreate::default() };
    assert_eq!(create_key(&payload), create_key(&payload));
    assert_eq!(delete_key(4).entity(), "category:4:delete");
    assert_eq!(update_key(4, &CategoryUpdate::default()).entity(), "category:4:update");
}

#[test]
fn pending_delete_resolves_name() {
    let mut state = CategoriesState { loading: true, ..CategoriesState::default() };
    state.replace_tree(tree());
    assert!(!state.loading);
    assert_eq!(state.arena.len(), 3);

    state.pending_delete = Some(2);
    assert_eq!(state.pending_delete_name(), Some("TCP"));
    state.pending_delete = Some(99);
    assert_eq!(state.pending_delete_name(), None);
}

#[test]
fn option_labels_indent_with_no_break_spaces() {
    let mut state = CategoriesState::default();
    state.replace_tree(tree());
    let options = state.arena.parent_options(None);
    let labels = options.iter().map(option_label).collect::<Vec<_>>();
    assert_eq!(labels, vec!["네트워크".to_owned(), "\u{a0}\u{a0}TCP".to_owned(), "보안".to_owned()]);
}
