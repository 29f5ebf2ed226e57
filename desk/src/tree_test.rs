use schema::Category;

use super::*;

fn cat(id: i64, name: &str, parent: Option<i64>) -> Category {
    Category {
        id,
        name: name.to_owned(),
        description: None,
        parent_id: parent,
        created_at: None,
        children: Vec::new(),
    }
}

fn sample() -> CategoryArena {
    CategoryArena::from_flat(vec![
        cat(1, "네트워크", None),
        cat(2, "TCP/IP", Some(1)),
        cat(3, "라우팅", Some(2)),
        cat(4, "보안", None),
        cat(5, "암호화", Some(4)),
    ])
}

// =============================================================
// Arena construction
// =============================================================

#[test]
fn roots_keep_input_order() {
    let arena = sample();
    let names = arena.roots().iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["네트워크", "보안"]);
}

#[test]
fn orphan_and_self_parent_are_promoted_to_roots() {
    let arena = CategoryArena::from_flat(vec![cat(1, "a", Some(99)), cat(2, "b", Some(2))]);
    assert_eq!(arena.roots().len(), 2);
    assert_eq!(arena.display_tree().len(), 2);
}

#[test]
fn duplicate_ids_keep_first_record() {
    let arena = CategoryArena::from_flat(vec![cat(1, "first", None), cat(1, "second", None)]);
    assert_eq!(arena.len(), 1);
    assert_eq!(arena.get(1).unwrap().name, "first");
}

#[test]
fn from_nested_matches_from_flat() {
    let mut root = cat(1, "네트워크", None);
    let mut mid = cat(2, "TCP/IP", None);
    mid.children = vec![cat(3, "라우팅", None)];
    root.children = vec![mid];

    let arena = CategoryArena::from_nested(vec![root, cat(4, "보안", None)]);
    assert_eq!(arena.len(), 4);
    assert_eq!(arena.get(3).unwrap().parent_id, Some(2));
    assert_eq!(arena.get(2).unwrap().parent_id, Some(1));
    assert!(arena.get(1).unwrap().children.is_empty());
    assert_eq!(arena.subtree_names(1), vec!["네트워크", "TCP/IP", "라우팅"]);
}

// =============================================================
// Display tree
// =============================================================

#[test]
fn display_tree_nests_children() {
    let tree = sample().display_tree();
    assert_eq!(tree.len(), 2);
    assert_eq!(tree[0].category.name, "네트워크");
    assert_eq!(tree[0].children[0].category.name, "TCP/IP");
    assert_eq!(tree[0].children[0].children[0].category.name, "라우팅");
    assert_eq!(tree[1].children[0].category.name, "암호화");
}

#[test]
fn cycle_without_root_is_not_displayed_and_terminates() {
    let arena = CategoryArena::from_flat(vec![
        cat(1, "root", None),
        cat(2, "a", Some(3)),
        cat(3, "b", Some(2)),
    ]);
    let tree = arena.display_tree();
    assert_eq!(tree.len(), 1);
    assert!(tree[0].children.is_empty());
    assert_eq!(arena.parent_options(None).len(), 1);
    assert_eq!(arena.subtree_names(2), vec!["a", "b"]);
}

// =============================================================
// Parent options
// =============================================================

#[test]
fn parent_options_are_preorder_with_depth_and_path() {
    let options = sample().parent_options(None);
    let labels = options.iter().map(ParentOption::indented_label).collect::<Vec<_>>();
    assert_eq!(labels, vec!["네트워크", "  TCP/IP", "    라우팅", "보안", "  암호화"]);
    assert_eq!(options[2].path, "네트워크 > TCP/IP > 라우팅");
    assert_eq!(options[2].depth, 2);
}

#[test]
fn parent_options_never_include_the_edited_category() {
    let arena = sample();
    for editing in [1, 2, 3, 4, 5] {
        let options = arena.parent_options(Some(editing));
        assert!(options.iter().all(|o| o.id != editing), "editing {editing}");
    }
}

#[test]
fn parent_options_skip_the_edited_subtree() {
    let ids = sample()
        .parent_options(Some(2))
        .iter()
        .map(|o| o.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 4, 5]);
}

#[test]
fn subtree_names_of_unknown_root_is_empty() {
    assert!(sample().subtree_names(42).is_empty());
}
