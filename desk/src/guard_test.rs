use schema::CategoryCreate;

use super::*;

fn create(name: &str) -> CategoryCreate {
    CategoryCreate { name: name.to_owned(), ..CategoryCreate::default() }
}

#[test]
fn identical_submission_is_refused_until_released() {
    let mut guard = SubmitGuard::default();
    let ticket = guard.try_acquire(SubmitKey::new("category:create", &create("보안"))).unwrap();
    assert!(guard.try_acquire(SubmitKey::new("category:create", &create("보안"))).is_none());

    guard.release(ticket);
    assert!(guard.is_empty());
    let again = guard.try_acquire(SubmitKey::new("category:create", &create("보안")));
    assert!(again.is_some());
}

#[test]
fn different_payload_or_entity_is_admitted() {
    let mut guard = SubmitGuard::default();
    let a = guard.try_acquire(SubmitKey::new("category:create", &create("보안"))).unwrap();
    let b = guard.try_acquire(SubmitKey::new("category:create", &create("네트워크"))).unwrap();
    let c = guard.try_acquire(SubmitKey::new("template:create", &create("보안"))).unwrap();
    assert_eq!(guard.len(), 3);
    guard.release(a);
    guard.release(b);
    guard.release(c);
    assert!(guard.is_empty());
}

#[test]
fn keys_are_deterministic() {
    assert_eq!(
        SubmitKey::new("topic:1:restore", &create("x")),
        SubmitKey::new("topic:1:restore", &create("x"))
    );
    assert_ne!(SubmitKey::bare("topic:1:delete"), SubmitKey::bare("topic:2:delete"));
}

#[test]
fn bare_delete_is_guarded() {
    let mut guard = SubmitGuard::default();
    let key = SubmitKey::bare("template:3:delete");
    let ticket = guard.try_acquire(key.clone()).unwrap();
    assert_eq!(ticket.key(), &key);
    assert!(guard.try_acquire(key.clone()).is_none());
    guard.release(ticket);
    assert!(guard.try_acquire(key).is_some());
}
