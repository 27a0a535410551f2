use super::*;
use crate::test_support::make_token;

fn store_with(token: Option<&str>) -> (SessionStore, Arc<MemoryStorage>, Arc<RecordingNavigator>) {
    let storage = Arc::new(match token {
        Some(t) => MemoryStorage::with_entry(TOKEN_KEY, t),
        None => MemoryStorage::new(),
    });
    let nav = Arc::new(RecordingNavigator::new());
    (
        SessionStore::new(storage.clone(), nav.clone()),
        storage,
        nav,
    )
}

#[test]
fn missing_token_fails_with_no_token() {
    let (session, _, _) = store_with(None);
    assert_eq!(session.employee_id(), Err(SessionError::NoToken));
    assert_eq!(session.user_info(), Err(SessionError::NoToken));
    assert_eq!(session.user_role(), None);
    assert!(!session.is_authenticated());
}

#[test]
fn empty_token_counts_as_missing() {
    let (session, _, _) = store_with(Some("  "));
    assert_eq!(session.employee_id(), Err(SessionError::NoToken));
}

#[test]
fn garbage_token_fails_invalid_but_role_is_none() {
    for token in ["garbage", "a.b.c", "x.e30.y"] {
        let (session, _, _) = store_with(Some(token));
        assert!(matches!(
            session.employee_id(),
            Err(SessionError::InvalidToken(_))
        ));
        assert_eq!(session.user_role(), None);
        assert!(!session.is_authenticated());
    }
}

#[test]
fn valid_token_yields_id_info_and_role() {
    let token = make_token(&serde_json::json!({
        "employeeId": 9,
        "name": "Mei",
        "sub": "mei@example.com",
        "role": "USER"
    }));
    let (session, _, _) = store_with(Some(&token));
    assert_eq!(session.employee_id(), Ok(9));
    assert_eq!(session.user_role().as_deref(), Some("USER"));
    assert!(session.is_authenticated());
    let info = session.user_info().unwrap();
    assert_eq!(info.employee_id, 9);
    assert_eq!(info.email.as_deref(), Some("mei@example.com"));
}

#[test]
fn role_is_readable_even_without_employee_id() {
    let token = make_token(&serde_json::json!({"role": "ADMIN"}));
    let (session, _, _) = store_with(Some(&token));
    assert_eq!(session.user_role().as_deref(), Some("ADMIN"));
    assert!(!session.is_authenticated());
}

#[test]
fn reads_follow_the_stored_token_without_caching() {
    let (session, storage, _) = store_with(None);
    storage
        .set(TOKEN_KEY, &make_token(&serde_json::json!({"employeeId": 1})))
        .unwrap();
    assert_eq!(session.employee_id(), Ok(1));
    storage
        .set(TOKEN_KEY, &make_token(&serde_json::json!({"employeeId": 2})))
        .unwrap();
    assert_eq!(session.employee_id(), Ok(2));
}

#[test]
fn establish_writes_token_and_caches() {
    let (session, storage, nav) = store_with(None);
    let token = make_token(&serde_json::json!({"employeeId": 5, "role": "ADMIN", "name": "Jo"}));
    session.establish(&token).unwrap();

    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some(token.as_str()));
    assert_eq!(storage.get(ROLE_KEY).as_deref(), Some("ADMIN"));
    let cached: UserInfo = serde_json::from_str(&storage.get(USER_KEY).unwrap()).unwrap();
    assert_eq!(cached.employee_id, 5);
    assert!(nav.visited().is_empty());
}

#[test]
fn establish_with_undecodable_token_drops_stale_caches() {
    let (session, storage, _) = store_with(None);
    storage.set(USER_KEY, "{}").unwrap();
    storage.set(ROLE_KEY, "ADMIN").unwrap();
    session.establish("not-a-jwt").unwrap();
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("not-a-jwt"));
    assert_eq!(storage.get(USER_KEY), None);
    assert_eq!(storage.get(ROLE_KEY), None);
}

#[test]
fn clear_removes_all_entries_then_redirects_to_root() {
    let token = make_token(&serde_json::json!({"employeeId": 5, "role": "USER"}));
    let (session, storage, nav) = store_with(None);
    session.establish(&token).unwrap();

    session.clear();

    for key in [TOKEN_KEY, USER_KEY, ROLE_KEY] {
        assert_eq!(storage.get(key), None, "{} still present", key);
    }
    assert_eq!(nav.visited(), vec![ROOT_PATH.to_string()]);
    assert_eq!(session.employee_id(), Err(SessionError::NoToken));
}

#[test]
fn discard_does_not_navigate() {
    let (session, storage, nav) = store_with(Some("x.y.z"));
    session.discard();
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert!(nav.visited().is_empty());
}
