use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::*;
use crate::test_support::make_token;

#[test]
fn decodes_employee_id_from_payload() {
    let token = make_token(&serde_json::json!({"employeeId": 42, "role": "USER"}));
    let claims = decode_payload(&token).unwrap();
    assert_eq!(employee_id(&claims).unwrap(), 42);
}

#[test]
fn accepts_standard_alphabet_with_padding() {
    let payload = STANDARD.encode(br#"{"employeeId":7,"name":"Ana ~~~?"}"#);
    assert!(payload.contains('=') || payload.contains('/') || payload.contains('+'));
    let token = format!("h.{}.s", payload);
    let claims = decode_payload(&token).unwrap();
    assert_eq!(employee_id(&claims).unwrap(), 7);
}

#[test]
fn numeric_string_employee_id_is_accepted() {
    let token = make_token(&serde_json::json!({"employeeId": "15"}));
    assert_eq!(employee_id(&decode_payload(&token).unwrap()).unwrap(), 15);
}

#[test]
fn zero_or_missing_employee_id_is_invalid() {
    for payload in [
        serde_json::json!({"employeeId": 0}),
        serde_json::json!({"name": "x"}),
        serde_json::json!({"employeeId": null}),
        serde_json::json!({"employeeId": "abc"}),
    ] {
        let claims = decode_payload(&make_token(&payload)).unwrap();
        assert!(matches!(
            employee_id(&claims),
            Err(SessionError::InvalidToken(_))
        ));
    }
}

#[test]
fn rejects_wrong_segment_count() {
    assert!(matches!(
        decode_payload("only.two"),
        Err(SessionError::InvalidToken(_))
    ));
    assert!(matches!(
        decode_payload("a.b.c.d"),
        Err(SessionError::InvalidToken(_))
    ));
}

#[test]
fn rejects_non_base64_and_non_json_payloads() {
    assert!(decode_payload("h.!!!not-base64!!!.s").is_err());
    let not_json = URL_SAFE_NO_PAD.encode(b"plain words");
    assert!(decode_payload(&format!("h.{}.s", not_json)).is_err());
    let array = URL_SAFE_NO_PAD.encode(b"[1,2]");
    assert!(decode_payload(&format!("h.{}.s", array)).is_err());
}

#[test]
fn email_falls_back_to_subject() {
    let token = make_token(&serde_json::json!({
        "employeeId": 3,
        "name": "Ravi",
        "sub": "ravi@example.com",
        "role": "ADMIN"
    }));
    let info = user_info(&decode_payload(&token).unwrap()).unwrap();
    assert_eq!(info.email.as_deref(), Some("ravi@example.com"));
    assert_eq!(info.name.as_deref(), Some("Ravi"));
    assert!(info.is_admin());
}

#[test]
fn explicit_email_wins_over_subject() {
    let token = make_token(&serde_json::json!({
        "employeeId": 3,
        "email": "a@example.com",
        "sub": "b@example.com"
    }));
    let info = user_info(&decode_payload(&token).unwrap()).unwrap();
    assert_eq!(info.email.as_deref(), Some("a@example.com"));
    assert_eq!(info.role, None);
    assert!(!info.is_admin());
}
