use super::*;
use crate::remote::ApiResponse;
use crate::test_support::{json_error, transport_error};

fn ok(body: serde_json::Value) -> ApiResult {
    Ok(ApiResponse {
        status: reqwest::StatusCode::OK,
        headers: reqwest::header::HeaderMap::new(),
        body: ResponseBody::Json(body),
    })
}

fn borrowing(id: i64, status: &str) -> Borrowing {
    Borrowing {
        borrowing_id: Some(id),
        status: Some(status.to_string()),
        ..Default::default()
    }
}

#[test]
fn not_found_is_an_empty_collection() {
    let out: Vec<Borrowing> =
        empty_on_not_found(Err(json_error(404, serde_json::json!({"message": "none"})))).unwrap();
    assert!(out.is_empty());
}

#[test]
fn other_failures_propagate() {
    let err = empty_on_not_found::<Borrowing>(Err(json_error(500, serde_json::json!({}))))
        .unwrap_err();
    assert!(classify::is_server_error(&err));
    assert!(empty_on_not_found::<Borrowing>(Err(transport_error("offline"))).is_err());
}

#[test]
fn successful_collections_decode_with_missing_relations() {
    let out: Vec<Borrowing> = empty_on_not_found(ok(serde_json::json!([
        {"borrowingId": 1, "status": "ACTIVE"},
        {"borrowingId": 2, "status": "RETURNED", "asset": {"assetName": "Monitor"}}
    ])))
    .unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].asset_name(), "");
    assert_eq!(out[1].asset_name(), "Monitor");
}

#[test]
fn filter_and_counts() {
    let all = vec![
        borrowing(1, "PENDING"),
        borrowing(2, "ACTIVE"),
        borrowing(3, "ACTIVE"),
        borrowing(4, "REJECTED"),
        borrowing(5, "OVERDUE"),
    ];
    assert_eq!(filter_by_status(&all, None).len(), 5);
    let active = filter_by_status(&all, Some(BorrowingStatus::Active));
    assert_eq!(
        active.iter().map(|b| b.borrowing_id).collect::<Vec<_>>(),
        vec![Some(2), Some(3)]
    );

    let counts = StatusCounts::tally(&all);
    assert_eq!(counts.all, 5);
    assert_eq!(counts.get(BorrowingStatus::Active), 2);
    assert_eq!(counts.get(BorrowingStatus::Returned), 0);
}

#[test]
fn held_means_active_or_approved() {
    assert!(borrowing(1, "ACTIVE").is_held());
    assert!(borrowing(1, "approved").is_held());
    assert!(!borrowing(1, "PENDING").is_held());
    assert!(!Borrowing::default().is_held());
}
