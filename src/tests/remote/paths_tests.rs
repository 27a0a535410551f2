use super::*;

#[test]
fn path_segments_are_percent_encoded() {
    assert_eq!(seg("Laptop"), "Laptop");
    assert_eq!(seg("Laptop Bags"), "Laptop%20Bags");
    assert_eq!(seg("a/b?c"), "a%2Fb%3Fc");
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let http = HttpClient::bare("http://localhost:8092/api/v1/").unwrap();
    assert_eq!(http.base_url(), "http://localhost:8092/api/v1");
    assert_eq!(
        http.url("/assets/getall"),
        "http://localhost:8092/api/v1/assets/getall"
    );
}

#[test]
fn response_body_parsing() {
    assert_eq!(ResponseBody::from_bytes(b""), ResponseBody::Empty);
    assert_eq!(ResponseBody::from_bytes(b"  \n"), ResponseBody::Empty);
    assert_eq!(
        ResponseBody::from_bytes(b"Asset not found"),
        ResponseBody::Text("Asset not found".to_string())
    );
    assert_eq!(
        ResponseBody::from_bytes(br#"{"message":"x"}"#),
        ResponseBody::Json(serde_json::json!({"message": "x"}))
    );
    assert_eq!(
        ResponseBody::from_bytes(br#""quoted""#).as_text(),
        Some("quoted")
    );
}

#[test]
fn response_len_counts_array_items_only() {
    let resp = |body| ApiResponse {
        status: reqwest::StatusCode::OK,
        headers: reqwest::header::HeaderMap::new(),
        body,
    };
    assert_eq!(resp(ResponseBody::Json(serde_json::json!([1, 2, 3]))).len(), 3);
    assert_eq!(resp(ResponseBody::Json(serde_json::json!({"a": 1}))).len(), 0);
    assert!(resp(ResponseBody::Empty).is_empty());

    let typed: Vec<crate::model::Asset> = resp(ResponseBody::Json(serde_json::json!([
        {"assetId": 1, "assetName": "Dell XPS", "category": {"categoryName": "Laptop"}}
    ])))
    .json()
    .unwrap();
    assert_eq!(typed[0].category_name(), "Laptop");
}

#[test]
fn request_body_json_keeps_payload_verbatim() {
    let payload = serde_json::json!({"employeeId": 4, "assetId": 11, "extra": [1, 2]});
    match RequestBody::json(&payload).unwrap() {
        RequestBody::Json(v) => assert_eq!(v, payload),
        _ => panic!("expected json body"),
    }
}
