use super::*;

#[test]
fn bearer_sets_authorization_header() {
    let req = ApiRequest::get("/api/user/profile").bearer("tok-1");
    assert_eq!(req.header_value("authorization"), Some("Bearer tok-1"));
    assert_eq!(req.method, HttpMethod::Get);
}

#[test]
fn header_value_missing_returns_none() {
    let req = ApiRequest::post("/api/auth/profile");
    assert_eq!(req.header_value("X-Session-ID"), None);
    assert_eq!(req.body, None);
}

#[test]
fn response_json_rejects_non_success_status() {
    let resp = ApiResponse::new(401, "{\"detail\":\"Invalid or expired session\"}");
    let err = resp.json::<serde_json::Value>().unwrap_err();
    assert_eq!(err, ApiError::Status(401));
}

#[test]
fn response_json_reports_malformed_body() {
    let resp = ApiResponse::new(200, "<html>");
    assert!(matches!(resp.json::<serde_json::Value>(), Err(ApiError::Decode(_))));
}

#[test]
fn response_ok_covers_2xx_range() {
    assert!(ApiResponse::new(200, "").ok());
    assert!(ApiResponse::new(204, "").ok());
    assert!(!ApiResponse::new(302, "").ok());
    assert!(!ApiResponse::new(500, "").ok());
}

#[test]
fn offline_transport_is_unavailable() {
    let result = futures::executor::block_on(OfflineTransport.send(ApiRequest::get("/api/blog/posts")));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn api_error_messages_are_descriptive() {
    assert_eq!(ApiError::Status(404).to_string(), "unexpected status: 404");
    assert_eq!(ApiError::Transport("dns".to_owned()).to_string(), "request failed: dns");
}
