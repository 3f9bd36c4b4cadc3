use super::*;

// =============================================================
// Routes
// =============================================================

#[test]
fn auth_routes_hang_off_api_base() {
    let config = ClientConfig::default();
    assert_eq!(config.endpoint(ME_PATH), "/api/auth/me");
    assert_eq!(config.endpoint(LOGIN_PATH), "/api/auth/login");
    assert_eq!(config.endpoint(LOGOUT_PATH), "/api/auth/logout");
}

#[test]
fn backend_keeps_its_config() {
    let backend = HttpAuthBackend::new(ClientConfig::default());
    assert_eq!(backend.config().api_base_url, "/api");
}

// =============================================================
// auth/me
// =============================================================

#[test]
fn me_ok_with_user_is_authenticated() {
    let body = r#"{"authenticated": true, "user": {"id": "u1", "email": "a@b.com", "name": "A"}}"#;
    match me_result(200, body).unwrap() {
        UserLookup::Authenticated(user) => assert_eq!(user.id, "u1"),
        UserLookup::Unauthenticated => panic!("expected an authenticated lookup"),
    }
}

#[test]
fn me_unauthorized_status_means_no_session() {
    assert_eq!(me_result(401, "").unwrap(), UserLookup::Unauthenticated);
    assert_eq!(me_result(403, "{}").unwrap(), UserLookup::Unauthenticated);
}

#[test]
fn me_server_error_is_status_error() {
    assert_eq!(me_result(500, "boom").unwrap_err(), BackendError::Status(500));
}

#[test]
fn me_malformed_body_is_malformed_error() {
    assert!(matches!(me_result(200, "not json").unwrap_err(), BackendError::Malformed(_)));
}

#[test]
fn token_cleared_when_backend_reports_no_session_in_body() {
    let lookup = me_result(200, r#"{"authenticated": false}"#);
    assert!(clears_token(&lookup));
}

#[test]
fn token_cleared_on_unauthorized_status() {
    assert!(clears_token(&me_result(401, "")));
}

#[test]
fn token_kept_for_signed_in_user_and_for_failures() {
    let body = r#"{"authenticated": true, "user": {"id": "u1", "email": "a@b.com", "name": "A"}}"#;
    assert!(!clears_token(&me_result(200, body)));
    assert!(!clears_token(&me_result(500, "boom")));
    assert!(!clears_token(&me_result(200, "not json")));
}

// =============================================================
// auth/login and auth/logout
// =============================================================

#[test]
fn login_ok_returns_login_url() {
    let body = r#"{"success": true, "loginUrl": "https://sso.example.com/authorize"}"#;
    assert_eq!(login_result(200, body).unwrap(), "https://sso.example.com/authorize");
}

#[test]
fn login_success_false_is_rejected() {
    assert_eq!(login_result(200, r#"{"success": false}"#).unwrap_err(), BackendError::Rejected("login"));
}

#[test]
fn login_bad_gateway_is_status_error() {
    assert_eq!(login_result(502, "").unwrap_err(), BackendError::Status(502));
}

#[test]
fn logout_ok_with_and_without_url() {
    assert_eq!(
        logout_result(200, r#"{"success": true, "logoutUrl": "https://x"}"#).unwrap(),
        Some("https://x".to_owned())
    );
    assert_eq!(logout_result(204, r#"{"success": true}"#).unwrap(), None);
}

#[test]
fn logout_unauthorized_is_status_error() {
    assert_eq!(logout_result(401, "").unwrap_err(), BackendError::Status(401));
}

// =============================================================
// Outside the browser
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn calls_report_transport_error_outside_browser() {
    let backend = HttpAuthBackend::new(ClientConfig::default());
    let err = futures::executor::block_on(backend.current_user()).unwrap_err();
    assert!(matches!(err, BackendError::Transport(_)));
    let err = futures::executor::block_on(backend.begin_login("https://app/auth/callback")).unwrap_err();
    assert!(matches!(err, BackendError::Transport(_)));
}
