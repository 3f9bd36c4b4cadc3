use super::*;

fn sample_user() -> User {
    User {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        display_name: "A".to_owned(),
        avatar_url: None,
        email_verified: false,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(state, AuthState::initializing());
}

#[test]
fn is_authenticated_tracks_user_presence() {
    let mut state = AuthState { user: None, loading: false };
    assert!(!state.is_authenticated());

    state.user = Some(sample_user());
    assert!(state.is_authenticated());

    state.loading = true;
    assert!(state.is_authenticated());

    state.user = None;
    assert!(!state.is_authenticated());
}

// =============================================================
// User serde
// =============================================================

#[test]
fn user_deserializes_minimal_backend_shape() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "email": "a@b.com",
        "name": "A"
    }))
    .unwrap();
    assert_eq!(user, sample_user());
}

#[test]
fn user_accepts_camel_case_aliases() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u2",
        "email": "c@d.com",
        "displayName": "Cee",
        "avatarUrl": "https://cdn.example.com/c.png",
        "emailVerified": true
    }))
    .unwrap();
    assert_eq!(user.display_name, "Cee");
    assert_eq!(user.avatar_url.as_deref(), Some("https://cdn.example.com/c.png"));
    assert!(user.email_verified);
}

#[test]
fn user_accepts_snake_case_aliases() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u3",
        "email": "e@f.com",
        "display_name": "Eff",
        "avatar_url": null,
        "email_verified": true
    }))
    .unwrap();
    assert_eq!(user.display_name, "Eff");
    assert!(user.avatar_url.is_none());
    assert!(user.email_verified);
}

#[test]
fn user_missing_email_is_rejected() {
    let result = serde_json::from_value::<User>(serde_json::json!({ "id": "u1", "name": "A" }));
    assert!(result.is_err());
}

#[test]
fn user_serializes_with_wire_names() {
    let value = serde_json::to_value(sample_user()).unwrap();
    assert_eq!(value["name"], "A");
    assert_eq!(value["emailVerified"], false);
    assert!(value.get("avatarUrl").is_none());
}
