use super::*;
use serde_json::json;

// =============================================================
// decode
// =============================================================

#[test]
fn decode_reads_payload_claims() {
    let token = unsigned_token(&json!({"sub": "42", "exp": 1_700_000_000}));
    let claims = decode(&token).unwrap();
    assert_eq!(claims.get_path(&["sub"]), Some(&json!("42")));
    assert_eq!(claims.expires_at(), Some(1_700_000_000));
}

#[test]
fn decode_ignores_signature_content() {
    let token = unsigned_token(&json!({"username": "alice"}));
    let tampered = format!("{}.not-a-real-signature", token.rsplit_once('.').unwrap().0);
    assert_eq!(decode(&tampered).unwrap().display_name().as_deref(), Some("alice"));
}

#[test]
fn decode_accepts_padded_payload() {
    use base64::engine::general_purpose::URL_SAFE;
    let payload = URL_SAFE.encode(r#"{"name":"Bo"}"#);
    assert!(payload.ends_with('='));
    let claims = decode(&format!("h.{payload}.s")).unwrap();
    assert_eq!(claims.display_name().as_deref(), Some("Bo"));
}

#[test]
fn decode_rejects_token_without_payload() {
    assert_eq!(decode("justonesegment"), Err(DecodeError::MissingPayload));
    assert_eq!(decode("header..sig"), Err(DecodeError::MissingPayload));
    assert_eq!(decode(""), Err(DecodeError::MissingPayload));
}

#[test]
fn decode_rejects_invalid_base64() {
    assert!(matches!(decode("h.!!!.s"), Err(DecodeError::Base64(_))));
}

#[test]
fn decode_rejects_non_json_payload() {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let payload = URL_SAFE_NO_PAD.encode("not json");
    assert!(matches!(decode(&format!("h.{payload}.s")), Err(DecodeError::Json(_))));
}

#[test]
fn decode_rejects_non_object_payload() {
    let token = unsigned_token(&json!(["username", "alice"]));
    assert_eq!(decode(&token), Err(DecodeError::NotAnObject));
}

// =============================================================
// display name priority
// =============================================================

#[test]
fn username_claim_wins_over_all_others() {
    let token = unsigned_token(&json!({
        "sub": "7",
        "preferred_username": "pref",
        "name": "Full Name",
        "user": {"username": "nested"},
        "username": "alice",
    }));
    assert_eq!(display_name(&token).as_deref(), Some("alice"));
}

#[test]
fn nested_user_username_beats_name() {
    let token = unsigned_token(&json!({"user": {"username": "nested"}, "name": "Full Name", "sub": "7"}));
    assert_eq!(display_name(&token).as_deref(), Some("nested"));
}

#[test]
fn name_beats_preferred_username() {
    let token = unsigned_token(&json!({"name": "Full Name", "preferred_username": "pref"}));
    assert_eq!(display_name(&token).as_deref(), Some("Full Name"));
}

#[test]
fn preferred_username_beats_sub() {
    let token = unsigned_token(&json!({"preferred_username": "pref", "sub": "7"}));
    assert_eq!(display_name(&token).as_deref(), Some("pref"));
}

#[test]
fn sub_only_token_uses_sub() {
    let token = unsigned_token(&json!({"sub": "user-7", "exp": 1}));
    assert_eq!(display_name(&token).as_deref(), Some("user-7"));
}

#[test]
fn numeric_sub_is_rendered_as_text() {
    let token = unsigned_token(&json!({"sub": 7}));
    assert_eq!(display_name(&token).as_deref(), Some("7"));
}

#[test]
fn whole_float_sub_renders_without_fraction() {
    let token = unsigned_token(&json!({"sub": 7.0}));
    assert_eq!(display_name(&token).as_deref(), Some("7"));
}

#[test]
fn fractional_sub_keeps_fraction() {
    let token = unsigned_token(&json!({"sub": 7.5}));
    assert_eq!(display_name(&token).as_deref(), Some("7.5"));
}

#[test]
fn empty_or_null_claims_fall_through() {
    let token = unsigned_token(&json!({"username": "", "user": null, "name": null, "sub": "s"}));
    assert_eq!(display_name(&token).as_deref(), Some("s"));
}

#[test]
fn no_candidate_claims_gives_none() {
    let token = unsigned_token(&json!({"exp": 10, "user_id": 3}));
    assert_eq!(display_name(&token), None);
}

#[test]
fn malformed_token_gives_no_identity() {
    assert_eq!(display_name("garbage"), None);
    assert_eq!(display_name("a.b.c"), None);
}

#[test]
fn placeholder_used_when_identity_missing() {
    assert_eq!(display_name_or_placeholder(None), "there");
    assert_eq!(display_name_or_placeholder(Some("garbage")), "there");
    let token = unsigned_token(&json!({"username": "alice"}));
    assert_eq!(display_name_or_placeholder(Some(&token)), "alice");
}

// =============================================================
// expiry
// =============================================================

#[test]
fn expires_at_missing_is_none() {
    let token = unsigned_token(&json!({"sub": "1"}));
    assert_eq!(decode(&token).unwrap().expires_at(), None);
}

#[test]
fn expires_at_accepts_numeric_string_and_float() {
    let token = unsigned_token(&json!({"exp": "1700000000"}));
    assert_eq!(decode(&token).unwrap().expires_at(), Some(1_700_000_000));
    let token = unsigned_token(&json!({"exp": 1_700_000_000.75}));
    assert_eq!(decode(&token).unwrap().expires_at(), Some(1_700_000_000));
}

#[test]
fn expires_at_unparseable_is_none() {
    let token = unsigned_token(&json!({"exp": "tomorrow"}));
    assert_eq!(decode(&token).unwrap().expires_at(), None);
    let token = unsigned_token(&json!({"exp": {"at": 1}}));
    assert_eq!(decode(&token).unwrap().expires_at(), None);
}
