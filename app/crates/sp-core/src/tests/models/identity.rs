use crate::{DEFAULT_DISPLAY_NAME, Identity, IdentityId, PseudoIdentity, RemoteSession};

use googletest::prelude::*;

fn remote(id: &str) -> RemoteSession {
    RemoteSession {
        session_id: "access-token".to_string(),
        user_id: IdentityId::new(id),
        email: Some("anna@example.com".to_string()),
        phone: None,
        expires_at: None,
    }
}

#[test]
fn given_pseudo_identity_with_sms_id_when_created_then_tagged_unverified() {
    let pseudo = PseudoIdentity::new("sms:+79990000000", None, Some("+79990000000".into()));

    assert_that!(pseudo.unverified, eq(true));
}

#[test]
fn given_pseudo_identity_with_uuid_when_created_then_not_unverified() {
    let pseudo = PseudoIdentity::new("11111111-1111-1111-1111-111111111111", None, None);

    assert_that!(pseudo.unverified, eq(false));
}

#[test]
fn given_stored_pseudo_with_stale_tag_when_retagged_then_tag_follows_id() {
    let stored = PseudoIdentity {
        id: IdentityId::new("local-7"),
        email: None,
        phone: None,
        unverified: false,
    };

    assert_that!(stored.retagged().unverified, eq(true));
}

#[test]
fn given_remote_identity_when_queried_then_exposes_session_fields() {
    let identity = Identity::Remote(remote("11111111-1111-1111-1111-111111111111"));

    assert_that!(identity.is_remote(), eq(true));
    assert_that!(identity.has_verified_id(), eq(true));
    assert_that!(
        identity.id().map(IdentityId::as_str),
        some(eq("11111111-1111-1111-1111-111111111111"))
    );
    assert_that!(identity.email(), some(eq("anna@example.com")));
    assert_that!(identity.display_name(), eq("anna@example.com"));
}

#[test]
fn given_no_identity_when_queried_then_everything_empty() {
    let identity = Identity::default();

    assert_that!(identity.is_none(), eq(true));
    assert_that!(identity.id(), none());
    assert_that!(identity.has_verified_id(), eq(false));
    assert_that!(identity.display_name(), eq(DEFAULT_DISPLAY_NAME));
}

#[test]
fn given_pseudo_identity_with_phone_only_when_display_name_then_phone() {
    let identity = Identity::Pseudo(PseudoIdentity::new(
        "sms:+79990000000",
        Some(String::new()),
        Some("+79990000000".into()),
    ));

    assert_that!(identity.display_name(), eq("+79990000000"));
}

#[test]
fn given_remote_identity_when_serialized_then_session_id_is_omitted() {
    let identity = Identity::Remote(remote("11111111-1111-1111-1111-111111111111"));

    let json = serde_json::to_value(&identity).unwrap();

    assert_that!(json["kind"].as_str(), some(eq("remote")));
    assert_that!(json.get("session_id"), none());
}
