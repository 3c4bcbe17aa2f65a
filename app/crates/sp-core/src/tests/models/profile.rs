use crate::{Category, DEFAULT_REGION, IdentityId, Profile, ProfileUpdate, Role};

use googletest::prelude::*;

#[test]
fn given_pseudo_id_when_fallback_built_then_uses_local_defaults() {
    let id = IdentityId::new("sms:+1234567890");

    let profile = Profile::fallback(&id, None, Some("+1234567890"));

    assert_that!(profile.id, eq("sms:+1234567890"));
    assert_that!(profile.auth_user_id, eq(&id));
    assert_that!(profile.region, eq(DEFAULT_REGION));
    assert_that!(profile.category, eq(Category::Pensioner));
    assert_that!(profile.role, eq(Role::Myself));
    assert_that!(profile.simple_mode_enabled, eq(true));
    assert_that!(profile.interests, is_empty());
    assert_that!(profile.name, some(eq("+1234567890")));
}

#[test]
fn given_no_contacts_when_fallback_built_then_generic_name() {
    let profile = Profile::fallback(&IdentityId::new("local-1"), None, None);

    assert_that!(profile.name, some(eq("User")));
}

#[test]
fn given_partial_update_when_applied_then_only_set_fields_change() {
    let mut profile = Profile::fallback(&IdentityId::new("local-1"), Some("a@b.c"), None);
    let update = ProfileUpdate {
        region: Some("77".to_string()),
        category: Some(Category::Veteran),
        interests: Some(vec!["transport".to_string()]),
        ..Default::default()
    };

    profile.apply(&update);

    assert_that!(profile.region, eq("77"));
    assert_that!(profile.category, eq(Category::Veteran));
    assert_eq!(profile.interests, vec!["transport".to_string()]);
    assert_that!(profile.email, some(eq("a@b.c")));
    assert_that!(profile.simple_mode_enabled, eq(true));
}

#[test]
fn given_profile_when_serialized_then_camel_case_fields() {
    let profile = Profile::fallback(&IdentityId::new("local-1"), None, None);

    let json = serde_json::to_value(&profile).unwrap();

    assert_that!(json["authUserId"].as_str(), some(eq("local-1")));
    assert_that!(json["simpleModeEnabled"].as_bool(), some(eq(true)));
    assert_that!(json["role"].as_str(), some(eq("self")));
}
