use crate::{IdentityId, is_verified_id_format};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_random_v4_uuid_when_checked_then_verified() {
    let id = IdentityId::from(Uuid::new_v4());

    assert_that!(id.is_verified_format(), eq(true));
}

#[test]
fn given_repeated_digit_uuid_when_checked_then_verified() {
    assert_that!(
        is_verified_id_format("11111111-1111-1111-1111-111111111111"),
        eq(true)
    );
}

#[test]
fn given_uppercase_uuid_when_checked_then_verified() {
    assert_that!(
        is_verified_id_format("A1B2C3D4-E5F6-4A7B-8C9D-0E1F2A3B4C5D"),
        eq(true)
    );
}

#[test]
fn given_sms_pseudo_id_when_checked_then_not_verified() {
    let id = IdentityId::new("sms:+1234567890");

    assert_that!(id.is_verified_format(), eq(false));
}

#[test]
fn given_simple_uuid_without_hyphens_when_checked_then_not_verified() {
    assert_that!(
        is_verified_id_format("a1b2c3d4e5f64a7b8c9d0e1f2a3b4c5d"),
        eq(false)
    );
}

#[test]
fn given_braced_uuid_when_checked_then_not_verified() {
    assert_that!(
        is_verified_id_format("{a1b2c3d4-e5f6-4a7b-8c9d-0e1f2a3b4c5d}"),
        eq(false)
    );
}

#[test]
fn given_version_zero_uuid_when_checked_then_not_verified() {
    assert_that!(
        is_verified_id_format("00000000-0000-0000-0000-000000000000"),
        eq(false)
    );
}

#[test]
fn given_version_seven_uuid_when_checked_then_not_verified() {
    assert_that!(
        is_verified_id_format("018f2b6e-1c2d-7a3b-8c4d-5e6f7a8b9c0d"),
        eq(false)
    );
}

#[test]
fn given_non_hex_digit_when_checked_then_not_verified() {
    assert_that!(
        is_verified_id_format("g1b2c3d4-e5f6-4a7b-8c9d-0e1f2a3b4c5d"),
        eq(false)
    );
}

#[test]
fn given_blank_id_when_checked_then_empty() {
    assert_that!(IdentityId::new("   ").is_empty(), eq(true));
    assert_that!(IdentityId::new("local-1").is_empty(), eq(false));
}

#[test]
fn given_owned_user_id_string_when_converted_then_id_keeps_value() {
    // Given
    let user_id = String::from("a1b2c3d4-e5f6-4a7b-8c9d-0e1f2a3b4c5d");

    // When
    let id: IdentityId = user_id.into();

    // Then
    assert_that!(id.as_str(), eq("a1b2c3d4-e5f6-4a7b-8c9d-0e1f2a3b4c5d"));
    assert_that!(id.is_verified_format(), eq(true));
}
