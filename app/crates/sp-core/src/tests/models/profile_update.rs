use crate::{CoreError, ProfileUpdate};

use googletest::prelude::*;

#[test]
fn given_default_update_when_checked_then_empty() {
    assert_that!(ProfileUpdate::default().is_empty(), eq(true));
}

#[test]
fn given_formatted_document_number_when_validated_then_ok() {
    let update = ProfileUpdate {
        document_number: Some("123-456-789 01".to_string()),
        ..Default::default()
    };

    assert_that!(update.validate(), ok(anything()));
}

#[test]
fn given_short_document_number_when_validated_then_error() {
    let update = ProfileUpdate {
        document_number: Some("12345".to_string()),
        ..Default::default()
    };

    let result = update.validate();

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_blank_region_when_validated_then_error() {
    let update = ProfileUpdate {
        region: Some("  ".to_string()),
        ..Default::default()
    };

    assert_that!(update.validate(), err(anything()));
}

#[test]
fn given_update_when_serialized_then_unset_fields_omitted_and_snils_renamed() {
    let update = ProfileUpdate {
        full_name: Some("Anna".to_string()),
        document_number: Some("12345678901".to_string()),
        ..Default::default()
    };

    let json = serde_json::to_value(&update).unwrap();

    assert_that!(json["fullName"].as_str(), some(eq("Anna")));
    assert_that!(json["snils"].as_str(), some(eq("12345678901")));
    assert_that!(json.get("region"), none());
}
