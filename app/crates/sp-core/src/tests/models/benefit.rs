use crate::{Benefit, Category, IdentityId, Medicine, Offer, Profile};

use googletest::prelude::*;
use serde_json::json;

fn benefit_json() -> serde_json::Value {
    json!({
        "id": "b-42",
        "title": "Free public transport",
        "description": "Free rides on city buses",
        "type": "transport",
        "targetGroups": ["woman_55_plus", "veteran"],
        "regions": ["77"],
        "validFrom": "2024-01-01",
        "validTo": null,
        "requirements": ["Pension certificate"],
        "steps": ["Apply at the MFC"],
        "documents": ["Passport"],
        "isNew": true,
        "expiresIn": 30
    })
}

fn profile(region: &str, category: Category) -> Profile {
    let mut profile = Profile::fallback(&IdentityId::new("local-1"), None, None);
    profile.region = region.to_string();
    profile.category = category;
    profile
}

#[test]
fn given_catalog_json_when_deserialized_then_optional_fields_default() {
    let benefit: Benefit = serde_json::from_value(benefit_json()).unwrap();

    assert_that!(benefit.id, eq("b-42"));
    assert_that!(benefit.is_new, eq(true));
    assert_that!(benefit.expires_in, some(eq(30)));
    assert_that!(benefit.tags, is_empty());
    assert_that!(benefit.partner, none());
}

#[test]
fn given_matching_region_and_alias_group_when_checked_then_available() {
    let benefit: Benefit = serde_json::from_value(benefit_json()).unwrap();

    assert_that!(
        benefit.is_available_for(&profile("77", Category::Pensioner)),
        eq(true)
    );
}

#[test]
fn given_other_region_when_checked_then_not_available() {
    let benefit: Benefit = serde_json::from_value(benefit_json()).unwrap();

    assert_that!(
        benefit.is_available_for(&profile("50", Category::Pensioner)),
        eq(false)
    );
}

#[test]
fn given_other_category_when_checked_then_not_available() {
    let benefit: Benefit = serde_json::from_value(benefit_json()).unwrap();

    assert_that!(
        benefit.is_available_for(&profile("77", Category::Child)),
        eq(false)
    );
}

#[test]
fn given_nationwide_offer_without_groups_when_checked_then_available_to_everyone() {
    let offer: Offer = serde_json::from_value(json!({
        "id": "o-1",
        "title": "Pharmacy discount",
        "description": "10% off",
        "partner": "Apteka",
        "discount": 10.0,
        "validFrom": "2024-01-01",
        "validTo": "2025-01-01",
        "targetGroups": [],
        "regions": ["all"],
        "category": "health"
    }))
    .unwrap();

    assert_that!(
        offer.is_available_for(&profile("50", Category::LowIncome)),
        eq(true)
    );
}

#[test]
fn given_discounted_medicine_when_savings_computed_then_difference() {
    let medicine: Medicine = serde_json::from_value(json!({
        "id": "m-1",
        "name": "Metformin",
        "dosage": "500 mg",
        "frequency": "twice a day",
        "monthlyPrice": 450.0,
        "discountedPrice": 0.0
    }))
    .unwrap();

    assert_that!(medicine.monthly_savings(), eq(450.0));
    assert_that!(medicine.is_free(), eq(true));
    assert_that!(medicine.related_benefit_ids, is_empty());
}
