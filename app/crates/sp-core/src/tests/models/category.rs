use crate::Category;

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn test_category_as_str_round_trips_through_from_str() {
    for category in Category::ALL {
        assert_eq!(Category::from_str(category.as_str()).unwrap(), category);
    }
}

#[test]
fn test_category_from_str_rejects_unknown() {
    assert!(Category::from_str("astronaut").is_err());
    assert!(Category::from_str("large_family").is_err());
}

#[test]
fn test_category_default() {
    assert_eq!(Category::default(), Category::Pensioner);
}

#[test]
fn given_alias_codes_when_normalized_then_map_to_canonical() {
    assert_that!(Category::normalize("woman_55_plus"), some(eq(Category::Pensioner)));
    assert_that!(Category::normalize("invalid_group_2"), some(eq(Category::Disabled)));
    assert_that!(
        Category::normalize("many_children_family"),
        some(eq(Category::LargeFamily))
    );
    assert_that!(Category::normalize("teacher"), some(eq(Category::LowIncome)));
    assert_that!(Category::normalize("child_0_17"), some(eq(Category::Child)));
}

#[test]
fn given_underscored_canonical_name_when_normalized_then_dashes_are_restored() {
    assert_that!(Category::normalize("low_income"), some(eq(Category::LowIncome)));
}

#[test]
fn given_unknown_or_empty_code_when_normalized_then_none() {
    assert_that!(Category::normalize("astronaut"), none());
    assert_that!(Category::normalize(""), none());
}

#[test]
fn given_codes_with_duplicates_when_normalized_all_then_deduplicated_in_order() {
    let codes = ["man_60_plus", "veteran", "pensioner", "unknown", "veteran"];

    let categories = Category::normalize_all(&codes);

    assert_eq!(categories, vec![Category::Pensioner, Category::Veteran]);
}

#[test]
fn test_category_serializes_kebab_case() {
    let json = serde_json::to_string(&Category::LargeFamily).unwrap();
    assert_eq!(json, "\"large-family\"");
}
