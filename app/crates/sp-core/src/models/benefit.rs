//! Catalog benefit entry.

use crate::{BenefitType, Category, Profile};

use serde::{Deserialize, Serialize};

/// Region code meaning "available everywhere".
pub(crate) const ALL_REGIONS: &str = "all";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benefit {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub benefit_type: BenefitType,
    /// Raw target-group codes as published by the catalog
    #[serde(default)]
    pub target_groups: Vec<String>,
    #[serde(default)]
    pub regions: Vec<String>,
    pub valid_from: String,
    #[serde(default)]
    pub valid_to: Option<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_url: Option<String>,
    #[serde(default)]
    pub locations: Vec<BenefitLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings_per_month: Option<f64>,
    #[serde(default)]
    pub is_new: bool,
    /// Days until the benefit expires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u32>,
}

impl Benefit {
    pub fn categories(&self) -> Vec<Category> {
        Category::normalize_all(&self.target_groups)
    }

    /// Region matches (or the benefit is nationwide) and the profile's
    /// category is one of the target groups. Benefits without recognizable
    /// target groups are open to every category.
    pub fn is_available_for(&self, profile: &Profile) -> bool {
        region_matches(&self.regions, &profile.region)
            && category_matches(&self.categories(), profile.category)
    }
}

pub(crate) fn region_matches(regions: &[String], region: &str) -> bool {
    regions
        .iter()
        .any(|candidate| candidate == region || candidate == ALL_REGIONS)
        || region == ALL_REGIONS
}

pub(crate) fn category_matches(categories: &[Category], category: Category) -> bool {
    categories.is_empty() || categories.contains(&category)
}
