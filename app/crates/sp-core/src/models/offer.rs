use crate::Category;
use crate::Profile;
use crate::models::benefit::{category_matches, region_matches};

use serde::{Deserialize, Serialize};

/// Partner discount offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub title: String,
    pub description: String,
    pub partner: String,
    /// Discount in percent
    pub discount: f64,
    pub valid_from: String,
    pub valid_to: String,
    #[serde(default)]
    pub target_groups: Vec<String>,
    #[serde(default)]
    pub regions: Vec<String>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Offer {
    pub fn is_available_for(&self, profile: &Profile) -> bool {
        region_matches(&self.regions, &profile.region)
            && category_matches(
                &Category::normalize_all(&self.target_groups),
                profile.category,
            )
    }
}
