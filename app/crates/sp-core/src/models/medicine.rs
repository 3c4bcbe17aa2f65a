use serde::{Deserialize, Serialize};

/// Entry of the personal medicine tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prescribed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prescribed_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refill_date: Option<String>,
    #[serde(default)]
    pub related_benefit_ids: Vec<String>,
    #[serde(default)]
    pub related_offer_ids: Vec<String>,
    pub monthly_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<f64>,
}

impl Medicine {
    /// Monthly saving when a discounted price is known.
    pub fn monthly_savings(&self) -> f64 {
        self.discounted_price
            .map(|discounted| (self.monthly_price - discounted).max(0.0))
            .unwrap_or(0.0)
    }

    pub fn is_free(&self) -> bool {
        self.discounted_price == Some(0.0)
    }
}
