use crate::{Benefit, Medicine, Offer};

use serde::{Deserialize, Serialize};

/// Catalog working set of one identity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachePartition {
    #[serde(default)]
    pub benefits: Vec<Benefit>,
    #[serde(default)]
    pub offers: Vec<Offer>,
    #[serde(default)]
    pub medicines: Vec<Medicine>,
    /// Insertion ordered, no duplicates
    #[serde(default)]
    pub hidden_benefit_ids: Vec<String>,
}

impl CachePartition {
    pub fn is_hidden(&self, benefit_id: &str) -> bool {
        self.hidden_benefit_ids.iter().any(|id| id == benefit_id)
    }

    /// Remove `benefit_id` from the hidden set if present, add it otherwise.
    /// Returns whether the id is hidden afterwards.
    pub fn toggle_hidden(&mut self, benefit_id: &str) -> bool {
        if self.is_hidden(benefit_id) {
            self.hidden_benefit_ids.retain(|id| id != benefit_id);
            false
        } else {
            self.hidden_benefit_ids.push(benefit_id.to_string());
            true
        }
    }

    /// Benefits that are not hidden.
    pub fn shown_benefits(&self) -> impl Iterator<Item = &Benefit> {
        self.benefits
            .iter()
            .filter(|benefit| !self.is_hidden(&benefit.id))
    }
}
