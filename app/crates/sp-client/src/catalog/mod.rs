mod http_catalog;

pub use http_catalog::HttpCatalog;

use crate::Result as ClientResult;

use sp_core::{Benefit, Medicine, Offer, Profile};

use async_trait::async_trait;

/// Read-only source of the benefit, offer and medicine catalogs.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn benefits(&self) -> ClientResult<Vec<Benefit>>;

    async fn offers(&self) -> ClientResult<Vec<Offer>>;

    async fn medicines(&self) -> ClientResult<Vec<Medicine>>;

    async fn benefits_for_profile(&self, profile: &Profile) -> ClientResult<Vec<Benefit>> {
        let benefits = self.benefits().await?;
        Ok(benefits
            .into_iter()
            .filter(|benefit| benefit.is_available_for(profile))
            .collect())
    }

    async fn offers_for_profile(&self, profile: &Profile) -> ClientResult<Vec<Offer>> {
        let offers = self.offers().await?;
        Ok(offers
            .into_iter()
            .filter(|offer| offer.is_available_for(profile))
            .collect())
    }
}
