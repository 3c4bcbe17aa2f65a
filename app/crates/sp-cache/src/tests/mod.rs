
use crate::CacheStore;

use sp_core::{Benefit, IdentityId, Medicine, Offer};
use sp_db::{LocalDatabase, PartitionRepository};

use serde_json::json;

pub(crate) const STORE_NAME: &str = "support-plus-storage";

pub(crate) async fn open_store() -> (CacheStore, LocalDatabase) {
    let db = LocalDatabase::open_in_memory().await.unwrap();
    let store = CacheStore::open(PartitionRepository::new(db.pool().clone(), STORE_NAME))
        .await
        .unwrap();
    (store, db)
}

pub(crate) fn id(value: &str) -> IdentityId {
    IdentityId::new(value)
}

pub(crate) fn benefit(id: &str) -> Benefit {
    serde_json::from_value(json!({
        "id": id,
        "title": format!("Benefit {id}"),
        "description": "",
        "type": "social",
        "validFrom": "2026-01-01"
    }))
    .unwrap()
}

pub(crate) fn offer(id: &str) -> Offer {
    serde_json::from_value(json!({
        "id": id,
        "title": format!("Offer {id}"),
        "description": "",
        "partner": "Shop",
        "discount": 5.0,
        "validFrom": "2026-01-01",
        "validTo": "2026-12-31",
        "category": "food"
    }))
    .unwrap()
}

pub(crate) fn medicine(id: &str) -> Medicine {
    serde_json::from_value(json!({
        "id": id,
        "name": "Aspirin",
        "dosage": "100mg",
        "frequency": "daily",
        "monthlyPrice": 120.0
    }))
    .unwrap()
}

pub(crate) fn benefit_ids(benefits: &[Benefit]) -> Vec<&str> {
    benefits.iter().map(|b| b.id.as_str()).collect()
}
