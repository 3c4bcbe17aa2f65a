use sp_core::{Benefit, CachePartition, IdentityId, Medicine, Offer};

use serde_json::json;

pub fn identity(id: &str) -> IdentityId {
    IdentityId::new(id)
}

pub fn benefit(id: &str) -> Benefit {
    serde_json::from_value(json!({
        "id": id,
        "title": format!("Benefit {id}"),
        "description": "Monthly transport allowance",
        "type": "transport",
        "targetGroups": ["pensioner"],
        "regions": ["all"],
        "validFrom": "2026-01-01"
    }))
    .expect("valid benefit fixture")
}

pub fn offer(id: &str) -> Offer {
    serde_json::from_value(json!({
        "id": id,
        "title": format!("Offer {id}"),
        "description": "Pharmacy discount",
        "partner": "Pharmacy",
        "discount": 10.0,
        "validFrom": "2026-01-01",
        "validTo": "2026-12-31",
        "category": "health"
    }))
    .expect("valid offer fixture")
}

pub fn medicine(id: &str) -> Medicine {
    serde_json::from_value(json!({
        "id": id,
        "name": "Metformin",
        "dosage": "500mg",
        "frequency": "twice a day",
        "monthlyPrice": 420.0,
        "discountedPrice": 0.0
    }))
    .expect("valid medicine fixture")
}

pub fn partition_with(benefit_ids: &[&str], hidden: &[&str]) -> CachePartition {
    CachePartition {
        benefits: benefit_ids.iter().map(|id| benefit(id)).collect(),
        offers: vec![offer("o-1")],
        medicines: vec![medicine("m-1")],
        hidden_benefit_ids: hidden.iter().map(|id| id.to_string()).collect(),
    }
}
