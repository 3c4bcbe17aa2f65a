pub mod benefit;
pub mod benefit_type;
pub mod cache_partition;
pub mod category;
pub mod identity;
pub mod identity_id;
pub mod medicine;
pub mod offer;
pub mod profile;
pub mod profile_update;
pub mod role;
