pub mod error;
pub mod models;
pub mod phone;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::benefit::{Benefit, BenefitLocation};
pub use models::benefit_type::BenefitType;
pub use models::cache_partition::CachePartition;
pub use models::category::Category;
pub use models::identity::{Identity, PseudoIdentity, RemoteSession};
pub use models::identity_id::{IdentityId, is_verified_id_format};
pub use models::medicine::Medicine;
pub use models::offer::Offer;
pub use models::profile::{DEFAULT_DISPLAY_NAME, DEFAULT_REGION, Profile};
pub use models::profile_update::ProfileUpdate;
pub use models::role::Role;
pub use phone::{is_valid_phone, normalize_phone_to_e164};

#[cfg(test)]
mod tests;
