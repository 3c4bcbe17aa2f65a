mod http_profile_store;
mod profile_row;

pub use http_profile_store::HttpProfileStore;

use crate::Result as ClientResult;

use sp_core::{Identity, IdentityId, Profile, ProfileUpdate};

use async_trait::async_trait;
use serde::Serialize;

/// Fetch-or-create payload. Contact fields are only creation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnsureProfileRequest {
    pub auth_user_id: IdentityId,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl EnsureProfileRequest {
    /// Creation defaults taken from the identity; `None` when no identity is active.
    pub fn for_identity(identity: &Identity) -> Option<Self> {
        let id = identity.id()?;
        Some(Self {
            auth_user_id: id.clone(),
            full_name: Some(identity.display_name()),
            email: identity.email().map(String::from),
            phone: identity.phone().map(String::from),
        })
    }
}

/// Durable, remote profile storage keyed by identity id.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn ensure_profile(&self, request: &EnsureProfileRequest) -> ClientResult<Profile>;

    async fn update_profile(
        &self,
        auth_user_id: &IdentityId,
        changes: &ProfileUpdate,
    ) -> ClientResult<Profile>;

    async fn delete_profile(&self, auth_user_id: &IdentityId) -> ClientResult<()>;
}
