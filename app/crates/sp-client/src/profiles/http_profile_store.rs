use crate::http::HttpApi;
use crate::profiles::profile_row::ProfileEnvelope;
use crate::{ClientError, EnsureProfileRequest, ProfileStore, Result as ClientResult};

use sp_core::{IdentityId, Profile, ProfileUpdate};

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method};

/// Profile store behind the `/profiles` REST endpoints.
pub struct HttpProfileStore {
    http: HttpApi,
}

impl HttpProfileStore {
    pub fn new(base_url: &str, client: ReqwestClient) -> Self {
        Self {
            http: HttpApi::new(base_url, client),
        }
    }

    fn ensure_verified(id: &IdentityId) -> ClientResult<()> {
        if id.is_verified_format() {
            Ok(())
        } else {
            Err(ClientError::invalid_identity(id))
        }
    }
}

#[async_trait]
impl ProfileStore for HttpProfileStore {
    async fn ensure_profile(&self, request: &EnsureProfileRequest) -> ClientResult<Profile> {
        Self::ensure_verified(&request.auth_user_id)?;

        let req = self
            .http
            .request(Method::POST, "/profiles/ensure")
            .json(request);
        let envelope: ProfileEnvelope = self.http.execute(req).await?;
        debug!("Profile ensured for {}", request.auth_user_id);
        Ok(envelope.profile.into())
    }

    async fn update_profile(
        &self,
        auth_user_id: &IdentityId,
        changes: &ProfileUpdate,
    ) -> ClientResult<Profile> {
        Self::ensure_verified(auth_user_id)?;

        let req = self
            .http
            .request(Method::PUT, &format!("/profiles/{}", auth_user_id))
            .json(changes);
        let envelope: ProfileEnvelope = self.http.execute(req).await?;
        Ok(envelope.profile.into())
    }

    async fn delete_profile(&self, auth_user_id: &IdentityId) -> ClientResult<()> {
        Self::ensure_verified(auth_user_id)?;

        let req = self
            .http
            .request(Method::DELETE, &format!("/profiles/{}", auth_user_id));
        self.http.execute_empty(req).await
    }
}
