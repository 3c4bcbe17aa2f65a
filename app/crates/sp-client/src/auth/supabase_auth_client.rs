use crate::auth::gotrue::{
    GoTrueSession, GoTrueUser, OtpRequest, RefreshRequest, StoredSession, VerifyRequest,
};
use crate::http::HttpApi;
use crate::{AuthEvent, AuthProvider, ClientError, Result as ClientResult};

use sp_core::RemoteSession;
use sp_db::LocalEntryRepository;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info, warn};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use tokio::sync::broadcast;

/// Local storage key of the persisted auth session.
pub const AUTH_SESSION_KEY: &str = "support-plus-auth-session";

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Auth provider speaking the GoTrue REST API, with the session persisted locally.
pub struct SupabaseAuthClient {
    http: HttpApi,
    api_key: Option<String>,
    entries: LocalEntryRepository,
    events: broadcast::Sender<AuthEvent>,
}

impl SupabaseAuthClient {
    pub fn new(
        auth_url: &str,
        api_key: Option<String>,
        client: ReqwestClient,
        entries: LocalEntryRepository,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            http: HttpApi::new(auth_url, client),
            api_key,
            entries,
            events,
        }
    }

    /// Ask the provider to e-mail a one-time code.
    pub async fn send_email_otp(&self, email: &str) -> ClientResult<()> {
        let body = OtpRequest {
            email,
            create_user: true,
        };
        let req = self.request(Method::POST, "/auth/v1/otp").json(&body);
        self.http.execute_empty(req).await?;
        info!("E-mail OTP requested");
        Ok(())
    }

    /// Exchange an e-mailed code for a session; publishes `SignedIn`.
    pub async fn verify_email_otp(&self, email: &str, code: &str) -> ClientResult<RemoteSession> {
        let body = VerifyRequest {
            kind: "email",
            email,
            token: code,
        };
        let req = self.request(Method::POST, "/auth/v1/verify").json(&body);
        let session: GoTrueSession = self.http.execute(req).await?;

        let stored = self.store_session(session).await?;
        let remote = stored.to_remote();
        info!("Signed in as {}", remote.user_id);
        self.publish(AuthEvent::SignedIn(remote.clone()));
        Ok(remote)
    }

    /// Trade the stored refresh token for a new session; publishes `TokenRefreshed`.
    pub async fn refresh_session(&self) -> ClientResult<RemoteSession> {
        let current = self.load_session().await?.ok_or_else(ClientError::no_session)?;

        let body = RefreshRequest {
            refresh_token: &current.refresh_token,
        };
        let req = self
            .request(Method::POST, "/auth/v1/token?grant_type=refresh_token")
            .json(&body);
        let session: GoTrueSession = self.http.execute(req).await?;

        let stored = self.store_session(session).await?;
        let remote = stored.to_remote();
        debug!("Session refreshed for {}", remote.user_id);
        self.publish(AuthEvent::TokenRefreshed(remote.clone()));
        Ok(remote)
    }

    /// Look up the user behind an access token.
    async fn fetch_user(&self, access_token: &str) -> ClientResult<GoTrueUser> {
        let req = self
            .request(Method::GET, "/auth/v1/user")
            .bearer_auth(access_token);
        self.http.execute(req).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let req = self.http.request(method, path);
        match &self.api_key {
            Some(key) => req.header("apikey", key),
            None => req,
        }
    }

    async fn store_session(&self, mut session: GoTrueSession) -> ClientResult<StoredSession> {
        let now = Utc::now();
        let user = match session.user.take() {
            Some(user) => user,
            None => self.fetch_user(&session.access_token).await?,
        };

        let stored = StoredSession::new(session, user, now);
        let json = serde_json::to_string(&stored)?;
        self.entries.set(AUTH_SESSION_KEY, &json).await?;
        Ok(stored)
    }

    async fn load_session(&self) -> ClientResult<Option<StoredSession>> {
        let Some(json) = self.entries.get(AUTH_SESSION_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&json) {
            Ok(stored) => Ok(Some(stored)),
            Err(e) => {
                warn!("Discarding unreadable stored session: {}", e);
                self.entries.remove(AUTH_SESSION_KEY).await?;
                Ok(None)
            }
        }
    }

    fn publish(&self, event: AuthEvent) {
        // No receivers is fine
        let _ = self.events.send(event);
    }
}

#[async_trait]
impl AuthProvider for SupabaseAuthClient {
    async fn get_current_session(&self) -> ClientResult<RemoteSession> {
        let stored = self.load_session().await?.ok_or_else(ClientError::no_session)?;

        if !stored.is_expired(Utc::now()) {
            return Ok(stored.to_remote());
        }

        debug!("Stored session expired, refreshing");
        match self.refresh_session().await {
            Ok(session) => Ok(session),
            Err(ClientError::Api { status, message, .. }) => {
                warn!("Session refresh rejected ({}): {}", status, message);
                self.entries.remove(AUTH_SESSION_KEY).await?;
                Err(ClientError::no_session())
            }
            Err(e) => Err(e),
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }

    /// Clears the local session first, then revokes it remotely on a best-effort basis.
    async fn sign_out(&self) -> ClientResult<()> {
        let stored = self.load_session().await?;
        self.entries.remove(AUTH_SESSION_KEY).await?;
        self.publish(AuthEvent::SignedOut);

        let Some(stored) = stored else {
            return Ok(());
        };

        let req = self
            .request(Method::POST, "/auth/v1/logout")
            .bearer_auth(&stored.access_token);
        self.http.execute_empty(req).await?;
        info!("Signed out");
        Ok(())
    }
}
