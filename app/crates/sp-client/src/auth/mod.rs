mod gotrue;
mod supabase_auth_client;

pub use supabase_auth_client::{AUTH_SESSION_KEY, SupabaseAuthClient};

use crate::Result as ClientResult;

use sp_core::RemoteSession;

use async_trait::async_trait;
use tokio::sync::broadcast;

/// Auth-state change pushed by the provider.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    SignedIn(RemoteSession),
    TokenRefreshed(RemoteSession),
    SignedOut,
}

impl AuthEvent {
    /// The session this event leaves behind, if any.
    pub fn session(&self) -> Option<&RemoteSession> {
        match self {
            AuthEvent::SignedIn(session) | AuthEvent::TokenRefreshed(session) => Some(session),
            AuthEvent::SignedOut => None,
        }
    }
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// The current session, or `ClientError::NoSession` when signed out.
    async fn get_current_session(&self) -> ClientResult<RemoteSession>;

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent>;

    async fn sign_out(&self) -> ClientResult<()>;
}
