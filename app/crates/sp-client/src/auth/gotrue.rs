//! Wire types of the GoTrue REST API and the locally persisted session.

use sp_core::{IdentityId, RemoteSession};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct GoTrueUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GoTrueSession {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub user: Option<GoTrueUser>,
}

impl GoTrueSession {
    pub(crate) fn expiry(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.expires_at
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .or_else(|| self.expires_in.map(|secs| now + Duration::seconds(secs)))
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct OtpRequest<'a> {
    pub email: &'a str,
    pub create_user: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct VerifyRequest<'a> {
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub email: &'a str,
    pub token: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

/// Session as kept in local storage between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct StoredSession {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub user_id: IdentityId,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl StoredSession {
    pub(crate) fn new(session: GoTrueSession, user: GoTrueUser, now: DateTime<Utc>) -> Self {
        let expires_at = session.expiry(now);
        Self {
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            expires_at,
            user_id: IdentityId::new(user.id),
            email: user.email.filter(|email| !email.is_empty()),
            phone: user.phone.filter(|phone| !phone.is_empty()),
        }
    }

    pub(crate) fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }

    pub(crate) fn to_remote(&self) -> RemoteSession {
        RemoteSession {
            session_id: self.access_token.clone(),
            user_id: self.user_id.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            expires_at: self.expires_at,
        }
    }
}
