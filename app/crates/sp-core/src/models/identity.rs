//! The active identity of the device user.
//!
//! A single [`Identity`] value is held by the resolver, so a remote session and
//! a pseudo identity can never be active at the same time.

use crate::{DEFAULT_DISPLAY_NAME, IdentityId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A verified session issued by the remote auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSession {
    /// Opaque session identifier (the provider's access token). Never serialized.
    #[serde(skip_serializing, default)]
    pub session_id: String,
    pub user_id: IdentityId,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// A locally fabricated identity, persisted only on this device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PseudoIdentity {
    pub id: IdentityId,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Set when `id` is not in the verified id format
    #[serde(default)]
    pub unverified: bool,
}

impl PseudoIdentity {
    pub fn new(id: impl Into<IdentityId>, email: Option<String>, phone: Option<String>) -> Self {
        let id = id.into();
        let unverified = !id.is_verified_format();
        Self {
            id,
            email,
            phone,
            unverified,
        }
    }

    /// Recompute the `unverified` tag from the id, ignoring whatever was stored.
    pub fn retagged(mut self) -> Self {
        self.unverified = !self.id.is_verified_format();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Identity {
    #[default]
    None,
    Pseudo(PseudoIdentity),
    Remote(RemoteSession),
}

impl Identity {
    pub fn id(&self) -> Option<&IdentityId> {
        match self {
            Self::None => None,
            Self::Pseudo(pseudo) => Some(&pseudo.id),
            Self::Remote(session) => Some(&session.user_id),
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Pseudo(pseudo) => pseudo.email.as_deref(),
            Self::Remote(session) => session.email.as_deref(),
        }
    }

    pub fn phone(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Pseudo(pseudo) => pseudo.phone.as_deref(),
            Self::Remote(session) => session.phone.as_deref(),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    pub fn is_pseudo(&self) -> bool {
        matches!(self, Self::Pseudo(_))
    }

    /// Whether this identity may be looked up in the remote profile store.
    pub fn has_verified_id(&self) -> bool {
        self.id().is_some_and(IdentityId::is_verified_format)
    }

    /// Name used as the creation default for a new profile.
    pub fn display_name(&self) -> String {
        self.email()
            .filter(|email| !email.is_empty())
            .or_else(|| self.phone().filter(|phone| !phone.is_empty()))
            .unwrap_or(DEFAULT_DISPLAY_NAME)
            .to_string()
    }
}
