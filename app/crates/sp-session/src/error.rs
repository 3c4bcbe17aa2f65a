use sp_client::ClientError;
use sp_core::{CoreError, IdentityId};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolverError {
    /// The auth provider has no session. Never surfaced to the user.
    #[error("No active session {location}")]
    NoActiveSession { location: ErrorLocation },

    #[error("No active identity {location}")]
    NoActiveIdentity { location: ErrorLocation },

    #[error("{message} {location}")]
    ProfileSyncFailed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Manual identity ignored while a remote session is active {location}")]
    ManualIdentityRejected { location: ErrorLocation },

    #[error("Identity id {id} is not in the verified format {location}")]
    InvalidIdentityFormat {
        id: IdentityId,
        location: ErrorLocation,
    },

    #[error("Profile request timed out after {secs}s {location}")]
    SyncTimeout { secs: u64, location: ErrorLocation },

    #[error("Invalid profile changes: {source} {location}")]
    InvalidProfileUpdate {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Remote call failed: {source} {location}")]
    Client {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },
}

impl ResolverError {
    #[track_caller]
    pub fn no_active_identity() -> Self {
        Self::NoActiveIdentity {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn profile_sync_failed(message: impl Into<String>) -> Self {
        Self::ProfileSyncFailed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn manual_identity_rejected() -> Self {
        Self::ManualIdentityRejected {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_identity_format(id: &IdentityId) -> Self {
        Self::InvalidIdentityFormat {
            id: id.clone(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn sync_timeout(secs: u64) -> Self {
        Self::SyncTimeout {
            secs,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ClientError> for ResolverError {
    #[track_caller]
    fn from(source: ClientError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if source.is_no_session() {
            Self::NoActiveSession { location }
        } else {
            Self::Client { source, location }
        }
    }
}

impl From<CoreError> for ResolverError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::InvalidProfileUpdate {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ResolverError>;
