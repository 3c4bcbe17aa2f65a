use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolverState {
    /// Startup session check still in flight
    #[default]
    Unknown,
    Anonymous,
    PseudoActive,
    RemoteActive,
    ProfileSyncing,
    Ready,
    ProfileError,
}

impl ResolverState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Anonymous => "anonymous",
            Self::PseudoActive => "pseudo_active",
            Self::RemoteActive => "remote_active",
            Self::ProfileSyncing => "profile_syncing",
            Self::Ready => "ready",
            Self::ProfileError => "profile_error",
        }
    }
}

impl std::fmt::Display for ResolverState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
