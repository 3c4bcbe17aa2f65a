use crate::ResolverState;

use sp_core::{IdentityId, Profile};

/// Change notification published by the resolver.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolverEvent {
    /// The active identity id changed (`None`: no identity)
    IdentityChanged(Option<IdentityId>),
    StateChanged(ResolverState),
    ProfileLoaded(Profile),
    /// Logout or account deletion finished
    Reset,
}
