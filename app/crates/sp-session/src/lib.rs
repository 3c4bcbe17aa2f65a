//! Identity resolution for Support Plus.
//!
//! [`IdentityResolver`] decides which identity is active (a remote session, a
//! device-local pseudo identity, or none), keeps exactly one profile in sync
//! with it and publishes every change as a [`ResolverEvent`].

mod error;
mod identity_resolver;
mod manual_identity_outcome;
mod pseudo_identity_store;
mod resolver_event;
mod resolver_snapshot;
mod resolver_state;
mod saved_profile_store;
mod sync_flights;

#[cfg(test)]
mod tests;

pub use error::{ResolverError, Result};
pub use identity_resolver::{IdentityResolver, PROFILE_ERROR_MESSAGE};
pub use manual_identity_outcome::ManualIdentityOutcome;
pub use pseudo_identity_store::{MANUAL_IDENTITY_KEY, PseudoIdentityStore};
pub use resolver_event::ResolverEvent;
pub use resolver_snapshot::ResolverSnapshot;
pub use resolver_state::ResolverState;
pub use saved_profile_store::{SAVED_PROFILE_KEY, SavedProfileStore};
