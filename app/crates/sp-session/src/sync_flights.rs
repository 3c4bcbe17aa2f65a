use sp_core::{IdentityId, Profile};

use std::collections::HashMap;
use std::time::Duration;

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use thiserror::Error;
use tokio::sync::Mutex;

/// Why a profile sync failed. Cloneable so every joined caller sees it.
#[derive(Error, Debug, Clone, PartialEq)]
pub(crate) enum SyncFailure {
    #[error("{0}")]
    Remote(String),

    #[error("timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

pub(crate) type SyncOutcome = Result<Profile, SyncFailure>;
pub(crate) type SharedSync = Shared<BoxFuture<'static, SyncOutcome>>;

/// In-flight profile syncs, at most one per identity id.
#[derive(Default)]
pub(crate) struct SyncFlights {
    in_flight: Mutex<HashMap<IdentityId, SharedSync>>,
}

impl SyncFlights {
    /// Join the sync running for `id`, or start one with `start`. The flag is
    /// true for the caller that started it.
    pub(crate) async fn join_or_start<F>(&self, id: &IdentityId, start: F) -> (SharedSync, bool)
    where
        F: FnOnce() -> BoxFuture<'static, SyncOutcome>,
    {
        let mut in_flight = self.in_flight.lock().await;
        if let Some(existing) = in_flight.get(id) {
            return (existing.clone(), false);
        }

        let flight = start().shared();
        in_flight.insert(id.clone(), flight.clone());
        (flight, true)
    }

    pub(crate) async fn finish(&self, id: &IdentityId) {
        self.in_flight.lock().await.remove(id);
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.in_flight.lock().await.len()
    }
}
