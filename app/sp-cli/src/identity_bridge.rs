//! Keeps the cache store's visible partition on the resolver's identity.

use sp_cache::CacheStore;
use sp_session::{IdentityResolver, ResolverEvent};

use log::{debug, warn};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

/// Forward `IdentityChanged` to `activate` and `Reset` to `logout`. After a
/// lag the current identity is re-read instead.
pub fn spawn(resolver: &IdentityResolver, store: CacheStore) -> JoinHandle<()> {
    let mut events = resolver.subscribe();
    let resolver = resolver.clone();

    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(ResolverEvent::IdentityChanged(id)) => store.activate(id.as_ref()).await,
                Ok(ResolverEvent::Reset) => store.logout().await,
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Identity bridge missed {} event(s), realigning", skipped);
                    let identity = resolver.current_identity().await;
                    store.activate(identity.id()).await;
                }
                Err(RecvError::Closed) => break,
            }
        }
        debug!("Identity bridge stopped");
    })
}
