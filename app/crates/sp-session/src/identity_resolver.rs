use crate::sync_flights::{SyncFailure, SyncFlights, SyncOutcome};
use crate::{
    ManualIdentityOutcome, PseudoIdentityStore, ResolverError, ResolverEvent, ResolverSnapshot,
    ResolverState, Result as ResolverResult, SavedProfileStore,
};

use sp_client::{AuthEvent, AuthProvider, EnsureProfileRequest, ProfileStore};
use sp_core::{Identity, IdentityId, Profile, ProfileUpdate, PseudoIdentity, RemoteSession};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use log::{debug, error, info, warn};
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{Mutex, RwLock, broadcast};
use tokio::task::JoinHandle;

/// The one message shown to the user when a profile cannot be loaded.
pub const PROFILE_ERROR_MESSAGE: &str = "Could not load your profile. Please try again.";

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Resolver handle; clones share the same state.
#[derive(Clone)]
pub struct IdentityResolver {
    inner: Arc<ResolverInner>,
}

struct ResolverInner {
    auth: Arc<dyn AuthProvider>,
    profiles: Arc<dyn ProfileStore>,
    pseudo_store: PseudoIdentityStore,
    saved_profile: SavedProfileStore,
    sync_timeout: Duration,
    data: RwLock<ResolverData>,
    /// Serializes identity transitions, including their local persistence
    apply_lock: Mutex<()>,
    flights: SyncFlights,
    events: broadcast::Sender<ResolverEvent>,
    alive: AtomicBool,
    listener: Mutex<Option<JoinHandle<()>>>,
}

#[derive(Default)]
struct ResolverData {
    identity: Identity,
    state: ResolverState,
    profile: Option<Profile>,
    /// False while `profile` is the copy restored at startup
    profile_synced: bool,
    error: Option<String>,
}

impl IdentityResolver {
    pub fn new(
        auth: Arc<dyn AuthProvider>,
        profiles: Arc<dyn ProfileStore>,
        pseudo_store: PseudoIdentityStore,
        saved_profile: SavedProfileStore,
        sync_timeout: Duration,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(ResolverInner {
                auth,
                profiles,
                pseudo_store,
                saved_profile,
                sync_timeout,
                data: RwLock::new(ResolverData::default()),
                apply_lock: Mutex::new(()),
                flights: SyncFlights::default(),
                events,
                alive: AtomicBool::new(true),
                listener: Mutex::new(None),
            }),
        }
    }

    /// Restore the persisted pseudo identity and the last loaded profile,
    /// start listening for auth-state changes, then run the startup session
    /// check.
    pub async fn init(&self) {
        match self.inner.pseudo_store.load().await {
            Ok(Some(pseudo)) => {
                debug!("Restored manual identity {}", pseudo.id);
                self.inner.data.write().await.identity = Identity::Pseudo(pseudo);
            }
            Ok(None) => {}
            Err(e) => warn!("Failed to read manual identity: {}", e),
        }

        match self.inner.saved_profile.load().await {
            Ok(Some(profile)) => {
                debug!("Restored saved profile of {}", profile.auth_user_id);
                let mut data = self.inner.data.write().await;
                data.profile = Some(profile);
                data.profile_synced = false;
            }
            Ok(None) => {}
            Err(e) => warn!("Failed to read saved profile: {}", e),
        }

        let listener = self.spawn_auth_listener();
        if let Some(previous) = self.inner.listener.lock().await.replace(listener) {
            previous.abort();
        }

        match self.inner.auth.get_current_session().await {
            Ok(session) => self.apply_session(Some(session)).await,
            Err(e) if e.is_no_session() => {
                debug!("No active session at startup");
                self.settle_startup().await;
            }
            Err(e) => {
                error!("Startup session check failed: {}", e);
                self.settle_startup().await;
            }
        }
    }

    /// Apply a session observation (`None`: signed out) and sync the profile if needed.
    pub async fn apply_session(&self, session: Option<RemoteSession>) {
        if self.apply_session_identity(session).await {
            self.sync_if_needed().await;
        }
    }

    /// Replace or clear the pseudo identity. Ignored while a remote session is active.
    pub async fn set_manual_identity(
        &self,
        identity: Option<PseudoIdentity>,
    ) -> ManualIdentityOutcome {
        let outcome = {
            let _guard = self.inner.apply_lock.lock().await;

            if self.inner.data.read().await.identity.is_remote() {
                warn!("{}", ResolverError::manual_identity_rejected());
                return ManualIdentityOutcome::Rejected;
            }

            match identity.filter(|pseudo| !pseudo.id.is_empty()) {
                Some(pseudo) => {
                    let pseudo = pseudo.retagged();
                    if let Err(e) = self.inner.pseudo_store.save(&pseudo).await {
                        warn!("Failed to persist manual identity: {}", e);
                    }
                    info!(
                        "Manual identity set to {}{}",
                        pseudo.id,
                        if pseudo.unverified { " (unverified)" } else { "" }
                    );
                    let mut data = self.inner.data.write().await;
                    self.transition(
                        &mut data,
                        Identity::Pseudo(pseudo),
                        ResolverState::PseudoActive,
                    );
                    ManualIdentityOutcome::Applied
                }
                None => {
                    if let Err(e) = self.inner.pseudo_store.clear().await {
                        warn!("Failed to remove manual identity: {}", e);
                    }
                    let mut data = self.inner.data.write().await;
                    data.error = None;
                    self.transition(&mut data, Identity::None, ResolverState::Anonymous);
                    ManualIdentityOutcome::Cleared
                }
            }
        };

        self.sync_if_needed().await;
        outcome
    }

    /// Force a profile sync for the current identity. `Ok(None)` when no
    /// identity is active.
    pub async fn refresh_profile(&self) -> ResolverResult<Option<Profile>> {
        let identity = self.inner.data.read().await.identity.clone();
        if identity.is_none() {
            self.inner.data.write().await.error = None;
            return Ok(None);
        }

        self.sync_profile(identity).await.map(Some)
    }

    /// Change the loaded profile: remotely for a verified identity, locally
    /// for a pseudo identity.
    pub async fn update_profile(&self, changes: ProfileUpdate) -> ResolverResult<Profile> {
        changes.validate()?;

        let (identity, current) = {
            let data = self.inner.data.read().await;
            (data.identity.clone(), data.profile.clone())
        };
        let id = identity
            .id()
            .cloned()
            .ok_or_else(ResolverError::no_active_identity)?;

        let profile = if identity.has_verified_id() {
            let call = self.inner.profiles.update_profile(&id, &changes);
            tokio::time::timeout(self.inner.sync_timeout, call)
                .await
                .map_err(|_| ResolverError::sync_timeout(self.inner.sync_timeout.as_secs()))??
        } else {
            let mut profile = current
                .filter(|profile| profile.belongs_to(&id))
                .unwrap_or_else(|| Profile::fallback(&id, identity.email(), identity.phone()));
            profile.apply(&changes);
            profile
        };

        self.accept_profile(&id, profile.clone()).await;
        Ok(profile)
    }

    /// Sign out (best effort) and forget the identity, the profile and the error.
    pub async fn reset(&self) {
        let _guard = self.inner.apply_lock.lock().await;

        match self.inner.auth.sign_out().await {
            Ok(()) => {}
            Err(e) if e.is_no_session() => debug!("Reset without a remote session"),
            Err(e) => warn!("Remote sign-out failed, continuing with local reset: {}", e),
        }

        if let Err(e) = self.inner.pseudo_store.clear().await {
            warn!("Failed to remove manual identity: {}", e);
        }
        if let Err(e) = self.inner.saved_profile.clear().await {
            warn!("Failed to remove saved profile: {}", e);
        }

        let mut data = self.inner.data.write().await;
        data.profile = None;
        data.profile_synced = false;
        data.error = None;
        self.transition(&mut data, Identity::None, ResolverState::Anonymous);
        self.publish(ResolverEvent::Reset);
        info!("Identity reset");
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ResolverEvent> {
        self.inner.events.subscribe()
    }

    pub async fn current_identity(&self) -> Identity {
        self.inner.data.read().await.identity.clone()
    }

    pub async fn state(&self) -> ResolverState {
        self.inner.data.read().await.state
    }

    pub async fn error(&self) -> Option<String> {
        self.inner.data.read().await.error.clone()
    }

    pub async fn profile(&self) -> Option<Profile> {
        self.inner.data.read().await.profile.clone()
    }

    pub async fn snapshot(&self) -> ResolverSnapshot {
        let data = self.inner.data.read().await;
        ResolverSnapshot {
            identity: data.identity.clone(),
            state: data.state,
            profile: data.profile.clone(),
            error: data.error.clone(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.inner.alive.load(Ordering::SeqCst)
    }

    /// Stop the auth listener; sync results arriving afterwards are dropped.
    pub async fn close(&self) {
        self.inner.alive.store(false, Ordering::SeqCst);
        if let Some(listener) = self.inner.listener.lock().await.take() {
            listener.abort();
        }
        debug!("Identity resolver closed");
    }

    fn spawn_auth_listener(&self) -> JoinHandle<()> {
        let mut events = self.inner.auth.subscribe();
        let weak: Weak<ResolverInner> = Arc::downgrade(&self.inner);

        tokio::spawn(async move {
            loop {
                let event = match events.recv().await {
                    Ok(event) => Some(event),
                    Err(RecvError::Lagged(skipped)) => {
                        warn!("Missed {} auth event(s), re-checking session", skipped);
                        None
                    }
                    Err(RecvError::Closed) => break,
                };

                let Some(inner) = weak.upgrade() else {
                    break;
                };
                let resolver = IdentityResolver { inner };
                if !resolver.is_alive() {
                    break;
                }

                let session = match event {
                    Some(event) => {
                        debug!("Auth state change: {}", auth_event_name(&event));
                        event.session().cloned()
                    }
                    None => resolver.inner.auth.get_current_session().await.ok(),
                };

                if resolver.apply_session_identity(session).await {
                    let syncing = resolver.clone();
                    tokio::spawn(async move { syncing.sync_if_needed().await });
                }
            }
            debug!("Auth listener stopped");
        })
    }

    /// Returns whether a remote identity is active afterwards. A sign-out only
    /// ends a remote identity; a pseudo identity is left alone.
    async fn apply_session_identity(&self, session: Option<RemoteSession>) -> bool {
        let _guard = self.inner.apply_lock.lock().await;

        let Some(session) = session else {
            let mut data = self.inner.data.write().await;
            if data.identity.is_remote() {
                info!("Remote session ended");
                data.error = None;
                self.transition(&mut data, Identity::None, ResolverState::Anonymous);
            }
            return false;
        };

        if let Err(e) = self.inner.pseudo_store.clear().await {
            warn!("Failed to remove manual identity: {}", e);
        }

        let mut data = self.inner.data.write().await;
        let same_session_user =
            data.identity.is_remote() && data.identity.id() == Some(&session.user_id);
        if same_session_user && data.state != ResolverState::Unknown {
            data.identity = Identity::Remote(session);
        } else {
            info!("Remote session active for {}", session.user_id);
            self.transition(
                &mut data,
                Identity::Remote(session),
                ResolverState::RemoteActive,
            );
        }
        true
    }

    /// Startup found no session: settle on the restored pseudo identity, if
    /// any, unless an auth event already decided the state.
    async fn settle_startup(&self) {
        {
            let _guard = self.inner.apply_lock.lock().await;
            let mut data = self.inner.data.write().await;
            if data.state != ResolverState::Unknown {
                return;
            }

            let identity = std::mem::take(&mut data.identity);
            let state = if identity.is_pseudo() {
                ResolverState::PseudoActive
            } else {
                ResolverState::Anonymous
            };
            self.transition(&mut data, identity, state);
        }

        self.sync_if_needed().await;
    }

    /// Sync unless the loaded profile already belongs to the active identity.
    /// A restored profile of a verified identity is still refreshed once.
    async fn sync_if_needed(&self) {
        let identity = {
            let mut data = self.inner.data.write().await;
            let Some(id) = data.identity.id().cloned() else {
                data.error = None;
                return;
            };

            let owned = data
                .profile
                .as_ref()
                .is_some_and(|profile| profile.belongs_to(&id));
            if owned && (data.profile_synced || !data.identity.has_verified_id()) {
                data.error = None;
                self.set_state(&mut data, ResolverState::Ready);
                return;
            }

            data.identity.clone()
        };

        // Failures are already reflected in the state
        let _ = self.sync_profile(identity).await;
    }

    /// Single-flight fetch-or-create of the profile for `identity`.
    async fn sync_profile(&self, identity: Identity) -> ResolverResult<Profile> {
        let id = identity
            .id()
            .cloned()
            .ok_or_else(ResolverError::no_active_identity)?;

        let current = self
            .inner
            .data
            .read()
            .await
            .profile
            .clone()
            .filter(|profile| profile.belongs_to(&id));

        let (flight, leader) = self
            .inner
            .flights
            .join_or_start(&id, || self.sync_future(identity, current))
            .await;

        if !leader {
            debug!("Joining in-flight profile sync for {}", id);
            return flight
                .await
                .map_err(|_| ResolverError::profile_sync_failed(PROFILE_ERROR_MESSAGE));
        }

        {
            let mut data = self.inner.data.write().await;
            if data.identity.id() == Some(&id) {
                data.error = None;
                self.set_state(&mut data, ResolverState::ProfileSyncing);
            }
        }

        let outcome = flight.await;
        self.inner.flights.finish(&id).await;
        self.apply_outcome(&id, &outcome).await;

        outcome.map_err(|_| ResolverError::profile_sync_failed(PROFILE_ERROR_MESSAGE))
    }

    /// A pseudo identity resolves to `current` when it has one, so local
    /// edits survive a refresh.
    fn sync_future(
        &self,
        identity: Identity,
        current: Option<Profile>,
    ) -> BoxFuture<'static, SyncOutcome> {
        let profiles = Arc::clone(&self.inner.profiles);
        let timeout = self.inner.sync_timeout;

        async move {
            let Some(request) = EnsureProfileRequest::for_identity(&identity) else {
                return Err(SyncFailure::Remote(String::from("no active identity")));
            };

            if !identity.has_verified_id() {
                debug!(
                    "{}; using local fallback profile",
                    ResolverError::invalid_identity_format(&request.auth_user_id)
                );
                return Ok(current.unwrap_or_else(|| {
                    Profile::fallback(&request.auth_user_id, identity.email(), identity.phone())
                }));
            }

            match tokio::time::timeout(timeout, profiles.ensure_profile(&request)).await {
                Ok(Ok(profile)) => Ok(profile),
                Ok(Err(e)) => Err(SyncFailure::Remote(e.to_string())),
                Err(_) => Err(SyncFailure::Timeout(timeout)),
            }
        }
        .boxed()
    }

    async fn apply_outcome(&self, id: &IdentityId, outcome: &SyncOutcome) {
        match outcome {
            Ok(profile) => self.accept_profile(id, profile.clone()).await,
            Err(failure) => {
                if !self.is_alive() {
                    debug!("Dropping profile sync failure after close");
                    return;
                }

                let mut data = self.inner.data.write().await;
                if data.identity.id() != Some(id) {
                    debug!("Ignoring profile sync failure for stale identity {}", id);
                    return;
                }

                match failure {
                    SyncFailure::Timeout(timeout) => error!(
                        "Failed to sync profile for {}: {}",
                        id,
                        ResolverError::sync_timeout(timeout.as_secs())
                    ),
                    SyncFailure::Remote(detail) => {
                        error!("Failed to sync profile for {}: {}", id, detail)
                    }
                }
                data.error = Some(String::from(PROFILE_ERROR_MESSAGE));
                self.set_state(&mut data, ResolverState::ProfileError);
            }
        }
    }

    /// Install `profile` if `id` is still the active identity and the resolver is alive.
    async fn accept_profile(&self, id: &IdentityId, profile: Profile) {
        if !self.is_alive() {
            debug!("Dropping profile for {} after close", id);
            return;
        }

        let mut data = self.inner.data.write().await;
        if data.identity.id() != Some(id) {
            debug!("Ignoring profile for stale identity {}", id);
            return;
        }

        if let Err(e) = self.inner.saved_profile.save(&profile).await {
            warn!("Failed to persist profile of {}: {}", id, e);
        }
        data.profile = Some(profile.clone());
        data.profile_synced = true;
        data.error = None;
        self.set_state(&mut data, ResolverState::Ready);
        self.publish(ResolverEvent::ProfileLoaded(profile));
    }

    fn transition(&self, data: &mut ResolverData, identity: Identity, state: ResolverState) {
        let changed = data.identity.id() != identity.id();
        data.identity = identity;
        if changed {
            self.publish(ResolverEvent::IdentityChanged(data.identity.id().cloned()));
        }
        self.set_state(data, state);
    }

    fn set_state(&self, data: &mut ResolverData, state: ResolverState) {
        if data.state == state {
            return;
        }
        debug!("Resolver state {} -> {}", data.state, state);
        data.state = state;
        self.publish(ResolverEvent::StateChanged(state));
    }

    fn publish(&self, event: ResolverEvent) {
        // No subscribers is fine
        let _ = self.inner.events.send(event);
    }
}

fn auth_event_name(event: &AuthEvent) -> &'static str {
    match event {
        AuthEvent::SignedIn(_) => "signed_in",
        AuthEvent::TokenRefreshed(_) => "token_refreshed",
        AuthEvent::SignedOut => "signed_out",
    }
}
