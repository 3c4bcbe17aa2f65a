mod sync_flights;

use crate::{IdentityResolver, PseudoIdentityStore, ResolverState, SavedProfileStore};

use sp_client::{
    AuthEvent, AuthProvider, ClientError, EnsureProfileRequest, ProfileStore,
    Result as ClientResult,
};
use sp_core::{IdentityId, Profile, ProfileUpdate, RemoteSession};
use sp_db::{LocalDatabase, LocalEntryRepository};

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{Notify, broadcast};

pub(crate) const VERIFIED_ID: &str = "11111111-1111-1111-1111-111111111111";
pub(crate) const OTHER_VERIFIED_ID: &str = "33333333-3333-4333-8333-333333333333";
pub(crate) const LOCAL_ID: &str = "sms:+1234567890";

pub(crate) enum StartupCheck {
    NoSession,
    Session(RemoteSession),
    NetworkError,
}

/// Auth provider double: a scripted startup check plus a controllable event stream.
pub(crate) struct FakeAuth {
    startup: Mutex<StartupCheck>,
    gate: Mutex<Option<Arc<Notify>>>,
    sign_out_fails: AtomicBool,
    pub sign_out_calls: AtomicUsize,
    events: broadcast::Sender<AuthEvent>,
}

impl FakeAuth {
    pub fn new(startup: StartupCheck) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            startup: Mutex::new(startup),
            gate: Mutex::new(None),
            sign_out_fails: AtomicBool::new(false),
            sign_out_calls: AtomicUsize::new(0),
            events,
        }
    }

    /// Hold the startup check until the returned notify fires.
    pub fn gate_startup(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(Arc::clone(&gate));
        gate
    }

    pub fn fail_sign_out(&self) {
        self.sign_out_fails.store(true, Ordering::SeqCst);
    }

    pub fn emit(&self, event: AuthEvent) {
        self.events.send(event).unwrap();
    }

    pub async fn wait_for_listener(&self) {
        tokio::time::timeout(Duration::from_secs(1), async {
            while self.events.receiver_count() == 0 {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("resolver never subscribed");
    }
}

#[async_trait]
impl AuthProvider for FakeAuth {
    async fn get_current_session(&self) -> ClientResult<RemoteSession> {
        let gate = self.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        match &*self.startup.lock().unwrap() {
            StartupCheck::NoSession => Err(ClientError::no_session()),
            StartupCheck::Session(session) => Ok(session.clone()),
            StartupCheck::NetworkError => Err(ClientError::api_error(502, "bad gateway")),
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }

    async fn sign_out(&self) -> ClientResult<()> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        *self.startup.lock().unwrap() = StartupCheck::NoSession;
        let _ = self.events.send(AuthEvent::SignedOut);
        if self.sign_out_fails.load(Ordering::SeqCst) {
            Err(ClientError::api_error(500, "logout failed"))
        } else {
            Ok(())
        }
    }
}

/// Profile store double that echoes the requested identity.
#[derive(Default)]
pub(crate) struct FakeProfiles {
    pub ensure_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    fail: AtomicBool,
    hang: AtomicBool,
    delay_ms: AtomicUsize,
}

impl FakeProfiles {
    pub fn fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn hang(&self) {
        self.hang.store(true, Ordering::SeqCst);
    }

    pub fn delay(&self, millis: usize) {
        self.delay_ms.store(millis, Ordering::SeqCst);
    }

    pub fn ensure_count(&self) -> usize {
        self.ensure_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileStore for FakeProfiles {
    async fn ensure_profile(&self, request: &EnsureProfileRequest) -> ClientResult<Profile> {
        self.ensure_calls.fetch_add(1, Ordering::SeqCst);

        if self.hang.load(Ordering::SeqCst) {
            futures::future::pending::<()>().await;
        }
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay as u64)).await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(ClientError::api_error(503, "profile service down"));
        }

        let mut profile = Profile::fallback(
            &request.auth_user_id,
            request.email.as_deref(),
            request.phone.as_deref(),
        );
        profile.region = "77".to_string();
        Ok(profile)
    }

    async fn update_profile(
        &self,
        auth_user_id: &IdentityId,
        changes: &ProfileUpdate,
    ) -> ClientResult<Profile> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        let mut profile = Profile::fallback(auth_user_id, None, None);
        profile.apply(changes);
        Ok(profile)
    }

    async fn delete_profile(&self, _auth_user_id: &IdentityId) -> ClientResult<()> {
        Ok(())
    }
}

pub(crate) struct Harness {
    pub resolver: IdentityResolver,
    pub auth: Arc<FakeAuth>,
    pub profiles: Arc<FakeProfiles>,
    pub pseudo_store: PseudoIdentityStore,
    pub saved_profile: SavedProfileStore,
    db: LocalDatabase,
}

impl Harness {
    /// A fresh resolver over the same local database, as after a restart.
    pub async fn restarted(&self, startup: StartupCheck) -> Harness {
        let entries = LocalEntryRepository::new(self.db.pool().clone());
        let pseudo_store = PseudoIdentityStore::new(entries.clone());
        let saved_profile = SavedProfileStore::new(entries);
        let auth = Arc::new(FakeAuth::new(startup));
        let profiles = Arc::new(FakeProfiles::default());
        let resolver = IdentityResolver::new(
            auth.clone(),
            profiles.clone(),
            pseudo_store.clone(),
            saved_profile.clone(),
            Duration::from_secs(5),
        );

        Harness {
            resolver,
            auth,
            profiles,
            pseudo_store,
            saved_profile,
            db: self.db.clone(),
        }
    }
}

pub(crate) async fn harness(startup: StartupCheck) -> Harness {
    harness_with_timeout(startup, Duration::from_secs(5)).await
}

pub(crate) async fn harness_with_timeout(startup: StartupCheck, timeout: Duration) -> Harness {
    let db = LocalDatabase::open_in_memory().await.unwrap();
    let entries = LocalEntryRepository::new(db.pool().clone());
    let pseudo_store = PseudoIdentityStore::new(entries.clone());
    let saved_profile = SavedProfileStore::new(entries);
    let auth = Arc::new(FakeAuth::new(startup));
    let profiles = Arc::new(FakeProfiles::default());
    let resolver = IdentityResolver::new(
        auth.clone(),
        profiles.clone(),
        pseudo_store.clone(),
        saved_profile.clone(),
        timeout,
    );

    Harness {
        resolver,
        auth,
        profiles,
        pseudo_store,
        saved_profile,
        db,
    }
}

pub(crate) fn remote_session(user_id: &str) -> RemoteSession {
    RemoteSession {
        session_id: format!("token-{user_id}"),
        user_id: IdentityId::new(user_id),
        email: Some("anna@example.com".to_string()),
        phone: None,
        expires_at: None,
    }
}

pub(crate) async fn wait_for_state(resolver: &IdentityResolver, expected: ResolverState) {
    let reached = tokio::time::timeout(Duration::from_secs(2), async {
        while resolver.state().await != expected {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await;
    assert!(
        reached.is_ok(),
        "resolver never reached {expected}, stuck in {}",
        resolver.state().await
    );
}
