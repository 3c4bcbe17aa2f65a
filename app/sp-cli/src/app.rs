//! Application wiring: one resolver, one cache store and their remote
//! collaborators, constructed once and shared by handle.

use crate::catalog_commands::CatalogKind;
use crate::error::{AppError, Result as AppErrorResult};
use crate::identity_bridge;

use sp_cache::CacheStore;
use sp_client::{
    CatalogSource, ClientError, HttpCatalog, HttpProfileStore, OtpClient, OtpRequestResponse,
    ProfileStore, SupabaseAuthClient,
};
use sp_config::Config;
use sp_core::{
    Benefit, IdentityId, ProfileUpdate, PseudoIdentity, is_valid_phone, normalize_phone_to_e164,
};
use sp_db::{LocalDatabase, LocalEntryRepository, PartitionRepository};
use sp_session::{
    IdentityResolver, ManualIdentityOutcome, PseudoIdentityStore, ResolverError, ResolverState,
    SavedProfileStore,
};

use std::sync::Arc;

use log::{info, warn};
use reqwest::Client as ReqwestClient;
use serde_json::{Value, json};
use tokio::task::JoinHandle;

pub struct App {
    db: LocalDatabase,
    auth: Arc<SupabaseAuthClient>,
    profiles: Arc<HttpProfileStore>,
    catalog: Arc<dyn CatalogSource>,
    otp: OtpClient,
    store: CacheStore,
    resolver: IdentityResolver,
    bridge: JoinHandle<()>,
}

impl App {
    /// Open local storage at the configured path and build the app.
    pub async fn init(config: &Config) -> AppErrorResult<Self> {
        let database_path = config.database_path()?;
        info!("Opening local storage: {}", database_path.display());
        let db = LocalDatabase::open(&database_path).await?;
        Self::build(config, db).await
    }

    /// Wire every service on top of an open database, then run the startup
    /// identity check.
    pub async fn build(config: &Config, db: LocalDatabase) -> AppErrorResult<Self> {
        let http = ReqwestClient::builder()
            .timeout(config.sync.timeout())
            .build()
            .map_err(ClientError::from)?;

        let entries = LocalEntryRepository::new(db.pool().clone());
        let auth = Arc::new(SupabaseAuthClient::new(
            &config.remote.auth_url,
            config.remote.api_key.clone(),
            http.clone(),
            entries.clone(),
        ));
        let profiles = Arc::new(HttpProfileStore::new(
            &config.remote.profile_api_url,
            http.clone(),
        ));
        let catalog: Arc<dyn CatalogSource> =
            Arc::new(HttpCatalog::new(&config.remote.catalog_url, http.clone()));
        let otp = OtpClient::new(&config.remote.profile_api_url, http);

        let partitions =
            PartitionRepository::new(db.pool().clone(), config.storage.store_name.clone());
        let store = CacheStore::open(partitions).await?;

        let resolver = IdentityResolver::new(
            auth.clone(),
            profiles.clone(),
            PseudoIdentityStore::new(entries.clone()),
            SavedProfileStore::new(entries),
            config.sync.timeout(),
        );
        let bridge = identity_bridge::spawn(&resolver, store.clone());
        resolver.init().await;

        let app = Self {
            db,
            auth,
            profiles,
            catalog,
            otp,
            store,
            resolver,
            bridge,
        };
        app.align_store().await;
        Ok(app)
    }

    pub fn resolver(&self) -> &IdentityResolver {
        &self.resolver
    }

    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    pub async fn status(&self) -> AppErrorResult<Value> {
        let snapshot = self.resolver.snapshot().await;
        let visible = self.store.visible().await;
        Ok(json!({
            "resolver": snapshot,
            "cache": {
                "activeIdentity": self.store.active_identity().await,
                "partitions": self.store.partition_count().await,
                "benefits": visible.benefits.len(),
                "offers": visible.offers.len(),
                "medicines": visible.medicines.len(),
                "hidden": visible.hidden_benefit_ids.len(),
            },
        }))
    }

    /// The user-facing profile error, when the resolver is stuck in `ProfileError`.
    pub async fn profile_error(&self) -> Option<String> {
        let snapshot = self.resolver.snapshot().await;
        (snapshot.state == ResolverState::ProfileError)
            .then_some(snapshot.error)
            .flatten()
    }

    // =========================================================================
    // Login
    // =========================================================================

    /// Phone OTP login. The verified remote user id becomes the manual
    /// identity, which syncs the profile from the remote store.
    pub async fn login_with_phone<F>(&self, raw_phone: &str, read_code: F) -> AppErrorResult<Value>
    where
        F: FnOnce(&OtpRequestResponse) -> AppErrorResult<String>,
    {
        let phone = normalize_phone_to_e164(raw_phone);
        if !is_valid_phone(&phone) {
            return Err(AppError::otp(format!("invalid phone number '{raw_phone}'")));
        }
        if self.resolver.current_identity().await.is_remote() {
            return Err(ResolverError::manual_identity_rejected().into());
        }

        let request = self.otp.request_code(&phone, None).await?;
        let code = read_code(&request)?;
        let verified = self.otp.verify_code(&request.request_id, code.trim()).await?;
        if !verified.success {
            return Err(AppError::otp("the code was not accepted"));
        }

        let user_id = verified
            .supabase_user_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| AppError::otp("verification returned no user id"))?;

        let pseudo = PseudoIdentity::new(user_id, None, Some(verified.phone));
        self.apply_manual_identity(Some(pseudo)).await
    }

    /// E-mail OTP login through the auth provider.
    pub async fn login_with_email<F>(&self, email: &str, read_code: F) -> AppErrorResult<Value>
    where
        F: FnOnce() -> AppErrorResult<String>,
    {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::otp(format!("invalid e-mail address '{email}'")));
        }

        self.auth.send_email_otp(email).await?;
        let code = read_code()?;
        let session = self.auth.verify_email_otp(email, code.trim()).await?;

        // Also delivered to the resolver as SignedIn; applying it here is idempotent
        self.resolver.apply_session(Some(session)).await;
        self.align_store().await;
        self.status().await
    }

    // =========================================================================
    // Identity
    // =========================================================================

    pub async fn set_identity(
        &self,
        id: &str,
        email: Option<String>,
        phone: Option<String>,
    ) -> AppErrorResult<Value> {
        if IdentityId::new(id).is_empty() {
            return Err(AppError::usage("identity id cannot be blank"));
        }
        let phone = phone.map(|phone| normalize_phone_to_e164(&phone));
        self.apply_manual_identity(Some(PseudoIdentity::new(id, email, phone)))
            .await
    }

    pub async fn clear_identity(&self) -> AppErrorResult<Value> {
        self.apply_manual_identity(None).await
    }

    async fn apply_manual_identity(
        &self,
        identity: Option<PseudoIdentity>,
    ) -> AppErrorResult<Value> {
        match self.resolver.set_manual_identity(identity).await {
            ManualIdentityOutcome::Rejected => {
                return Err(ResolverError::manual_identity_rejected().into());
            }
            ManualIdentityOutcome::Applied | ManualIdentityOutcome::Cleared => {}
        }
        self.align_store().await;
        self.status().await
    }

    // =========================================================================
    // Profile
    // =========================================================================

    pub async fn show_profile(&self) -> AppErrorResult<Value> {
        let snapshot = self.resolver.snapshot().await;
        Ok(json!({
            "state": snapshot.state,
            "profile": snapshot.profile,
            "error": snapshot.error,
        }))
    }

    pub async fn refresh_profile(&self) -> AppErrorResult<Value> {
        let profile = self.resolver.refresh_profile().await?;
        Ok(json!({ "profile": profile }))
    }

    pub async fn update_profile(&self, changes: ProfileUpdate) -> AppErrorResult<Value> {
        if changes.is_empty() {
            return Err(AppError::usage("nothing to update"));
        }
        let profile = self.resolver.update_profile(changes).await?;
        Ok(json!({ "profile": profile }))
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Fetch the catalogs (filtered for the loaded profile) into the active
    /// partition. Nothing is replaced unless every fetch succeeds.
    pub async fn sync_catalog(&self) -> AppErrorResult<Value> {
        let id = self.require_active_identity().await?;
        let profile = self
            .resolver
            .profile()
            .await
            .filter(|profile| profile.belongs_to(&id));

        let (benefits, offers, medicines) = match profile {
            Some(ref profile) => tokio::try_join!(
                self.catalog.benefits_for_profile(profile),
                self.catalog.offers_for_profile(profile),
                self.catalog.medicines(),
            )?,
            None => tokio::try_join!(
                self.catalog.benefits(),
                self.catalog.offers(),
                self.catalog.medicines(),
            )?,
        };

        let counts = json!({
            "benefits": benefits.len(),
            "offers": offers.len(),
            "medicines": medicines.len(),
            "filtered": profile.is_some(),
        });
        if !self.store.replace_all(&id, benefits, offers, medicines).await {
            warn!("Identity changed during catalog sync, discarding result for {}", id);
            return self.status().await;
        }
        info!("Catalog synced for {}", id);

        Ok(json!({ "synced": counts }))
    }

    /// Cached catalog items. Hidden benefits are left out unless
    /// `include_hidden` is set.
    pub async fn list_catalog(
        &self,
        kind: Option<CatalogKind>,
        include_hidden: bool,
    ) -> AppErrorResult<Value> {
        let visible = self.store.visible().await;
        let benefits: Vec<&Benefit> = if include_hidden {
            visible.benefits.iter().collect()
        } else {
            visible.shown_benefits().collect()
        };

        let value = match kind {
            Some(CatalogKind::Benefits) => json!({ "benefits": benefits }),
            Some(CatalogKind::Offers) => json!({ "offers": visible.offers }),
            Some(CatalogKind::Medicines) => json!({ "medicines": visible.medicines }),
            None => json!({
                "benefits": benefits,
                "offers": visible.offers,
                "medicines": visible.medicines,
                "hiddenBenefitIds": visible.hidden_benefit_ids,
            }),
        };
        Ok(value)
    }

    pub async fn toggle_hidden(&self, benefit_id: &str) -> AppErrorResult<Value> {
        self.require_active_identity().await?;
        let hidden = self.store.toggle_hidden(benefit_id).await;
        Ok(json!({ "benefitId": benefit_id, "hidden": hidden }))
    }

    pub async fn hidden_ids(&self) -> AppErrorResult<Value> {
        Ok(json!({ "hidden": self.store.hidden_ids().await }))
    }

    // =========================================================================
    // Session end
    // =========================================================================

    pub async fn logout(&self) -> AppErrorResult<Value> {
        self.resolver.reset().await;
        self.align_store().await;
        self.status().await
    }

    /// Delete the remote profile (verified ids only), drop the cached
    /// partition, then reset.
    pub async fn delete_account(&self) -> AppErrorResult<Value> {
        let identity = self.resolver.current_identity().await;
        let id = identity
            .id()
            .cloned()
            .ok_or_else(ResolverError::no_active_identity)?;

        if identity.has_verified_id() {
            self.profiles.delete_profile(&id).await?;
        }
        self.store.forget(&id).await;
        self.resolver.reset().await;
        self.align_store().await;
        info!("Account {} deleted", id);

        Ok(json!({ "deleted": id }))
    }

    /// Stop background work and close local storage.
    pub async fn shutdown(self) {
        self.resolver.close().await;
        self.bridge.abort();
        self.db.close().await;
    }

    /// Activate the resolver's current identity in the store. The bridge does
    /// the same from events; this makes it visible before a command returns.
    async fn align_store(&self) {
        let identity = self.resolver.current_identity().await;
        self.store.activate(identity.id()).await;
    }

    async fn require_active_identity(&self) -> AppErrorResult<IdentityId> {
        self.store
            .active_identity()
            .await
            .ok_or_else(|| ResolverError::no_active_identity().into())
    }
}
