use crate::Result as CacheResult;

use sp_core::{Benefit, CachePartition, IdentityId, Medicine, Offer};
use sp_db::PartitionRepository;

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::RwLock;

/// Cache store handle; clones share the same state.
///
/// Mutations hold the write lock across the durable write so memory and disk
/// see writes in the same order. A failed durable write is logged and the
/// in-memory state stays authoritative.
#[derive(Clone)]
pub struct CacheStore {
    inner: Arc<RwLock<StoreInner>>,
    repository: PartitionRepository,
}

struct StoreInner {
    /// Identity whose partition is visible; `None` means nothing is visible
    active: Option<IdentityId>,
    visible: CachePartition,
    partitions: HashMap<IdentityId, CachePartition>,
}

impl CacheStore {
    /// Load every persisted partition of the repository's store.
    pub async fn open(repository: PartitionRepository) -> CacheResult<Self> {
        let partitions: HashMap<_, _> = repository.find_all().await?.into_iter().collect();
        info!(
            "Cache store '{}' opened with {} partition(s)",
            repository.store_name(),
            partitions.len()
        );

        Ok(Self {
            inner: Arc::new(RwLock::new(StoreInner {
                active: None,
                visible: CachePartition::default(),
                partitions,
            })),
            repository,
        })
    }

    /// Make `identity_id`'s partition the visible one, creating it empty if
    /// needed. `None` (or a blank id) hides everything. Idempotent.
    pub async fn activate(&self, identity_id: Option<&IdentityId>) {
        let mut inner = self.inner.write().await;

        let Some(id) = identity_id.filter(|id| !id.is_empty()) else {
            if inner.active.take().is_some() {
                debug!("Cache store deactivated");
            }
            inner.visible = CachePartition::default();
            return;
        };

        if inner.active.as_ref() == Some(id) {
            return;
        }

        let created = !inner.partitions.contains_key(id);
        let partition = inner.partitions.entry(id.clone()).or_default().clone();
        inner.visible = partition;
        inner.active = Some(id.clone());
        debug!("Cache store activated for {}", id);

        if created {
            self.persist(&inner).await;
        }
    }

    pub async fn replace_benefits(&self, benefits: Vec<Benefit>) {
        self.mutate(|partition| partition.benefits = benefits).await;
    }

    pub async fn replace_offers(&self, offers: Vec<Offer>) {
        self.mutate(|partition| partition.offers = offers).await;
    }

    pub async fn replace_medicines(&self, medicines: Vec<Medicine>) {
        self.mutate(|partition| partition.medicines = medicines).await;
    }

    /// Replace the whole catalog of `identity_id` in one write, as long as it
    /// is still the active identity. Returns `false` and changes nothing when
    /// another identity (or none) became active in the meantime.
    pub async fn replace_all(
        &self,
        identity_id: &IdentityId,
        benefits: Vec<Benefit>,
        offers: Vec<Offer>,
        medicines: Vec<Medicine>,
    ) -> bool {
        let mut inner = self.inner.write().await;
        if inner.active.as_ref() != Some(identity_id) {
            return false;
        }

        inner.visible.benefits = benefits;
        inner.visible.offers = offers;
        inner.visible.medicines = medicines;
        let visible = inner.visible.clone();
        inner.partitions.insert(identity_id.clone(), visible);

        self.persist(&inner).await;
        true
    }

    /// Flip whether a benefit is hidden; returns whether it is hidden afterwards.
    pub async fn toggle_hidden(&self, benefit_id: &str) -> bool {
        let mut hidden = false;
        self.mutate(|partition| hidden = partition.toggle_hidden(benefit_id))
            .await;
        hidden
    }

    /// Hide everything; stored partitions are kept.
    pub async fn logout(&self) {
        self.activate(None).await;
    }

    /// Drop an identity's partition from memory and disk.
    pub async fn forget(&self, identity_id: &IdentityId) {
        let mut inner = self.inner.write().await;

        inner.partitions.remove(identity_id);
        if inner.active.as_ref() == Some(identity_id) {
            inner.active = None;
            inner.visible = CachePartition::default();
        }

        match self.repository.delete(identity_id).await {
            Ok(_) => info!("Cache partition for {} forgotten", identity_id),
            Err(e) => warn!(
                "Failed to delete cache partition for {}: {}",
                identity_id, e
            ),
        }
    }

    pub async fn visible(&self) -> CachePartition {
        self.inner.read().await.visible.clone()
    }

    pub async fn visible_benefits(&self) -> Vec<Benefit> {
        self.inner.read().await.visible.benefits.clone()
    }

    pub async fn visible_offers(&self) -> Vec<Offer> {
        self.inner.read().await.visible.offers.clone()
    }

    pub async fn visible_medicines(&self) -> Vec<Medicine> {
        self.inner.read().await.visible.medicines.clone()
    }

    pub async fn hidden_ids(&self) -> Vec<String> {
        self.inner.read().await.visible.hidden_benefit_ids.clone()
    }

    pub async fn active_identity(&self) -> Option<IdentityId> {
        self.inner.read().await.active.clone()
    }

    pub async fn partition_count(&self) -> usize {
        self.inner.read().await.partitions.len()
    }

    /// Apply `change` to the visible slice and write it through to the active
    /// identity's partition, if any.
    async fn mutate<F>(&self, change: F)
    where
        F: FnOnce(&mut CachePartition),
    {
        let mut inner = self.inner.write().await;
        change(&mut inner.visible);

        let Some(id) = inner.active.clone() else {
            return;
        };
        let visible = inner.visible.clone();
        inner.partitions.insert(id, visible);

        self.persist(&inner).await;
    }

    async fn persist(&self, inner: &StoreInner) {
        let Some(id) = inner.active.as_ref() else {
            return;
        };

        if let Err(e) = self.repository.upsert(id, &inner.visible).await {
            warn!("Failed to persist cache partition for {}: {}", id, e);
        }
    }
}
