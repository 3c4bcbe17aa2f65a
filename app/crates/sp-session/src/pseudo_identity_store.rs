use sp_core::PseudoIdentity;
use sp_db::{LocalEntryRepository, Result as DbResult};

use log::warn;

/// Local storage key of the persisted pseudo identity.
pub const MANUAL_IDENTITY_KEY: &str = "support-plus-manual-user";

/// Persists the device-local pseudo identity between runs.
#[derive(Clone)]
pub struct PseudoIdentityStore {
    entries: LocalEntryRepository,
}

impl PseudoIdentityStore {
    pub fn new(entries: LocalEntryRepository) -> Self {
        Self { entries }
    }

    /// The stored identity with its `unverified` tag recomputed. Unreadable
    /// entries are treated as absent.
    pub async fn load(&self) -> DbResult<Option<PseudoIdentity>> {
        let Some(json) = self.entries.get(MANUAL_IDENTITY_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<PseudoIdentity>(&json) {
            Ok(pseudo) if !pseudo.id.is_empty() => Ok(Some(pseudo.retagged())),
            Ok(_) => Ok(None),
            Err(e) => {
                warn!("Ignoring unreadable manual identity: {}", e);
                Ok(None)
            }
        }
    }

    pub async fn save(&self, pseudo: &PseudoIdentity) -> DbResult<()> {
        let json = serde_json::to_string(pseudo)?;
        self.entries.set(MANUAL_IDENTITY_KEY, &json).await
    }

    pub async fn clear(&self) -> DbResult<()> {
        self.entries.remove(MANUAL_IDENTITY_KEY).await.map(|_| ())
    }
}
