use sp_core::Profile;
use sp_db::{LocalEntryRepository, Result as DbResult};

use log::warn;

/// Local storage key of the last loaded profile.
pub const SAVED_PROFILE_KEY: &str = "support-plus-profile";

/// Keeps the last loaded profile so it survives a restart. For a pseudo
/// identity this is the only copy of its edits.
#[derive(Clone)]
pub struct SavedProfileStore {
    entries: LocalEntryRepository,
}

impl SavedProfileStore {
    pub fn new(entries: LocalEntryRepository) -> Self {
        Self { entries }
    }

    /// Unreadable entries are treated as absent.
    pub async fn load(&self) -> DbResult<Option<Profile>> {
        let Some(json) = self.entries.get(SAVED_PROFILE_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<Profile>(&json) {
            Ok(profile) if !profile.auth_user_id.is_empty() => Ok(Some(profile)),
            Ok(_) => Ok(None),
            Err(e) => {
                warn!("Ignoring unreadable saved profile: {}", e);
                Ok(None)
            }
        }
    }

    pub async fn save(&self, profile: &Profile) -> DbResult<()> {
        let json = serde_json::to_string(profile)?;
        self.entries.set(SAVED_PROFILE_KEY, &json).await
    }

    pub async fn clear(&self) -> DbResult<()> {
        self.entries.remove(SAVED_PROFILE_KEY).await.map(|_| ())
    }
}
