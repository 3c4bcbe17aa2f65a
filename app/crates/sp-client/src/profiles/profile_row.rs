use sp_core::{Category, DEFAULT_REGION, IdentityId, Profile, Role};

use std::str::FromStr;

use serde::Deserialize;

/// Profile as stored remotely; any column may be null.
#[derive(Debug, Deserialize)]
pub(crate) struct ProfileRow {
    pub id: String,
    pub auth_user_id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub snils: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default)]
    pub simple_mode_enabled: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProfileEnvelope {
    pub profile: ProfileRow,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: row.id,
            auth_user_id: IdentityId::new(row.auth_user_id),
            name: row.full_name,
            email: row.email,
            phone: row.phone,
            region: row.region.unwrap_or_else(|| DEFAULT_REGION.to_string()),
            category: row
                .category
                .as_deref()
                .and_then(Category::normalize)
                .unwrap_or_default(),
            document_number: row.snils,
            role: row
                .role
                .as_deref()
                .and_then(|role| Role::from_str(role).ok())
                .unwrap_or_default(),
            interests: row.interests.unwrap_or_default(),
            simple_mode_enabled: row.simple_mode_enabled.unwrap_or(true),
        }
    }
}
