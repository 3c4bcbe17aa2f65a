//! Durable user profile.

use crate::{Category, IdentityId, ProfileUpdate, Role};

use serde::{Deserialize, Serialize};

/// Region assigned to profiles that have not chosen one ("all regions").
pub const DEFAULT_REGION: &str = "all";
pub const DEFAULT_DISPLAY_NAME: &str = "User";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    /// Identity the profile belongs to
    pub auth_user_id: IdentityId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub region: String,
    pub category: Category,
    /// Personal insurance account number (SNILS)
    pub document_number: Option<String>,
    pub role: Role,
    pub interests: Vec<String>,
    pub simple_mode_enabled: bool,
}

impl Profile {
    /// Profile synthesized on the device for identities that cannot reach the
    /// remote profile store.
    pub fn fallback(id: &IdentityId, email: Option<&str>, phone: Option<&str>) -> Self {
        let name = email
            .filter(|email| !email.is_empty())
            .or_else(|| phone.filter(|phone| !phone.is_empty()))
            .unwrap_or(DEFAULT_DISPLAY_NAME);

        Self {
            id: id.as_str().to_string(),
            auth_user_id: id.clone(),
            name: Some(name.to_string()),
            email: email.map(String::from),
            phone: phone.map(String::from),
            region: String::from(DEFAULT_REGION),
            category: Category::default(),
            document_number: None,
            role: Role::default(),
            interests: Vec::new(),
            simple_mode_enabled: true,
        }
    }

    pub fn belongs_to(&self, id: &IdentityId) -> bool {
        &self.auth_user_id == id
    }

    /// Apply a partial edit in place (used for locally held profiles).
    pub fn apply(&mut self, update: &ProfileUpdate) {
        if let Some(ref name) = update.full_name {
            self.name = Some(name.clone());
        }
        if let Some(ref email) = update.email {
            self.email = Some(email.clone());
        }
        if let Some(ref phone) = update.phone {
            self.phone = Some(phone.clone());
        }
        if let Some(ref region) = update.region {
            self.region = region.clone();
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(ref document_number) = update.document_number {
            self.document_number = Some(document_number.clone());
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        if let Some(ref interests) = update.interests {
            self.interests = interests.clone();
        }
        if let Some(simple_mode_enabled) = update.simple_mode_enabled {
            self.simple_mode_enabled = simple_mode_enabled;
        }
    }
}
