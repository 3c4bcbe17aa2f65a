use crate::{Category, CoreError, Result as CoreErrorResult, Role};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

const DOCUMENT_NUMBER_DIGITS: usize = 11;

/// Partial profile edit. `None` fields are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(rename = "snils", skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simple_mode_enabled: Option<bool>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if let Some(ref region) = self.region
            && region.trim().is_empty()
        {
            return Err(CoreError::Validation {
                message: "region cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // SNILS may be typed with separators: "123-456-789 01"
        if let Some(ref document_number) = self.document_number {
            let digits = document_number
                .chars()
                .filter(char::is_ascii_digit)
                .count();
            let only_separators = document_number
                .chars()
                .all(|c| c.is_ascii_digit() || c == '-' || c == ' ');
            if digits != DOCUMENT_NUMBER_DIGITS || !only_separators {
                return Err(CoreError::Validation {
                    message: format!(
                        "document number must contain {} digits",
                        DOCUMENT_NUMBER_DIGITS
                    ),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(())
    }
}
