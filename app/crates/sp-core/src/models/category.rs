use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Beneficiary category of a profile (also the target group of catalog items).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[default]
    Pensioner,
    Disabled,
    Veteran,
    LargeFamily,
    LowIncome,
    Child,
    Russia,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Self::Pensioner,
        Self::Disabled,
        Self::Veteran,
        Self::LargeFamily,
        Self::LowIncome,
        Self::Child,
        Self::Russia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pensioner => "pensioner",
            Self::Disabled => "disabled",
            Self::Veteran => "veteran",
            Self::LargeFamily => "large-family",
            Self::LowIncome => "low-income",
            Self::Child => "child",
            Self::Russia => "russia",
        }
    }

    /// Map a backend target-group code onto a canonical category.
    ///
    /// Known aliases map directly; other values get `_` replaced by `-` and
    /// are matched against the canonical names. Unknown codes yield `None`.
    pub fn normalize(value: &str) -> Option<Self> {
        if value.is_empty() {
            return None;
        }

        if let Some(category) = Self::from_alias(value) {
            return Some(category);
        }

        Self::from_str(&value.replace('_', "-")).ok()
    }

    /// Normalize a list of codes, dropping unknown ones and duplicates.
    pub fn normalize_all<S: AsRef<str>>(values: &[S]) -> Vec<Self> {
        let mut categories = Vec::new();
        for value in values {
            if let Some(category) = Self::normalize(value.as_ref())
                && !categories.contains(&category)
            {
                categories.push(category);
            }
        }
        categories
    }

    fn from_alias(value: &str) -> Option<Self> {
        let category = match value {
            "pensioner" | "woman_55_plus" | "man_60_plus" => Self::Pensioner,
            "disabled"
            | "invalid_group_1"
            | "invalid_group_2"
            | "invalid_child"
            | "disabled_child_family"
            | "federal_beneficiary"
            | "indigenous_small_peoples_north" => Self::Disabled,
            "veteran" => Self::Veteran,
            "large-family"
            | "large_family"
            | "many_children_family"
            | "family-with-children"
            | "family_with_children"
            | "family_with_child_under_6"
            | "family_with_child_under6"
            | "young_family" => Self::LargeFamily,
            "low-income" | "low_income" | "dwfo_resident" | "teacher" | "doctor" => {
                Self::LowIncome
            }
            "child" | "child_0_3" | "child_0_6" | "child_0_17" | "youth_under_23" => Self::Child,
            "russia" => Self::Russia,
            _ => return None,
        };
        Some(category)
    }
}

impl FromStr for Category {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CoreError::InvalidCategory {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
