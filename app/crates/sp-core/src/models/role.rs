use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Whose benefits a profile describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    /// The account holder themselves
    #[default]
    #[serde(rename = "self")]
    Myself,
    /// A relative managed by the account holder
    #[serde(rename = "relative")]
    Relative,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Myself => "self",
            Self::Relative => "relative",
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "self" => Ok(Self::Myself),
            "relative" => Ok(Self::Relative),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
