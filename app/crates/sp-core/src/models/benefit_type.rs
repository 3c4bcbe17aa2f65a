use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitType {
    Social,
    Medical,
    Transport,
    Housing,
    Utility,
    Tax,
    Education,
    Culture,
}

impl BenefitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Social => "social",
            Self::Medical => "medical",
            Self::Transport => "transport",
            Self::Housing => "housing",
            Self::Utility => "utility",
            Self::Tax => "tax",
            Self::Education => "education",
            Self::Culture => "culture",
        }
    }
}

impl FromStr for BenefitType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "social" => Ok(Self::Social),
            "medical" => Ok(Self::Medical),
            "transport" => Ok(Self::Transport),
            "housing" => Ok(Self::Housing),
            "utility" => Ok(Self::Utility),
            "tax" => Ok(Self::Tax),
            "education" => Ok(Self::Education),
            "culture" => Ok(Self::Culture),
            _ => Err(CoreError::InvalidBenefitType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for BenefitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
