use crate::ResolverState;

use sp_core::{Identity, Profile};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverSnapshot {
    pub identity: Identity,
    pub state: ResolverState,
    pub profile: Option<Profile>,
    pub error: Option<String>,
}
