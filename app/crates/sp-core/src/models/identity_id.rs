//! Identity ids and the verified-id format check.
//!
//! Ids issued by the remote auth provider are canonical hyphenated UUIDs.
//! Anything else (`sms:+79990000000`, `local-42`, ...) was fabricated on the
//! device and must never be sent to the remote profile store.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

const CANONICAL_LEN: usize = 36;
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Identifier of a user identity, remote or local.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityId(String);

impl IdentityId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Blank ids are treated as "no identity".
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn is_verified_format(&self) -> bool {
        is_verified_id_format(&self.0)
    }
}

impl From<Uuid> for IdentityId {
    fn from(value: Uuid) -> Self {
        Self(value.hyphenated().to_string())
    }
}

impl From<String> for IdentityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for IdentityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// True for a canonical `8-4-4-4-12` hex UUID (any case) whose version
/// nibble is 1 through 5.
pub fn is_verified_id_format(value: &str) -> bool {
    if value.len() != CANONICAL_LEN {
        return false;
    }

    let shape_ok = value.bytes().enumerate().all(|(index, byte)| {
        if HYPHEN_POSITIONS.contains(&index) {
            byte == b'-'
        } else {
            byte.is_ascii_hexdigit()
        }
    });
    if !shape_ok {
        return false;
    }

    match Uuid::parse_str(value) {
        Ok(uuid) => matches!(uuid.get_version_num(), 1..=5),
        Err(_) => false,
    }
}
