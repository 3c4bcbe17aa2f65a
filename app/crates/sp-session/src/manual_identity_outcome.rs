/// Result of `IdentityResolver::set_manual_identity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualIdentityOutcome {
    Applied,
    Cleared,
    /// A remote session is active; nothing changed
    Rejected,
}
