use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Myself.as_str(), "self");
    assert_eq!(Role::Relative.as_str(), "relative");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("self").unwrap(), Role::Myself);
    assert_eq!(Role::from_str("relative").unwrap(), Role::Relative);
    assert!(Role::from_str("guardian").is_err());
}

#[test]
fn test_role_serde_uses_wire_names() {
    assert_eq!(serde_json::to_string(&Role::Myself).unwrap(), "\"self\"");
    let parsed: Role = serde_json::from_str("\"relative\"").unwrap();
    assert_eq!(parsed, Role::Relative);
}
