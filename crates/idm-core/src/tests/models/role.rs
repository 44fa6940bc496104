use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Member.as_str(), "member");
    assert_eq!(Role::Administrator.as_str(), "administrator");
    assert_eq!(
        Role::PlatformAdministrator.as_str(),
        "platform_administrator"
    );
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("member").unwrap(), Role::Member);
    assert_eq!(Role::from_str("Administrator").unwrap(), Role::Administrator);
    assert_eq!(Role::from_str("admin").unwrap(), Role::Administrator);
    assert_eq!(
        Role::from_str("platform-administrator").unwrap(),
        Role::PlatformAdministrator
    );
    assert!(Role::from_str("owner").is_err());
}

#[test]
fn test_role_persisted_value_round_trips() {
    for role in [
        Role::Member,
        Role::Administrator,
        Role::PlatformAdministrator,
    ] {
        assert_eq!(Role::from_i64(role.as_i64()), Some(role));
    }
    assert_eq!(Role::from_i64(0), None);
    assert_eq!(Role::from_i64(42), None);
}

#[test]
fn test_role_ordering_lowest_first() {
    assert!(Role::Member < Role::Administrator);
    assert!(Role::Administrator < Role::PlatformAdministrator);
}

#[test]
fn test_role_default() {
    assert_eq!(Role::default(), Role::Member);
}
