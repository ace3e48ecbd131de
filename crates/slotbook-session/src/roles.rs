//! The administrator predicate.
//!
//! Kept as a standalone pure function so navigation gating and page
//! gating share one definition, and so it can be tested against a
//! fixture table without any session machinery.

use slotbook_types::Role;

/// The substring that marks a role as administrative, matched
/// case-insensitively against role names ("ADMIN", "Team Admin",
/// "administrator" all qualify).
const ADMIN_MARKER: &str = "admin";

/// Returns `true` iff any role's name contains the administrator
/// marker, case-insensitively.
///
/// Total and side-effect free: an empty (or not-yet-fetched) role set
/// answers `false` — authorization state that isn't known yet is
/// treated as unauthorized, never the other way around.
pub fn is_administrator(roles: &[Role]) -> bool {
    roles
        .iter()
        .any(|role| role.role_name.to_lowercase().contains(ADMIN_MARKER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotbook_types::RoleId;

    fn role(name: &str) -> Role {
        Role {
            role_id: RoleId(1),
            role_name: name.into(),
            role_desc: None,
        }
    }

    #[test]
    fn test_is_administrator_fixture_table() {
        let cases: [(&[Role], bool); 6] = [
            (&[role("ADMIN")], true),
            (&[role("Team Admin")], true),
            (&[role("administrator")], true),
            (&[role("member")], false),
            (&[role("member"), role("admin")], true),
            (&[], false),
        ];

        for (roles, expected) in cases {
            assert_eq!(
                is_administrator(roles),
                expected,
                "roles {roles:?} should answer {expected}"
            );
        }
    }

    #[test]
    fn test_is_administrator_does_not_match_partial_lookalikes() {
        // "admin" must appear in the name itself.
        assert!(!is_administrator(&[role("adm")]));
        assert!(!is_administrator(&[role("ad-min")]));
    }
}
