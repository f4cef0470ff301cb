//! The fixed user directory.

use serde::Serialize;

/// A store user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: u32,
    pub name: &'static str,
}

/// Id reported for every user "added" through the API. Nothing is stored.
pub const NEXT_USER_ID: u32 = 3;

const USERS: [User; 2] = [
    User {
        id: 1,
        name: "Alice",
    },
    User { id: 2, name: "Bob" },
];

/// All known users, ordered by id.
pub fn directory() -> &'static [User] {
    &USERS
}

/// Look up a user by the id exactly as it appears in a request path.
///
/// Only the canonical rendering matches: `"1"` finds Alice, `"01"` finds nobody.
pub fn find(id: &str) -> Option<&'static User> {
    directory().iter().find(|user| user.id.to_string() == id)
}

pub fn exists(id: &str) -> bool {
    find(id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_is_fixed() {
        let users = directory();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0], User { id: 1, name: "Alice" });
        assert_eq!(users[1], User { id: 2, name: "Bob" });
    }

    #[test]
    fn test_find_exact_ids() {
        assert_eq!(find("1").map(|u| u.name), Some("Alice"));
        assert_eq!(find("2").map(|u| u.name), Some("Bob"));
    }

    #[test]
    fn test_find_rejects_non_canonical_ids() {
        for id in ["0", "3", "99", "01", " 1", "1 ", "abc", "", "-1"] {
            assert!(find(id).is_none(), "id {:?} should not match", id);
            assert!(!exists(id));
        }
    }
}
