//! Users View

use crate::user::User;

/// Case-insensitive substring match on username, name or email.
/// Missing fields are skipped; an empty term matches everyone.
pub fn matches_search(user: &User, term: &str) -> bool {
    let needle = term.to_lowercase();
    [user.username(), user.name(), user.email()]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
        || needle.is_empty()
}

pub fn search_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    users.iter().filter(|u| matches_search(u, term)).collect()
}

pub fn empty_message(term: &str) -> &'static str {
    if term.is_empty() {
        "No users found"
    } else {
        "No users match your search"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_as;
    use serde_json::json;

    fn sample() -> Vec<User> {
        normalize_as(json!([
            { "id": 1, "username": "johnny", "email": "j@example.com" },
            { "id": 2, "username": "ana", "email": "a@john.com" },
            { "id": 3, "username": "zed", "name": "Zed Shaw" },
            { "id": 4 }
        ]))
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let users = sample();
        let hits = search_users(&users, "JOHN");
        let ids: Vec<_> = hits.iter().filter_map(|u| u.id()).collect();
        assert_eq!(ids, ["1", "2"]);

        let hits = search_users(&users, "shaw");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_empty_term_returns_everyone() {
        let users = sample();
        assert_eq!(search_users(&users, "").len(), users.len());
    }

    #[test]
    fn test_missing_fields_never_match() {
        let users = sample();
        assert!(!matches_search(&users[3], "a"));
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(empty_message(""), "No users found");
        assert_eq!(empty_message("x"), "No users match your search");
    }
}
