//! Teams View

use crate::team::Team;

/// "2 members"
pub fn members_label(team: &Team) -> String {
    format!("{} members", team.member_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use serde_json::json;

    #[test]
    fn test_members_label() {
        let team = Team::from(Record::new(json!({ "members": [1, 2] })));
        assert_eq!(members_label(&team), "2 members");
        let team = Team::from(Record::new(json!({ "name": "Solo" })));
        assert_eq!(members_label(&team), "0 members");
    }
}
