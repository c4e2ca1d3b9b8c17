use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fields of the open ticket that templates can refer to.
///
/// Built fresh by every refresh and handed to whoever needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketData {
    pub person_name: String,
    pub last_comment: String,
    pub last_comment_date: String,
    pub previous_to_last_comment_date: String,
    pub next_contact_date: String,
    #[serde(rename = "totalTimeCON")]
    pub total_time_con: String,
    #[serde(rename = "totalTimeCUS")]
    pub total_time_cus: String,
    pub total_ticket_time: String,
}

impl TicketData {
    /// The template data bag, keyed by the names templates use.
    pub fn to_bag(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("personName".to_string(), self.person_name.clone()),
            ("lastComment".to_string(), self.last_comment.clone()),
            ("lastCommentDate".to_string(), self.last_comment_date.clone()),
            (
                "previousToLastCommentDate".to_string(),
                self.previous_to_last_comment_date.clone(),
            ),
            ("nextContactDate".to_string(), self.next_contact_date.clone()),
            ("totalTimeCON".to_string(), self.total_time_con.clone()),
            ("totalTimeCUS".to_string(), self.total_time_cus.clone()),
            ("totalTicketTime".to_string(), self.total_ticket_time.clone()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bag_matches_serialized_keys() {
        let data = TicketData {
            person_name: "Jane".to_string(),
            total_time_con: "1.5".to_string(),
            ..Default::default()
        };

        let serialized = serde_json::to_value(&data).unwrap();
        let bag = data.to_bag();

        assert_eq!(bag.len(), serialized.as_object().unwrap().len());
        for (key, value) in &bag {
            assert_eq!(serialized[key], *value, "key {}", key);
        }
        assert_eq!(bag["personName"], "Jane");
        assert_eq!(bag["totalTimeCON"], "1.5");
        assert_eq!(bag["nextContactDate"], "");
    }
}
