use super::dto::CommentRecord;

/// Most recent customer-facing comment.
pub fn latest_visible(records: &[CommentRecord]) -> Option<&CommentRecord> {
    records.iter().find(|record| record.is_customer_facing())
}

/// The customer-facing comment before the most recent one.
pub fn previous_visible(records: &[CommentRecord]) -> Option<&CommentRecord> {
    let mut found_latest = false;

    for record in records.iter().filter(|record| record.is_customer_facing()) {
        if found_latest {
            return Some(record);
        }
        found_latest = true;
    }

    None
}
