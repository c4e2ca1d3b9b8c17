use crate::comments::dto::CommentRecord;
use crate::comments::extract_comments;
use crate::comments::selector::{latest_visible, previous_visible};
use crate::helpers::utils::{format_date, format_number};
use crate::page::{HostPage, Lookup};

use super::dto::TicketData;

pub const REPORTED_BY_FIELD: &str = "txt_ed_reported_by";
pub const NEXT_CONTACT_FIELD: &str = "txt_next_contact_date";
pub const TOTAL_TIME_CON_FIELD: &str = "lbl_total_time_CON";
pub const TOTAL_TIME_CUS_FIELD: &str = "lbl_total_time_CUS";
pub const QUOTE_FIELD: &str = "txt_ed_quote";

/// Rebuild the ticket data from the page. Missing only when the comment
/// container is absent; individual missing fields are logged and left empty.
pub fn refresh_ticket_data<P: HostPage + ?Sized>(page: &P) -> Lookup<TicketData> {
    log::info!("Ticket opened, refreshing ticket data");

    let blocks = match page.comment_blocks() {
        Lookup::Found(blocks) => blocks,
        Lookup::Missing { target } => {
            log::info!("Could not find {}. refresh_ticket_data", target);
            return Lookup::Missing { target };
        }
    };

    let comments = extract_comments(&blocks);
    let last = latest_visible(&comments);
    let previous = previous_visible(&comments);

    let data = TicketData {
        person_name: read_field(page, REPORTED_BY_FIELD).trim().to_string(),
        last_comment: last.map(|c| c.content.clone()).unwrap_or_default(),
        last_comment_date: comment_date(last),
        previous_to_last_comment_date: comment_date(previous),
        next_contact_date: read_field(page, NEXT_CONTACT_FIELD).trim().to_string(),
        total_time_con: read_total(page, TOTAL_TIME_CON_FIELD),
        total_time_cus: read_total(page, TOTAL_TIME_CUS_FIELD),
        total_ticket_time: read_field(page, QUOTE_FIELD),
    };

    log::info!("Ticket data updated: {:?}", data);
    Lookup::Found(data)
}

fn comment_date(comment: Option<&CommentRecord>) -> String {
    comment
        .and_then(|c| c.date)
        .map(|date| format_date(date.date()))
        .unwrap_or_default()
}

fn read_field<P: HostPage + ?Sized>(page: &P, id: &str) -> String {
    page.field_value(id)
        .or_log("refresh_ticket_data")
        .unwrap_or_default()
}

/// Time totals are label texts; zero or non-numeric totals are blank.
fn read_total<P: HostPage + ?Sized>(page: &P, id: &str) -> String {
    let raw = read_field(page, id);
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    match trimmed.parse::<f64>() {
        Ok(total) if total.is_finite() && total != 0.0 => format_number(total),
        _ => String::new(),
    }
}
