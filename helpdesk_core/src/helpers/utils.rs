use chrono::{NaiveDate, NaiveDateTime};

/// en-GB short date, e.g. `05/12/2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// en-GB date with hour and minute, e.g. `05/12/2025, 17:13`.
pub fn format_date_time(date: &NaiveDateTime) -> String {
    date.format("%d/%m/%Y, %H:%M").to_string()
}

/// Numeric display without a trailing `.0`: `2`, `1.5`, `0.25`.
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
