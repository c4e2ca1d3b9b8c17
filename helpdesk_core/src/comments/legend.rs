use chrono::{NaiveDate, NaiveDateTime};
use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::dto::{Legend, Visibility};

static EDIT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\s*Edit Comment.*$").expect("edit suffix pattern"));

// "<author> - DD/MM/YYYY[ HH[:MM[:SS]]][ (XX)]". The date and time tokens are
// taken whole and validated separately, so a malformed stamp still yields the marker.
static LEGEND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<author>.+?)\s*-\s*(?P<date>\d+/\d+/\d+)(?P<date_tail>[^\s(]*)(?:\s+(?P<time>[\d:]+)(?P<time_tail>[^\s(]*))?(?:\s*\((?P<marker>[^)]*)\))?",
    )
    .expect("legend pattern")
});

/// Parse a comment caption such as `Jane Doe - 05/12/2025 17:13:11 (WN)`.
///
/// Never fails: a caption that does not look like a legend yields an empty
/// author, no date and customer-facing visibility.
pub fn parse_legend(caption: &str) -> Legend {
    let caption = EDIT_SUFFIX.replace(caption.trim(), "");
    let caption = caption.trim();

    let Some(caps) = LEGEND.captures(caption) else {
        return Legend::default();
    };

    let date = parse_stamp(&caps);
    if date.is_none() {
        log::debug!("Legend date is not a valid calendar date: {}", caption);
    }

    Legend {
        author: caps["author"].trim().to_string(),
        date,
        visibility: Visibility::from_marker(caps.name("marker").map(|m| m.as_str().trim())),
    }
}

fn parse_stamp(caps: &Captures<'_>) -> Option<NaiveDateTime> {
    let tail_is_empty = |name: &str| caps.name(name).is_none_or(|m| m.as_str().is_empty());
    if !tail_is_empty("date_tail") || !tail_is_empty("time_tail") {
        return None;
    }

    let [day, month, year] = split_numbers(&caps["date"], '/')?[..] else {
        return None;
    };
    if caps["date"].rsplit('/').next()?.len() != 4 {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(year as i32, month, day)?;

    // No time part means midnight; minutes and seconds default to zero.
    let (hour, minute, second) = match caps.name("time") {
        None => (0, 0, 0),
        Some(time) => match split_numbers(time.as_str(), ':')?[..] {
            [h] => (h, 0, 0),
            [h, m] => (h, m, 0),
            [h, m, s] => (h, m, s),
            _ => return None,
        },
    };

    date.and_hms_opt(hour, minute, second)
}

/// Day, month and time parts are one or two digits; the year is the only
/// longer part and is checked by the caller.
fn split_numbers(token: &str, separator: char) -> Option<Vec<u32>> {
    let parts: Vec<&str> = token.split(separator).collect();
    let last = parts.len().saturating_sub(1);

    parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            let too_long = part.len() > 2 && !(separator == '/' && i == last);
            if part.is_empty() || too_long {
                return None;
            }
            part.parse().ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(y, m, d).and_then(|date| date.and_hms_opt(h, min, s))
    }

    #[test]
    fn test_parse_work_note() {
        let legend = parse_legend("Jane Doe - 05/12/2025 17:13:11 (WN)");
        assert_eq!(legend.author, "Jane Doe");
        assert_eq!(legend.date, at(2025, 12, 5, 17, 13, 11));
        assert_eq!(legend.visibility, Visibility::WorkNote);
    }

    #[test]
    fn test_parse_internal_and_customer_facing() {
        let internal = parse_legend("Support Bot - 01/02/2024 09:00:00 (IO)");
        assert_eq!(internal.visibility, Visibility::Internal);
        assert_eq!(internal.date, at(2024, 2, 1, 9, 0, 0));

        let public = parse_legend("Support Bot - 01/02/2024 09:00:00");
        assert_eq!(public.visibility, Visibility::CustomerFacing);

        let other = parse_legend("Support Bot - 01/02/2024 09:00:00 (XX)");
        assert_eq!(other.visibility, Visibility::CustomerFacing);
    }

    #[test]
    fn test_strips_edit_suffix() {
        let legend = parse_legend("  Eviosys API User - 05/12/2025 17:13:11 (IO) Edit Comment  ");
        assert_eq!(legend.author, "Eviosys API User");
        assert_eq!(legend.visibility, Visibility::Internal);
    }

    #[test]
    fn test_hyphenated_author() {
        let legend = parse_legend("Jean-Luc Picard - 10/03/2025 08:30:00");
        assert_eq!(legend.author, "Jean-Luc Picard");
        assert_eq!(legend.date, at(2025, 3, 10, 8, 30, 0));
    }

    #[test]
    fn test_seconds_default_to_zero() {
        let legend = parse_legend("Jane Doe - 05/12/2025 17:13 (WN)");
        assert_eq!(legend.date, at(2025, 12, 5, 17, 13, 0));
        assert_eq!(legend.visibility, Visibility::WorkNote);
    }

    #[test]
    fn test_unparsable_caption() {
        assert_eq!(parse_legend("Internal AI generated summary"), Legend::default());
        assert_eq!(parse_legend(""), Legend::default());
        assert_eq!(parse_legend("Jane Doe - yesterday"), Legend::default());
    }

    #[test]
    fn test_impossible_date_keeps_author() {
        let legend = parse_legend("Jane Doe - 31/02/2025 10:00:00 (IO)");
        assert_eq!(legend.author, "Jane Doe");
        assert_eq!(legend.date, None);
        assert_eq!(legend.visibility, Visibility::Internal);
    }

    #[test]
    fn test_date_without_time_is_midnight() {
        let legend = parse_legend("Jane Doe - 05/12/2025 (WN)");
        assert_eq!(legend.date, at(2025, 12, 5, 0, 0, 0));
        assert_eq!(legend.visibility, Visibility::WorkNote);

        let legend = parse_legend("Jane Doe - 05/12/2025");
        assert_eq!(legend.date, at(2025, 12, 5, 0, 0, 0));
    }

    #[test]
    fn test_malformed_time_keeps_marker() {
        let legend = parse_legend("Jane Doe - 05/12/2025 123:00:00 (IO)");
        assert_eq!(legend.author, "Jane Doe");
        assert_eq!(legend.date, None);
        assert_eq!(legend.visibility, Visibility::Internal);

        let legend = parse_legend("Agent Smith - 07/12/2025 109:00:00 (WN)");
        assert_eq!(legend.date, None);
        assert_eq!(legend.visibility, Visibility::WorkNote);

        let legend = parse_legend("Jane Doe - 05/12/2025 10:00:00:00 (IO)");
        assert_eq!(legend.date, None);
        assert_eq!(legend.visibility, Visibility::Internal);
    }

    #[test]
    fn test_malformed_year_drops_date() {
        let legend = parse_legend("Jane Doe - 05/12/20251 10:00:00 (IO)");
        assert_eq!(legend.date, None);
        assert_eq!(legend.visibility, Visibility::Internal);

        let legend = parse_legend("Jane Doe - 05/12/2025x 10:00:00");
        assert_eq!(legend.date, None);

        let legend = parse_legend("Jane Doe - 05/12/25 10:00:00");
        assert_eq!(legend.date, None);
    }

    #[test]
    fn test_malformed_day_drops_date() {
        let legend = parse_legend("Jane Doe - 105/12/2025 10:00:00 (WN)");
        assert_eq!(legend.date, None);
        assert_eq!(legend.visibility, Visibility::WorkNote);
    }
}
