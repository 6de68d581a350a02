//! Text formatting shared by the list and detail views.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

use crate::constants::{CURRENCY_SUFFIX, LABEL_JUST_NOW, LABEL_PRICE_UNSET, MEMO_PREVIEW_CHARS};

static LOCATION_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[장소:\s*(.*?)\]\n?").unwrap());

/// `15000` → `15,000원`; `0` → the unset label.
#[must_use]
pub fn format_price(price: u64) -> String {
    if price == 0 {
        return LABEL_PRICE_UNSET.to_string();
    }
    format!("{}{CURRENCY_SUFFIX}", group_thousands(price))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse the timestamp formats the backend is known to emit.
///
/// Zone-less forms are read as UTC. A bare integer is epoch milliseconds.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    if raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw
            .parse::<i64>()
            .ok()
            .and_then(DateTime::from_timestamp_millis);
    }
    None
}

/// Human-relative age of `timestamp` as seen at `now`.
///
/// Floor division throughout: 59 s is "just now", 119 s is "1분 전".
#[must_use]
pub fn relative_time(timestamp: &str, now: DateTime<Utc>) -> String {
    let Some(past) = parse_timestamp(timestamp) else {
        return LABEL_JUST_NOW.to_string();
    };
    let seconds = (now - past).num_seconds();
    if seconds < 60 {
        return LABEL_JUST_NOW.to_string();
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{minutes}분 전");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}시간 전");
    }
    format!("{}일 전", hours / 24)
}

/// First 40 characters of `memo`, with `...` appended when cut.
///
/// Counts `char`s, so an emoji outside the BMP is one character, not two.
#[must_use]
pub fn memo_preview(memo: &str) -> String {
    let mut chars = memo.chars();
    let head: String = chars.by_ref().take(MEMO_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Split a leading `[장소: X]` line off a memo.
///
/// Returns the location (if tagged and non-blank) and the remaining body.
#[must_use]
pub fn split_location(memo: &str) -> (Option<&str>, &str) {
    match LOCATION_TAG.captures(memo) {
        Some(caps) => {
            let body = &memo[caps.get(0).map_or(0, |m| m.end())..];
            let location = caps
                .get(1)
                .map(|m| m.as_str().trim())
                .filter(|s| !s.is_empty());
            (location, body)
        }
        None => (None, memo),
    }
}
