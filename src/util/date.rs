use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt::{Display, Write};

use crate::{ClientError, ClientResult};

pub const DEFAULT_FORMAT: &str = "YYYY-MM-DD HH:mm";

// Longest tokens first so "YYYY" wins over "YY", "MMMM" over "MM", etc.
const TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("M", "%-m"),
    ("DD", "%d"),
    ("D", "%-d"),
    ("dddd", "%A"),
    ("ddd", "%a"),
    ("HH", "%H"),
    ("H", "%-H"),
    ("hh", "%I"),
    ("h", "%-I"),
    ("mm", "%M"),
    ("m", "%-M"),
    ("ss", "%S"),
    ("s", "%-S"),
    ("SSS", "%3f"),
    ("A", "%p"),
    ("a", "%P"),
    ("ZZ", "%z"),
    ("Z", "%:z"),
];

/// Render a UTC timestamp in the machine's local timezone.
/// `format` uses day.js tokens and defaults to [`DEFAULT_FORMAT`].
pub fn utc_to_local(utc: &str, format: Option<&str>) -> ClientResult<String> {
    utc_to_timezone(utc, &Local, format)
}

pub fn utc_to_timezone<Tz>(utc: &str, tz: &Tz, format: Option<&str>) -> ClientResult<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let instant = parse_utc(utc)?;
    let pattern = translate_pattern(format.unwrap_or(DEFAULT_FORMAT));

    let items: Vec<Item<'_>> = StrftimeItems::new(&pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(ClientError::InvalidFormat(format.unwrap_or(DEFAULT_FORMAT).to_string()));
    }

    let mut out = String::new();
    write!(out, "{}", instant.with_timezone(tz).format_with_items(items.iter()))
        .map_err(|_| ClientError::InvalidFormat(format.unwrap_or(DEFAULT_FORMAT).to_string()))?;

    Ok(out)
}

/// Accepts RFC 3339, naive date-times (taken as UTC) and bare dates (UTC midnight).
pub fn parse_utc(input: &str) -> ClientResult<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, pattern) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }

    Err(ClientError::InvalidTimestamp(input.to_string()))
}

fn translate_pattern(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;

    while !rest.is_empty() {
        // [escaped text]
        if let Some(stripped) = rest.strip_prefix('[') {
            if let Some(end) = stripped.find(']') {
                push_literal(&mut out, &stripped[..end]);
                rest = &stripped[end + 1..];
                continue;
            }
        }

        if let Some((token, spec)) = TOKENS.iter().find(|(token, _)| rest.starts_with(token)) {
            out.push_str(spec);
            rest = &rest[token.len()..];
            continue;
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            push_literal(&mut out, c.encode_utf8(&mut [0; 4]));
        }
        rest = chars.as_str();
    }

    out
}

fn push_literal(out: &mut String, text: &str) {
    for c in text.chars() {
        if c == '%' {
            out.push_str("%%");
        } else {
            out.push(c);
        }
    }
}
