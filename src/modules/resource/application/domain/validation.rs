use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("URL pattern is valid"));

/// Collects one message per failing field while a payload is checked.
///
/// Each check records its message and hands back whatever value it could
/// extract; [`FieldErrors::finish`] then decides whether the record stands.
#[derive(Debug, Default)]
pub struct FieldErrors {
    messages: Vec<String>,
}

impl FieldErrors {
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Present and not blank. Returns the trimmed text.
    pub fn required_text(&mut self, value: Option<String>, message: &str) -> String {
        match value {
            Some(text) if !text.trim().is_empty() => text.trim().to_string(),
            _ => {
                self.push(message);
                String::new()
            }
        }
    }

    pub fn required_enum<T: FromStr>(
        &mut self,
        value: Option<String>,
        field: &str,
        missing: &str,
    ) -> Option<T> {
        match value {
            Some(raw) if !raw.trim().is_empty() => match raw.parse() {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    self.push(format!("`{}` is not a valid {}", raw, field));
                    None
                }
            },
            _ => {
                self.push(missing);
                None
            }
        }
    }

    pub fn required_date(&mut self, value: Option<String>, message: &str) -> Option<DateTime<Utc>> {
        let parsed = value.as_deref().and_then(parse_date);
        if parsed.is_none() {
            self.push(message);
        }
        parsed
    }

    /// Absent or blank is fine; anything else must parse.
    pub fn optional_date(&mut self, value: Option<String>, message: &str) -> Option<DateTime<Utc>> {
        let raw = optional_text(value)?;
        let parsed = parse_date(&raw);
        if parsed.is_none() {
            self.push(message);
        }
        parsed
    }

    /// Absent or blank is fine; anything else must be an http(s) URL.
    pub fn optional_url(&mut self, value: Option<String>, message: &str) -> Option<String> {
        let raw = optional_text(value)?;
        if URL_PATTERN.is_match(&raw) {
            Some(raw)
        } else {
            self.push(message);
            None
        }
    }

    /// Returns `record` when no check failed, otherwise every collected message.
    pub fn finish<T>(self, record: Option<T>) -> Result<T, Vec<String>> {
        if !self.messages.is_empty() {
            return Err(self.messages);
        }
        record.ok_or_else(|| vec!["Invalid payload".to_string()])
    }
}

/// `None` for absent or blank text, trimmed text otherwise.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Drops blank entries and keeps the first occurrence of duplicates.
pub fn text_list(values: Option<Vec<String>>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values.unwrap_or_default() {
        let value = value.trim().to_string();
        if !value.is_empty() && !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

/// Accepts RFC 3339 timestamps, offset-less ISO timestamps (read as UTC) and
/// plain `YYYY-MM-DD` dates.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
