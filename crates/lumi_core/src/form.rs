use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MEDIA_COUNT: i64 = 20;
pub const MIN_MEDIA_COUNT: i64 = 1;
pub const MAX_MEDIA_COUNT: i64 = 10_000;

/// Ordered `(name, value)` pairs exactly as the form yields them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSnapshot {
    fields: Vec<(String, String)>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = FormSnapshot::new();
        for (name, value) in iter {
            form.push(name, value);
        }
        form
    }
}

/// JSON body of `POST /launch`.
///
/// Only fields present in the originating form are serialized; everything the
/// panel does not interpret lands in `extra` as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LaunchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub and: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore: Option<Vec<String>>,
    #[serde(
        rename = "mediaCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub media_count: Option<i64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl LaunchRequest {
    pub fn from_form(form: &FormSnapshot) -> Self {
        let mut request = LaunchRequest::default();
        // Later duplicates overwrite earlier ones, like assigning into an object.
        for (name, value) in form.fields() {
            match name {
                "tag" => request.tag = Some(split_list(value)),
                "and" => request.and = Some(split_list(value)),
                "ignore" => request.ignore = Some(split_list(value)),
                "mediaCount" => request.media_count = Some(parse_media_count(value)),
                other => {
                    request.extra.insert(other.to_string(), value.to_string());
                }
            }
        }
        request
    }

    /// Applies the backend's own adjustments ahead of time: spaces inside tags
    /// become underscores and the media count is clamped to the accepted range.
    pub fn normalized(mut self) -> Self {
        for list in [&mut self.tag, &mut self.and, &mut self.ignore]
            .into_iter()
            .flatten()
        {
            for entry in list.iter_mut() {
                *entry = entry.replace(' ', "_");
            }
        }
        if let Some(count) = self.media_count.as_mut() {
            *count = (*count).clamp(MIN_MEDIA_COUNT, MAX_MEDIA_COUNT);
        }
        self
    }
}

/// Splits a comma-separated field into trimmed, non-empty entries in input order.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Parses the leading integer of `raw`, yielding [`DEFAULT_MEDIA_COUNT`] when
/// there is none or when it is zero.
pub fn parse_media_count(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    match unsigned[..end].parse::<i64>() {
        Ok(0) | Err(_) => DEFAULT_MEDIA_COUNT,
        Ok(value) if negative => -value,
        Ok(value) => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_integer_rules() {
        assert_eq!(parse_media_count("12abc"), 12);
        assert_eq!(parse_media_count("  3.9"), 3);
        assert_eq!(parse_media_count("-5"), -5);
        assert_eq!(parse_media_count("+8"), 8);
        assert_eq!(parse_media_count("0"), DEFAULT_MEDIA_COUNT);
        assert_eq!(parse_media_count("-"), DEFAULT_MEDIA_COUNT);
        assert_eq!(parse_media_count("99999999999999999999"), DEFAULT_MEDIA_COUNT);
    }

    #[test]
    fn repeated_field_keeps_last_value() {
        let form = FormSnapshot::new()
            .with_field("project", "first")
            .with_field("project", "second");
        let request = LaunchRequest::from_form(&form);
        assert_eq!(request.extra.get("project").map(String::as_str), Some("second"));
    }

    #[test]
    fn normalization_rewrites_spaces_and_clamps() {
        let form = FormSnapshot::new()
            .with_field("tag", "blue sky, sea")
            .with_field("mediaCount", "50000");
        let request = LaunchRequest::from_form(&form).normalized();
        assert_eq!(
            request.tag,
            Some(vec!["blue_sky".to_string(), "sea".to_string()])
        );
        assert_eq!(request.media_count, Some(MAX_MEDIA_COUNT));

        let low = LaunchRequest::from_form(&FormSnapshot::new().with_field("mediaCount", "-3"))
            .normalized();
        assert_eq!(low.media_count, Some(MIN_MEDIA_COUNT));
    }
}
