//! Hashtag parsing for entry text.
//!
//! # Responsibility
//! - Extract structured tags from hashtags embedded in entry text.
//! - Produce display text with hashtags stripped.
//!
//! # Invariants
//! - Supported forms: `#value`, `#namespace:key`, `#namespace:key=value`,
//!   `#key=value`. Absent parts are empty strings.
//! - Stripping collapses runs of whitespace and trims both ends.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static RE_HASHTAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\B#\w[\w:=,.-]+").expect("hashtag pattern must compile"));
static RE_SPACES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s\s+").expect("whitespace pattern must compile"));

/// Structured tag derived from one hashtag occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Full tag text without the leading `#`.
    pub id: String,
    /// Part before `:`, or empty.
    pub namespace: String,
    /// Part between `:` and `=`, or empty.
    pub key: String,
    /// Remaining part after namespace/key are split off.
    pub value: String,
}

/// Extracts all tags embedded in `text`, in order of appearance.
pub fn parse_tags(text: &str) -> Vec<Tag> {
    RE_HASHTAG
        .find_iter(text)
        .map(|occurrence| parse_tag(occurrence.as_str()))
        .collect()
}

/// Returns `text` with hashtags removed and whitespace normalized.
pub fn strip_tags(text: &str) -> String {
    let cleaned = RE_HASHTAG.replace_all(text, " ");
    let collapsed = RE_SPACES.replace_all(&cleaned, " ");
    collapsed.trim().to_string()
}

fn parse_tag(raw: &str) -> Tag {
    let id = raw.trim_start_matches('#');

    // `a:b=c` splits to namespace=a, key=b, value=c; missing separators
    // leave the earlier fields empty and push everything into `value`.
    let (namespace, rest) = split_pair(id, ':');
    let (key, value) = split_pair(rest, '=');

    Tag {
        id: id.to_string(),
        namespace: namespace.to_string(),
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn split_pair(text: &str, separator: char) -> (&str, &str) {
    let mut parts = text.splitn(2, separator);
    match (parts.next(), parts.next()) {
        (Some(head), Some(tail)) => (head, tail),
        _ => ("", text),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_tags, strip_tags};

    #[test]
    fn parse_tags_supports_all_grammar_forms() {
        let tags = parse_tags("note #urgent #course:math #course:hw=due #grade=a1");
        assert_eq!(tags.len(), 4);

        assert_eq!(tags[0].id, "urgent");
        assert_eq!(tags[0].namespace, "");
        assert_eq!(tags[0].key, "");
        assert_eq!(tags[0].value, "urgent");

        assert_eq!(tags[1].id, "course:math");
        assert_eq!(tags[1].namespace, "course");
        assert_eq!(tags[1].key, "");
        assert_eq!(tags[1].value, "math");

        assert_eq!(tags[2].id, "course:hw=due");
        assert_eq!(tags[2].namespace, "course");
        assert_eq!(tags[2].key, "hw");
        assert_eq!(tags[2].value, "due");

        assert_eq!(tags[3].id, "grade=a1");
        assert_eq!(tags[3].namespace, "");
        assert_eq!(tags[3].key, "grade");
        assert_eq!(tags[3].value, "a1");
    }

    #[test]
    fn parse_tags_ignores_plain_text_and_lone_hash() {
        assert!(parse_tags("no tags here").is_empty());
        assert!(parse_tags("dangling # char").is_empty());
    }

    #[test]
    fn strip_tags_removes_hashtags_and_normalizes_whitespace() {
        let stripped = strip_tags("buy milk #errand and eggs #home:kitchen");
        assert_eq!(stripped, "buy milk and eggs");
    }

    #[test]
    fn strip_tags_on_tag_only_text_yields_empty_string() {
        assert_eq!(strip_tags("#only #tags"), "");
    }
}
