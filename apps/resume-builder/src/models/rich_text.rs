//! Structured text: formatted markup kept apart from plain strings.
//!
//! Markup is trusted: the HTML preview inserts it verbatim. Nothing here
//! sanitizes it.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static BREAK_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</p\s*>|</li\s*>|</h[1-6]\s*>|</div\s*>").expect("valid break regex")
});
static LIST_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<li(\s[^>]*)?>").expect("valid list item regex"));
static ANY_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(String);

impl RichText {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// The stored markup, unmodified.
    pub fn as_markup(&self) -> &str {
        &self.0
    }

    /// Readable text with tags removed, one non-empty line per block or list item.
    pub fn to_plain_text(&self) -> String {
        let text = BREAK_TAG_RE.replace_all(&self.0, "\n");
        let text = LIST_ITEM_RE.replace_all(&text, "\n• ");
        let text = ANY_TAG_RE.replace_all(&text, "");
        let text = decode_entities(&text);

        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of characters the author typed, ignoring markup, line structure
    /// and the bullets `to_plain_text` adds for list items.
    pub fn visible_len(&self) -> usize {
        let text = ANY_TAG_RE.replace_all(&self.0, "");
        decode_entities(&text)
            .lines()
            .map(|line| line.trim().chars().count())
            .sum()
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escapes text for insertion into HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
