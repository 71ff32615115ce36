//! Display formatters for sizes and names

use std::borrow::Cow;

const THRESHOLD: f64 = 1024.0;

/// Input accepted by [`format_size`]
///
/// Sizes arrive either as numbers or as raw text from indexer payloads.
#[derive(Debug, Clone, PartialEq)]
pub enum SizeInput<'a> {
    Bytes(f64),
    Text(Cow<'a, str>),
}

impl From<u64> for SizeInput<'_> {
    fn from(bytes: u64) -> Self {
        SizeInput::Bytes(bytes as f64)
    }
}

impl From<i64> for SizeInput<'_> {
    fn from(bytes: i64) -> Self {
        SizeInput::Bytes(bytes as f64)
    }
}

impl From<f64> for SizeInput<'_> {
    fn from(bytes: f64) -> Self {
        SizeInput::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for SizeInput<'a> {
    fn from(text: &'a str) -> Self {
        SizeInput::Text(Cow::Borrowed(text))
    }
}

impl From<String> for SizeInput<'_> {
    fn from(text: String) -> Self {
        SizeInput::Text(Cow::Owned(text))
    }
}

/// Format a byte count as a human readable string
///
/// Text that does not parse as a finite number is returned unchanged.
/// Blank text counts as zero bytes.
pub fn format_size<'a>(input: impl Into<SizeInput<'a>>) -> String {
    let bytes = match input.into() {
        SizeInput::Bytes(bytes) if bytes.is_finite() => bytes,
        SizeInput::Bytes(bytes) => return bytes.to_string(),
        SizeInput::Text(text) => match parse_size(&text) {
            Some(bytes) => bytes,
            None => return text.into_owned(),
        },
    };

    if bytes < THRESHOLD {
        return format!("{} B", bytes);
    }
    if bytes < THRESHOLD.powi(2) {
        return format!("{:.1} KB", bytes / THRESHOLD);
    }
    if bytes < THRESHOLD.powi(3) {
        return format!("{:.1} MB", bytes / THRESHOLD.powi(2));
    }
    format!("{:.1} GB", bytes / THRESHOLD.powi(3))
}

fn parse_size(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Upper-cased first character of each whitespace-delimited token
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
