//! Markup rendering of path diffs

use super::engine::{PathDiff, diff_paths};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Escape `& < > " '` for embedding in markup
pub fn escape_markup(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Classes and labels used when rendering a diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStyle {
    pub removed_class: String,
    pub added_class: String,
    pub unchanged_class: String,
    pub unchanged_label: String,
}

impl Default for DiffStyle {
    fn default() -> Self {
        Self {
            removed_class: "diff-removed".to_string(),
            added_class: "diff-added".to_string(),
            unchanged_class: "diff-none".to_string(),
            unchanged_label: "no changes".to_string(),
        }
    }
}

impl DiffStyle {
    /// Render `old` → `new` with this style
    pub fn render(&self, old: &str, new: &str) -> RenderedDiff {
        match diff_paths(old, new) {
            PathDiff::Unchanged => RenderedDiff::NoChanges,
            PathDiff::Changed(spans) => {
                let prefix = escape_markup(spans.prefix);
                let suffix = escape_markup(spans.suffix);
                RenderedDiff::Lines {
                    old_line: format!(
                        "{}{}{}",
                        prefix,
                        self.highlight(&self.removed_class, spans.removed),
                        suffix
                    ),
                    new_line: format!(
                        "{}{}{}",
                        prefix,
                        self.highlight(&self.added_class, spans.added),
                        suffix
                    ),
                }
            }
        }
    }

    /// Markup for a rendered diff; the two lines are joined with `<br>`
    pub fn to_markup(&self, diff: &RenderedDiff) -> String {
        match diff {
            RenderedDiff::NoChanges => format!(
                "<span class=\"{}\">{}</span>",
                escape_markup(&self.unchanged_class),
                escape_markup(&self.unchanged_label)
            ),
            RenderedDiff::Lines { old_line, new_line } => format!("{}<br>{}", old_line, new_line),
        }
    }

    fn highlight(&self, class: &str, text: &str) -> String {
        format!(
            "<span class=\"{}\">{}</span>",
            escape_markup(class),
            escape_markup(text)
        )
    }
}

/// Rendered form of a path diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedDiff {
    /// Inputs were identical
    NoChanges,
    /// Old path with the removal highlighted, new path with the addition highlighted
    Lines { old_line: String, new_line: String },
}

impl RenderedDiff {
    pub fn is_no_changes(&self) -> bool {
        matches!(self, RenderedDiff::NoChanges)
    }
}

/// Render `old` → `new` with the default style
pub fn render_path_diff(old: &str, new: &str) -> RenderedDiff {
    DiffStyle::default().render(old, new)
}

/// One entry of a rename preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePreview {
    pub old_path: String,
    pub new_path: String,
    pub diff: RenderedDiff,
}

impl RenamePreview {
    pub fn new(old_path: impl Into<String>, new_path: impl Into<String>) -> Self {
        Self::with_style(old_path, new_path, &DiffStyle::default())
    }

    pub fn with_style(
        old_path: impl Into<String>,
        new_path: impl Into<String>,
        style: &DiffStyle,
    ) -> Self {
        let old_path = old_path.into();
        let new_path = new_path.into();
        let diff = style.render(&old_path, &new_path);
        Self {
            old_path,
            new_path,
            diff,
        }
    }

    /// Preview a batch of renames, keeping input order
    pub fn from_pairs<I, O, N>(pairs: I) -> Vec<Self>
    where
        I: IntoIterator<Item = (O, N)>,
        O: Into<String>,
        N: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(old, new)| Self::new(old, new))
            .collect()
    }

    pub fn is_rename(&self) -> bool {
        !self.diff.is_no_changes()
    }
}
