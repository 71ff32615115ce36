//! Prefix/suffix collapsing diff

/// Spans of a changed pair, borrowed from the inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffSpans<'a> {
    /// Common leading text
    pub prefix: &'a str,
    /// Text only present in the old string
    pub removed: &'a str,
    /// Text only present in the new string
    pub added: &'a str,
    /// Common trailing text
    pub suffix: &'a str,
}

/// Result of comparing two paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathDiff<'a> {
    /// Both inputs are identical
    Unchanged,
    Changed(DiffSpans<'a>),
}

impl PathDiff<'_> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, PathDiff::Unchanged)
    }
}

/// Diff `old` against `new`
///
/// The prefix is the longest common leading run of characters. The suffix is
/// the longest common trailing run of what remains after the prefix, so the
/// two regions never overlap on either input.
pub fn diff_paths<'a>(old: &'a str, new: &'a str) -> PathDiff<'a> {
    if old == new {
        return PathDiff::Unchanged;
    }

    let prefix_len = old
        .char_indices()
        .zip(new.chars())
        .find(|((_, a), b)| a != b)
        .map(|((idx, _), _)| idx)
        .unwrap_or_else(|| old.len().min(new.len()));

    let old_rest = &old[prefix_len..];
    let new_rest = &new[prefix_len..];

    let suffix_len: usize = old_rest
        .chars()
        .rev()
        .zip(new_rest.chars().rev())
        .take_while(|(a, b)| a == b)
        .map(|(a, _)| a.len_utf8())
        .sum();

    PathDiff::Changed(DiffSpans {
        prefix: &old[..prefix_len],
        removed: &old_rest[..old_rest.len() - suffix_len],
        added: &new_rest[..new_rest.len() - suffix_len],
        suffix: &old_rest[old_rest.len() - suffix_len..],
    })
}
